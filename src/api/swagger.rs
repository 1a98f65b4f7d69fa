use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service API",
        version = "1.0.0",
        description = "Create and list schema-less user documents stored in MongoDB.\n\n**Errors:** storage failures always answer `500 {\"error\": \"Server error\"}`; the cause is only logged."
    ),
    paths(
        // Users
        crate::api::users::list_users,
        crate::api::users::create_user,

        // Health & Metrics
        crate::api::health::root,
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::api::health::RootResponse,
            crate::api::health::HealthResponse,
            crate::utils::ErrorResponse,
        )
    ),
    tags(
        (name = "Users", description = "Schema-less user documents. Any JSON object is accepted; `_id` is assigned by the database."),
        (name = "Health", description = "Liveness, database connectivity and request counters."),
    )
)]
pub struct ApiDoc;
