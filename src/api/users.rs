use actix_web::{web, HttpResponse, Responder, ResponseError};

use crate::{models::NewUser, services::UserStore};

/// GET /users - Every stored user, in whatever order the database returns them
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "Every stored user document", body = [Object]),
        (status = 500, description = "Storage failure", body = crate::utils::ErrorResponse)
    )
)]
pub async fn list_users(store: web::Data<dyn UserStore>) -> impl Responder {
    match store.list_users().await {
        Ok(users) => {
            log::debug!("📋 GET /users - {} users", users.len());
            HttpResponse::Ok().json(users)
        }
        Err(e) => {
            log::error!("❌ Error listing users: {}", e);
            e.error_response()
        }
    }
}

/// POST /users - Stores the request body as a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body(content = Object, description = "Any JSON object without `_id`"),
    responses(
        (status = 200, description = "The stored document, including its assigned `_id`", body = Object),
        (status = 400, description = "Body is not a JSON object, carries `_id`, or holds an integer above i64::MAX", body = crate::utils::ErrorResponse),
        (status = 500, description = "Storage failure", body = crate::utils::ErrorResponse)
    )
)]
pub async fn create_user(
    store: web::Data<dyn UserStore>,
    request: web::Json<NewUser>,
) -> impl Responder {
    match store.create_user(request.into_inner()).await {
        Ok(user) => {
            log::info!("✅ User created: {}", user.id);
            HttpResponse::Ok().json(user)
        }
        Err(e) => {
            log::error!("❌ Error creating user: {}", e);
            e.error_response()
        }
    }
}
