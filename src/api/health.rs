use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::services::UserStore;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct RootResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: i64,
    pub database: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Server is up", body = RootResponse)
    )
)]
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(RootResponse {
        message: "Server Working !".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service and database are healthy", body = HealthResponse),
        (status = 503, description = "Database is unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(store: web::Data<dyn UserStore>) -> impl Responder {
    let (status, database) = match store.ping().await {
        Ok(()) => ("healthy", "connected"),
        Err(e) => {
            log::warn!("⚠️  Health check: {}", e);
            ("degraded", "unavailable")
        }
    };

    let body = HealthResponse {
        status: status.to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().timestamp(),
        database: database.to_string(),
    };

    if database == "connected" {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}

#[cfg(test)]
mod tests {
    use crate::api;
    use crate::services::{memory_store::MemoryUserStore, UnavailableUserStore, UserStore};
    use actix_web::{http::StatusCode, test, web, App};
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_root_acknowledges() {
        let store: Arc<dyn UserStore> = Arc::new(MemoryUserStore::default());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(store))
                .configure(api::configure),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({ "message": "Server Working !" }));
    }

    #[actix_web::test]
    async fn test_health_reports_connected_database() {
        let store: Arc<dyn UserStore> = Arc::new(MemoryUserStore::default());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(store))
                .configure(api::configure),
        )
        .await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], "connected");
        assert_eq!(body["service"], "user-service");
    }

    #[actix_web::test]
    async fn test_health_degraded_without_database() {
        let store: Arc<dyn UserStore> = Arc::new(UnavailableUserStore::new("no connection string"));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(store))
                .configure(api::configure),
        )
        .await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["database"], "unavailable");
    }
}
