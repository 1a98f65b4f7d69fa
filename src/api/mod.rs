pub mod health;
pub mod metrics;
pub mod swagger;
pub mod users;

use actix_web::web;

use crate::utils::AppError;

/// Routes of the user service. The store is registered by the caller as
/// `web::Data<dyn UserStore>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("⚠️  Rejected request body: {}", err);
        AppError::InvalidRequest(err.to_string()).into()
    }))
    .route("/", web::get().to(health::root))
    .route("/health", web::get().to(health::health_check))
    .route("/metrics", web::get().to(metrics::get_metrics))
    .service(
        web::resource("/users")
            .route(web::get().to(users::list_users))
            .route(web::post().to(users::create_user)),
    );
}
