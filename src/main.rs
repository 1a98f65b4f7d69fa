mod api;
mod config;
mod database;
mod middleware;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::services::{MongoUserStore, UnavailableUserStore, UserStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    log::info!("🚀 Starting User Service...");

    let store = connect_store(&config).await;
    let store_data: web::Data<dyn UserStore> = web::Data::from(store);

    log::info!("🌐 Server starting on {}", config.bind_address());
    log::info!("📚 Swagger UI available at: http://{}/swagger-ui/", config.bind_address());

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(store_data.clone())
            .wrap(cors)
            .wrap(middleware::RequestMetrics)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi)
            )
            .configure(api::configure)
    })
    .bind(config.bind_address())?
    .run()
    .await
}

/// A missing or unreachable database never stops the server: failures are
/// logged and requests touching storage answer with the generic 500.
async fn connect_store(config: &Config) -> Arc<dyn UserStore> {
    let Some(url) = config.database_url.as_deref() else {
        log::error!("❌ Neither MONGODB_URL nor MONGO_URL is set; storage is unavailable");
        return Arc::new(UnavailableUserStore::new("no connection string configured"));
    };

    let db = match database::MongoDB::new(url, config.database_name.as_deref()).await {
        Ok(db) => db,
        Err(e) => {
            log::error!("❌ MongoDB Connection Failed: {}", e);
            return Arc::new(UnavailableUserStore::new(e.to_string()));
        }
    };

    match db.ping().await {
        Ok(()) => log::info!("✅ MongoDB Connected Successfully ({})", db.database().name()),
        Err(e) => log::error!("❌ MongoDB Connection Failed: {}", e),
    }

    Arc::new(MongoUserStore::new(db))
}
