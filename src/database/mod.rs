use mongodb::bson::doc;
use mongodb::{options::ClientOptions, Client, Database};
use std::time::Duration;

/// Used when neither `MONGODB_DATABASE` nor the connection string names one.
pub const DEFAULT_DATABASE: &str = "test";

/// Long-lived MongoDB handle, created once at startup and shared by every
/// request through the user store.
#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    /// Builds the client without touching the network beyond what the
    /// connection string requires (SRV/TXT lookups). Call [`MongoDB::ping`]
    /// to find out whether the server is actually reachable.
    pub async fn new(uri: &str, database_name: Option<&str>) -> mongodb::error::Result<Self> {
        let mut client_options = ClientOptions::parse(uri).await?;

        // Connection pool
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(0);
        client_options.max_idle_time = Some(Duration::from_secs(300));

        client_options.connect_timeout = Some(Duration::from_secs(5));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));

        let db_name = database_name
            .map(str::to_string)
            .or_else(|| client_options.default_database.clone())
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        let client = Client::with_options(client_options)?;
        let db = client.database(&db_name);

        Ok(Self { db })
    }

    pub async fn ping(&self) -> mongodb::error::Result<()> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_database_name_from_uri() {
        let db = MongoDB::new("mongodb://localhost:27017/multi_docker", None)
            .await
            .unwrap();
        assert_eq!(db.database().name(), "multi_docker");
    }

    #[tokio::test]
    async fn test_database_name_override() {
        let db = MongoDB::new("mongodb://localhost:27017/multi_docker", Some("users_db"))
            .await
            .unwrap();
        assert_eq!(db.database().name(), "users_db");
    }

    #[tokio::test]
    async fn test_database_name_default() {
        let db = MongoDB::new("mongodb://localhost:27017", None).await.unwrap();
        assert_eq!(db.database().name(), DEFAULT_DATABASE);
    }

    #[tokio::test]
    async fn test_invalid_uri() {
        assert!(MongoDB::new("postgres://localhost:5432", None).await.is_err());
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_mongodb_connection() {
        dotenv::dotenv().ok();
        let uri = std::env::var("MONGODB_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        let db = MongoDB::new(&uri, None).await.unwrap();
        assert!(db.ping().await.is_ok());
    }
}
