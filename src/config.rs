use crate::utils::AppError;
use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

/// Runtime configuration, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// `MONGODB_URL`, falling back to `MONGO_URL`.
    pub database_url: Option<String>,
    /// Explicit override; otherwise the database named in the URL is used.
    pub database_name: Option<String>,
}

impl Config {
    /// Reads the process environment. Call `dotenv().ok()` first so a local
    /// `.env` file is honoured.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::ConfigError(format!("PORT must be a valid port number, got '{}'", raw))
            })?,
            None => DEFAULT_PORT,
        };

        let database_url = get("MONGODB_URL").or_else(|| get("MONGO_URL"));
        let database_name = get("MONGODB_DATABASE");

        Ok(Self {
            host,
            port,
            database_url,
            database_name,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
