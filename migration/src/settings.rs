//! Database connection settings read from the environment.
//!
//! `DATABASE_URL` wins when set. Otherwise a Postgres URL is assembled from
//! `DB_USER`, `DB_PASSWORD`, `DB_HOST`, `DB_PORT`, `DB_NAME` (or its alias
//! `DB_KEYSPACE`) and `SSL_MODE`.

use thiserror::Error;
use url::Url;

const DEFAULT_PORT: u16 = 5432;
const DEFAULT_SSL_MODE: &str = "disable";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidValue { name: String, value: String },

    #[error("Failed to build database URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Individual Postgres connection parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub ssl_mode: String,
}

impl DatabaseSettings {
    pub fn from_env() -> Result<Self, SettingsError> {
        let port = match std::env::var("DB_PORT") {
            Ok(value) => value.parse::<u16>().map_err(|_| SettingsError::InvalidValue {
                name: "DB_PORT".to_string(),
                value,
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            user: required("DB_USER")?,
            password: required("DB_PASSWORD")?,
            host: required("DB_HOST")?,
            port,
            name: std::env::var("DB_NAME")
                .or_else(|_| std::env::var("DB_KEYSPACE"))
                .map_err(|_| SettingsError::MissingEnvVar("DB_NAME".to_string()))?,
            ssl_mode: std::env::var("SSL_MODE").unwrap_or_else(|_| DEFAULT_SSL_MODE.to_string()),
        })
    }

    /// Builds a `postgres://` URL with credentials percent-encoded.
    pub fn connection_url(&self) -> Result<String, SettingsError> {
        let mut url = Url::parse(&format!("postgres://{}:{}", self.host, self.port))?;
        url.set_path(&self.name);
        // Only fails for URLs that cannot carry credentials, which postgres:// can
        let _ = url.set_username(&self.user);
        let _ = url.set_password(Some(&self.password));
        url.query_pairs_mut().append_pair("sslmode", &self.ssl_mode);

        Ok(url.to_string())
    }
}

/// Resolves the database URL from `DATABASE_URL` or the `DB_*` variables.
pub fn database_url_from_env() -> Result<String, SettingsError> {
    if let Ok(url) = std::env::var("DATABASE_URL") {
        return Ok(url);
    }

    DatabaseSettings::from_env()?.connection_url()
}

fn required(name: &str) -> Result<String, SettingsError> {
    std::env::var(name).map_err(|_| SettingsError::MissingEnvVar(name.to_string()))
}
