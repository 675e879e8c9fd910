use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;
const DEFAULT_CACHE_TTL_SECONDS: u64 = 300;
const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";

/// Credentials for the admin account seeded at startup.
pub struct AdminSeed {
    pub username: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,

    pub redis_url: Option<String>,
    pub cache_ttl_seconds: u64,

    pub server_addr: String,
    pub migrations_dir: PathBuf,

    /// Set only when both `ADMIN_USERNAME` and `ADMIN_PASSWORD` are present.
    pub admin_seed: Option<AdminSeed>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let admin_seed = match (
            std::env::var("ADMIN_USERNAME"),
            std::env::var("ADMIN_PASSWORD"),
        ) {
            (Ok(username), Ok(password)) => Some(AdminSeed { username, password }),
            _ => None,
        };

        Ok(Self {
            database_url: migration::database_url_from_env().map_err(ConfigError::from)?,
            jwt_secret: std::env::var("JWT_SECRET_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET_KEY".to_string()))?,
            jwt_expiration_hours: parse_or("JWT_EXPIRATION_HOURS", DEFAULT_JWT_EXPIRATION_HOURS)?,
            redis_url: std::env::var("REDIS_URL").ok().filter(|url| !url.is_empty()),
            cache_ttl_seconds: parse_or("CACHE_TTL_SECONDS", DEFAULT_CACHE_TTL_SECONDS)?,
            server_addr: std::env::var("SERVER_ADDR")
                .unwrap_or_else(|_| DEFAULT_SERVER_ADDR.to_string()),
            migrations_dir: std::env::var("MIGRATIONS_DIR")
                .unwrap_or_else(|_| migration::DEFAULT_MIGRATIONS_DIR.to_string())
                .into(),
            admin_seed,
        })
    }
}

/// Reads an optional numeric variable, falling back to `default` when unset.
fn parse_or<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse::<T>().map_err(|_| ConfigError::InvalidValue {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
