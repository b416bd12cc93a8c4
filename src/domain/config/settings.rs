use std::{str::FromStr, time::Duration};

use thiserror::Error;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;
const DEFAULT_DOWNLOAD_URL_TTL_SECS: u64 = 3600;
/// S3 refuses presigned URLs valid for longer than seven days.
const MAX_DOWNLOAD_URL_TTL_SECS: u64 = 7 * 24 * 3600;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} environment variable must be set")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub max_upload_bytes: usize,
    pub download_url_ttl: Duration,
    /// `None` means permissive CORS.
    pub cors_allowed_origins: Option<Vec<String>>,
    pub storage: StorageSettings,
    pub database: DatabaseSettings,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StorageSettings {
    pub bucket: String,
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
    pub force_path_style: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseSettings {
    /// Full connection URL; takes precedence over the discrete fields.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: None,
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: String::new(),
            name: "file_manager".to_string(),
            max_connections: 5,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bucket = get("S3_BUCKET").ok_or(ConfigError::Missing("S3_BUCKET"))?;

        let storage = StorageSettings {
            bucket,
            region: get("AWS_REGION"),
            endpoint_url: get("S3_ENDPOINT_URL"),
            force_path_style: parse_or(get("S3_FORCE_PATH_STYLE"), "S3_FORCE_PATH_STYLE", false)?,
        };

        let defaults = DatabaseSettings::default();
        let database = DatabaseSettings {
            url: get("DATABASE_URL"),
            host: get("DB_HOST").unwrap_or(defaults.host),
            port: parse_or(get("DB_PORT"), "DB_PORT", defaults.port)?,
            user: get("DB_USER").unwrap_or(defaults.user),
            // Passwords are taken verbatim, including surrounding whitespace.
            password: lookup("DB_PASS").unwrap_or(defaults.password),
            name: get("DB_NAME").unwrap_or(defaults.name),
            max_connections: parse_or(
                get("DB_MAX_CONNECTIONS"),
                "DB_MAX_CONNECTIONS",
                defaults.max_connections,
            )?,
        };

        let cors_allowed_origins = get("CORS_ALLOWED_ORIGINS").map(|origins| {
            origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        let ttl_secs = parse_or(
            get("DOWNLOAD_URL_TTL_SECS"),
            "DOWNLOAD_URL_TTL_SECS",
            DEFAULT_DOWNLOAD_URL_TTL_SECS,
        )?;
        if ttl_secs == 0 || ttl_secs > MAX_DOWNLOAD_URL_TTL_SECS {
            return Err(ConfigError::Invalid {
                name: "DOWNLOAD_URL_TTL_SECS",
                value: ttl_secs.to_string(),
            });
        }

        Ok(Self {
            port: parse_or(get("PORT"), "PORT", DEFAULT_PORT)?,
            max_upload_bytes: parse_or(
                get("MAX_UPLOAD_BYTES"),
                "MAX_UPLOAD_BYTES",
                DEFAULT_MAX_UPLOAD_BYTES,
            )?,
            download_url_ttl: Duration::from_secs(ttl_secs),
            cors_allowed_origins,
            storage,
            database,
        })
    }
}

fn parse_or<T: FromStr>(
    value: Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(raw) => raw
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
        None => Ok(default),
    }
}
