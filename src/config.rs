// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    database_max_connections: u32,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://tickets.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_max_connections() -> u32 {
    16
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(ToString::to_string)
        .collect()
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        if database_url.trim().is_empty() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }
        if !database_url.starts_with("sqlite:") {
            return Err(ConfigError::Invalid(
                "DATABASE_URL must be a sqlite: URL".into(),
            ));
        }

        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.trim().parse::<u32>().ok().filter(|n| *n >= 1).ok_or_else(|| {
                ConfigError::Invalid(
                    "DATABASE_MAX_CONNECTIONS must be a positive integer".into(),
                )
            })?,
            None => default_max_connections(),
        };

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| parse_origins(&s))
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            database_url,
            listen_addr,
            database_max_connections,
            allowed_origins,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    /// Return the allowed CORS origins as configured.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}
