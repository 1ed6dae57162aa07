use std::env;
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} must be a valid number, got '{value}'")]
    Invalid { name: &'static str, value: String },
    #[error("Invalid database URL: {0}")]
    Url(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    /// Language used for group and product names.
    pub lang_id: u32,
    pub transcript_path: PathBuf,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));
        let or_default =
            |name: &'static str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        Ok(Self {
            db_host: required("DB_HOST")?,
            db_port: parse("DB_PORT", or_default("DB_PORT", "3306"))?,
            db_user: required("DB_USER")?,
            db_password: required("DB_PASSWORD")?,
            db_name: required("DB_NAME")?,
            lang_id: parse("DB_LANG_ID", or_default("DB_LANG_ID", "1"))?,
            transcript_path: PathBuf::from(or_default("TRANSCRIPT_PATH", "transcripciones.txt")),
            host: or_default("HOST", "127.0.0.1"),
            port: parse("PORT", or_default("PORT", "8080"))?,
        })
    }

    /// `mysql://` URL with percent-encoded credentials.
    pub fn database_url(&self) -> Result<String, ConfigError> {
        let mut url = Url::parse("mysql://localhost").map_err(|e| ConfigError::Url(e.to_string()))?;
        url.set_host(Some(&self.db_host))
            .map_err(|e| ConfigError::Url(e.to_string()))?;
        url.set_port(Some(self.db_port))
            .map_err(|_| ConfigError::Url("cannot set port".to_string()))?;
        url.set_username(&self.db_user)
            .map_err(|_| ConfigError::Url("cannot set user".to_string()))?;
        url.set_password(Some(&self.db_password))
            .map_err(|_| ConfigError::Url("cannot set password".to_string()))?;
        url.set_path(&self.db_name);
        Ok(url.to_string())
    }
}

fn parse<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}
