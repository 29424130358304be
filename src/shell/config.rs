// Service configuration read from the environment.
//
// BOOKSTORE_HOST              bind address, default 0.0.0.0
// BOOKSTORE_PORT              bind port, default 8080
// BOOKSTORE_DEFAULT_PAGE_SIZE page size when a listing names none, default 20

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub default_page_size: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("BOOKSTORE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("BOOKSTORE_PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                key: "BOOKSTORE_PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };
        let default_page_size = match lookup("BOOKSTORE_DEFAULT_PAGE_SIZE") {
            Some(value) => match value.parse::<u32>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "BOOKSTORE_DEFAULT_PAGE_SIZE",
                        value,
                    });
                }
            },
            None => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            host,
            port,
            default_page_size,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
