use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Process configuration, built once at startup and handed to the router
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_request_body_size: usize,
    pub static_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
                max_request_body_size: 65536,
                static_dir: "src/web/static".into(),
            },
        }
    }
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings from any key/value source, falling back to defaults for unset keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default().server;

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| Error::Config("Invalid PORT value".to_string()))?,
            None => defaults.port,
        };

        let max_request_body_size = match lookup("MAX_REQUEST_BODY_SIZE") {
            Some(value) => value
                .parse()
                .map_err(|_| Error::Config("Invalid MAX_REQUEST_BODY_SIZE value".to_string()))?,
            None => defaults.max_request_body_size,
        };

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        Ok(Settings {
            server: ServerConfig {
                host,
                port,
                max_request_body_size,
                static_dir,
            },
        })
    }

    /// Override settings with CLI arguments
    pub fn apply_overrides(&mut self, port: Option<u16>, host: Option<String>) {
        if let Some(port) = port {
            self.server.port = port;
        }
        if let Some(host) = host {
            self.server.host = host;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::Config("Port must be non-zero".to_string()));
        }

        if self.server.max_request_body_size == 0 {
            return Err(Error::Config(
                "Request body size limit must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Address the server binds to, as `host:port`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
