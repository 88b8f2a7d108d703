use crate::utils::error::{AppError, AppResult};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_vars(
            std::env::var("HEXHUE_HOST").ok(),
            std::env::var("PORT").ok(),
        )
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> AppResult<Self> {
        let host = host.unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match port {
            Some(port) => port
                .parse::<u16>()
                .map_err(|e| AppError::Internal(format!("Invalid PORT {}: {}", port, e)))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }
}
