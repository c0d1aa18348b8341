use std::env;
use std::path::PathBuf;

use crate::errors::AppError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Seed file to load instead of the bundled dataset.
    pub data_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(
            env::var("HOST").ok(),
            env::var("PORT").ok(),
            env::var("DATA_FILE").ok(),
        )
    }

    fn from_vars(
        host: Option<String>,
        port: Option<String>,
        data_file: Option<String>,
    ) -> Result<Self, AppError> {
        let port = match port.filter(|p| !p.is_empty()) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| AppError::Config(format!("PORT must be a port number, got {:?}", raw)))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: host
                .filter(|h| !h.is_empty())
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            data_file: data_file.filter(|f| !f.is_empty()).map(PathBuf::from),
        })
    }
}
