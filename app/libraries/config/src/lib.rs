use app_error::{AppError, HttpStatus, SYSTEM_ERROR_CODE_CONFIG};
use app_log::LogLevel;
use dotenv::dotenv;
use log::*;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub web_bind: String,     // 0.0.0.0:9000
    pub log_level: LogLevel,  // Off, Error, Warn, Info, Debug, Trace
    pub database_url: String, // sqlite://lunchly.db
    pub db_connection: u32,
    pub asset_path: String,
}

impl AppConfig {
    /// Loads the JSON file named by `APP_CONFIG`; `DATABASE_URL` overrides `database_url`.
    pub fn new() -> Result<Self, AppError> {
        dotenv().ok();
        let config_file_path = env::var("APP_CONFIG").map_err(|e| {
            debug!("{}", &e);
            config_error(format!(
                "Cannot locate config file; please set APP_CONFIG env variable! {e}"
            ))
        })?;
        let mut config = Self::from_file(config_file_path)?;
        if let Ok(database_url) = env::var("DATABASE_URL") {
            config.database_url = database_url;
        }
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let config_file = fs::File::open(path.as_ref()).map_err(|e| {
            debug!("{}", &e);
            config_error(format!("Cannot read config file! {e}"))
        })?;
        serde_json::from_reader(config_file).map_err(|e| {
            debug!("{}", &e);
            config_error(format!("Cannot parse json! {e}"))
        })
    }
}

fn config_error(message: String) -> AppError {
    AppError::new(
        message,
        HttpStatus::INTERNAL_SERVER_ERROR,
        SYSTEM_ERROR_CODE_CONFIG,
    )
}
