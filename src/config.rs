use dioxus_logger::tracing::Level;

use crate::error::{config::ConfigError, AppError};

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// Discord user notified when the task queue overloads.
    pub owner_id: u64,

    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            discord_bot_token: required_var("DISCORD_BOT_TOKEN")?,
            owner_id: parse_var("OWNER_ID", required_var("OWNER_ID")?)?,
            log_level: match std::env::var("LOG_LEVEL") {
                Ok(value) => parse_var("LOG_LEVEL", value.to_uppercase())?,
                Err(_) => Level::INFO,
            },
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_var<T: std::str::FromStr>(name: &str, value: String) -> Result<T, ConfigError> {
    value.parse::<T>().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
    })
}
