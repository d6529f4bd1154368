use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};
use strum::EnumString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogRotation {
    Never,
    Daily,
    Hourly,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
    pub workers: Option<usize>,

    // Logging
    pub log_dir: String,
    pub log_file: String,
    pub log_rotation: LogRotation,
    pub log_level: tracing::Level,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            server_addr: or("SERVER_ADDR", "127.0.0.1:5000"),
            workers: lookup("WORKERS")
                .map(|v| parse::<usize>("WORKERS", &v))
                .transpose()?,
            log_dir: or("LOG_DIR", "logs"),
            log_file: or("LOG_FILE", "app.log"),
            log_rotation: parse("LOG_ROTATION", &or("LOG_ROTATION", "never"))?,
            log_level: parse("LOG_LEVEL", &or("LOG_LEVEL", "info"))?,
        })
    }
}

fn parse<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse()
        .with_context(|| format!("invalid value {value:?} for {key}"))
}
