use std::path::PathBuf;

use log::LevelFilter;

use crate::enrollment::EnrollmentError;

pub const LOG_LEVEL_KEY: &str = "SAIT_LOG_LEVEL";
pub const LOG_FILE_KEY: &str = "SAIT_LOG_FILE";
pub const PRELOAD_KEY: &str = "SAIT_PRELOAD_STUDENTS";

/// Settings read once at start-up
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub log_level: LevelFilter,
    /// Write logs here instead of stderr
    pub log_file: Option<PathBuf>,
    /// Start with the built-in starter records
    pub preload_students: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Warn,
            log_file: None,
            preload_students: false,
        }
    }
}

impl AppConfig {
    /// Read settings from the environment, after merging an optional `.env` file
    pub fn from_env() -> Result<Self, EnrollmentError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, EnrollmentError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(LOG_LEVEL_KEY) {
            config.log_level = value
                .trim()
                .parse()
                .map_err(|_| invalid(LOG_LEVEL_KEY, &value))?;
        }
        if let Some(value) = lookup(LOG_FILE_KEY) {
            if !value.trim().is_empty() {
                config.log_file = Some(PathBuf::from(value));
            }
        }
        if let Some(value) = lookup(PRELOAD_KEY) {
            config.preload_students =
                parse_switch(&value).ok_or_else(|| invalid(PRELOAD_KEY, &value))?;
        }

        Ok(config)
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn invalid(key: &str, value: &str) -> EnrollmentError {
    EnrollmentError::ConfigError {
        key: key.to_string(),
        value: value.to_string(),
    }
}
