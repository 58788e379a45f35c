// src/core/config.rs
use std::env;
use log::LevelFilter;

// Configuration for the password generator service
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Web Interface
    pub web_address: String,
    pub web_port: u16,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Web Interface
            web_address: "0.0.0.0".to_string(),
            web_port: 3000,

            // Logging
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables.
    // Rejected values come back as warnings, since the logger is not up yet.
    pub fn load() -> (Self, Vec<String>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Web Interface
        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }

        // PORT wins over WEB_PORT, matching common hosting platforms
        for key in ["WEB_PORT", "PORT"] {
            if let Some(val) = lookup(key) {
                match val.parse() {
                    Ok(port) => config.web_port = port,
                    Err(_) => warnings.push(format!("Ignoring invalid {} '{}'", key, val)),
                }
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => warnings.push(format!("Unknown log level '{}', using {}", level, config.log_level)),
            }
        }

        (config, warnings)
    }
}
