// src/core/config.rs
use std::env;
use std::time::Duration;

use log::LevelFilter;

use crate::breach;

// Configuration for the password engine and its CLI caller
#[derive(Debug, Clone)]
pub struct Config {
    // Breach checking
    pub breach_endpoint: String,
    pub breach_timeout: Duration,

    // Password Generation
    pub default_password_length: usize,
    pub default_exclude_ambiguous: bool,

    // Passphrase Generation
    pub default_word_count: usize,
    pub default_separator: String,

    // History
    pub history_capacity: usize,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Breach checking
            breach_endpoint: breach::DEFAULT_ENDPOINT.to_string(),
            breach_timeout: Duration::from_millis(breach::DEFAULT_TIMEOUT_MS),

            // Password Generation
            default_password_length: 16,
            default_exclude_ambiguous: false,

            // Passphrase Generation
            default_word_count: 4,
            default_separator: "-".to_string(),

            // History
            history_capacity: 20,

            // Logging
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        // Breach checking
        if let Ok(endpoint) = env::var("BREACH_ENDPOINT") {
            config.breach_endpoint = endpoint;
        }

        if let Ok(val) = env::var("BREACH_TIMEOUT_MS") {
            if let Ok(timeout) = val.parse::<u64>() {
                config.breach_timeout = Duration::from_millis(timeout);
            }
        }

        // Password Generation
        if let Ok(val) = env::var("DEFAULT_PASSWORD_LENGTH") {
            if let Ok(length) = val.parse() {
                config.default_password_length = length;
            }
        }

        if let Ok(val) = env::var("DEFAULT_PASSWORD_EXCLUDE_AMBIGUOUS") {
            if let Ok(exclude) = val.parse() {
                config.default_exclude_ambiguous = exclude;
            }
        }

        // Passphrase Generation
        if let Ok(val) = env::var("DEFAULT_WORD_COUNT") {
            if let Ok(count) = val.parse() {
                config.default_word_count = count;
            }
        }

        if let Ok(separator) = env::var("DEFAULT_SEPARATOR") {
            config.default_separator = separator;
        }

        // History
        if let Ok(val) = env::var("HISTORY_CAPACITY") {
            if let Ok(capacity) = val.parse() {
                config.history_capacity = capacity;
            }
        }

        // Logging
        if let Ok(level) = env::var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "trace" => config.log_level = LevelFilter::Trace,
                "debug" => config.log_level = LevelFilter::Debug,
                "info" => config.log_level = LevelFilter::Info,
                "warn" | "warning" => config.log_level = LevelFilter::Warn,
                "error" => config.log_level = LevelFilter::Error,
                "off" => config.log_level = LevelFilter::Off,
                _ => log::warn!("Unknown log level '{}', using Info", level),
            }
        }

        config
    }
}
