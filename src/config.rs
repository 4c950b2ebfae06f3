//! Runtime configuration resolved from the environment

use std::path::PathBuf;

use crate::constants::{API_URL_ENV, CUSTOMERS_PATH, DEFAULT_API_BASE_URL, LOG_DIR_ENV};

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Backend base URL without a trailing slash
    pub api_base_url: String,
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: String::from(DEFAULT_API_BASE_URL),
            log_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Build the config from process environment variables
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(API_URL_ENV).ok(),
            std::env::var(LOG_DIR_ENV).ok(),
        )
    }

    /// Build the config from optional raw values; blanks fall back to defaults
    pub fn from_vars(api_url: Option<String>, log_dir: Option<String>) -> Self {
        let mut config = Config::default();

        if let Some(url) = api_url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(dir) = log_dir.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
            config.log_dir = PathBuf::from(dir);
        }

        config
    }

    /// Full URL of the customers collection
    pub fn customers_url(&self) -> String {
        format!("{}{}", self.api_base_url, CUSTOMERS_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_vars(None, None);
        assert_eq!(config, Config::default());
        assert_eq!(config.customers_url(), "http://localhost:8080/api/customers");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = Config::from_vars(Some("https://crm.example.com/".into()), None);
        assert_eq!(config.customers_url(), "https://crm.example.com/api/customers");
    }

    #[test]
    fn test_blank_values_ignored() {
        let config = Config::from_vars(Some("   ".into()), Some(String::new()));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.log_dir, PathBuf::from("."));
    }

    #[test]
    fn test_log_dir_override() {
        let config = Config::from_vars(None, Some("/var/log/desk".into()));
        assert_eq!(config.log_dir, PathBuf::from("/var/log/desk"));
    }
}
