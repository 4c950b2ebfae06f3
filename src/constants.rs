//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default backend base URL when no override is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Path of the customers collection on the backend
pub const CUSTOMERS_PATH: &str = "/api/customers";

/// Environment variable overriding the backend base URL
pub const API_URL_ENV: &str = "CUSTOMER_DESK_API_URL";

/// Environment variable overriding the log directory
pub const LOG_DIR_ENV: &str = "CUSTOMER_DESK_LOG_DIR";

/// Diagnostic log file name
pub const LOG_FILE_NAME: &str = "customer-desk.log";

/// Application name
pub const APP_NAME: &str = "Customer Desk";
