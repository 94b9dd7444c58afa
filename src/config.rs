//! Configuration constants and utilities for userline
//!
//! Defaults for the user directory endpoint and the list layout, plus the
//! environment variables that override them.

use std::time::Duration;

/// Endpoint the user list is fetched from
pub const DEFAULT_USERS_URL: &str = "https://dummyjson.com/users";

/// Environment variable name for overriding the users endpoint
pub const USERS_URL_ENV_VAR: &str = "USERLINE_USERS_URL";

/// Environment variable holding the tracing filter directives
pub const LOG_LEVEL_ENV_VAR: &str = "USERLINE_LOG_LEVEL";

/// Rows per page
pub const PAGE_SIZE: usize = 10;

/// Request timeout when none is given on the command line
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Get the users endpoint, checking environment variable first, then falling back to default
pub fn get_users_url() -> String {
    std::env::var_os(USERS_URL_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .filter(|val| !val.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_USERS_URL.to_string())
}

pub fn default_timeout() -> Duration {
    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
}
