//! Server configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` before anything here runs, so values may come
//! from either the process environment or that file.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MEETINGS_TABLE: &str = "meetings";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env var {var}")]
    Missing { var: &'static str },
    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Connection settings for the hosted meetings table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseConfig {
    /// Project URL without a trailing slash, e.g. `https://abc.supabase.co`.
    pub url: String,
    pub api_key: String,
    pub table: String,
    pub timeouts: BackendTimeouts,
}

impl SupabaseConfig {
    /// Build typed backend config from environment variables.
    ///
    /// Required:
    /// - `SUPABASE_URL`
    /// - `SUPABASE_KEY`
    ///
    /// Optional:
    /// - `SUPABASE_TABLE`: default `meetings`
    /// - `SUPABASE_REQUEST_TIMEOUT_SECS`: default 30
    /// - `SUPABASE_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when a required variable is unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = required("SUPABASE_URL")?.trim_end_matches('/').to_owned();
        let api_key = required("SUPABASE_KEY")?;
        let table = std::env::var("SUPABASE_TABLE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MEETINGS_TABLE.to_owned());
        let timeouts = BackendTimeouts {
            request_secs: env_parse_u64("SUPABASE_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("SUPABASE_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        Ok(Self { url, api_key, table, timeouts })
    }
}

/// Listen port from `PORT`, defaulting to 3000.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] when `PORT` is set but not a valid port.
pub fn port_from_env() -> Result<u16, ConfigError> {
    match std::env::var("PORT") {
        Ok(raw) => raw
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw }),
        Err(_) => Ok(DEFAULT_PORT),
    }
}

fn required(var: &'static str) -> Result<String, ConfigError> {
    std::env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing { var })
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
