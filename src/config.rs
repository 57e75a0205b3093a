//! Runtime configuration parsed from environment variables.
//!
//! All values have defaults, so an empty environment yields a working
//! in-memory shell on port 3000. Parsing runs through a lookup closure so
//! tests can feed values without touching the process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;
use std::time::Duration;

use crate::auth::session::DEFAULT_SESSION_DAYS;
use crate::auth::verifier::DEFAULT_LOGIN_LATENCY;

pub const DEFAULT_PORT: u16 = 3000;
/// Accepted range for `GRC_SESSION_DAYS`.
pub const SESSION_DAYS_RANGE: std::ops::RangeInclusive<i64> = 1..=3650;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    /// JSON file backing the key-value store; `None` keeps it in memory.
    pub storage_path: Option<PathBuf>,
    pub session_days: i64,
    pub login_latency: Duration,
    pub cookie_secure: bool,
    pub static_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            storage_path: None,
            session_days: DEFAULT_SESSION_DAYS,
            login_latency: DEFAULT_LOGIN_LATENCY,
            cookie_secure: false,
            static_dir: default_static_dir(),
        }
    }
}

impl AppConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `GRC_STORAGE_PATH`: file-backed storage when set
    /// - `GRC_SESSION_DAYS`: session cookie lifetime, 1 to 3650, default 7
    /// - `GRC_LOGIN_LATENCY_MS`: simulated login latency, default 500
    /// - `COOKIE_SECURE`: mark the session cookie `Secure`, default false
    /// - `GRC_STATIC_DIR`: static asset directory
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for any value that does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for any value that does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let session_days = parse_or(&lookup, "GRC_SESSION_DAYS", defaults.session_days)?;
        if !SESSION_DAYS_RANGE.contains(&session_days) {
            return Err(ConfigError::InvalidValue { key: "GRC_SESSION_DAYS", value: session_days.to_string() });
        }
        let login_latency =
            parse_opt::<_, u64>(&lookup, "GRC_LOGIN_LATENCY_MS")?.map_or(defaults.login_latency, Duration::from_millis);
        let cookie_secure = match lookup("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidValue { key: "COOKIE_SECURE", value: raw })?,
            None => defaults.cookie_secure,
        };

        Ok(Self {
            port: parse_or(&lookup, "PORT", defaults.port)?,
            storage_path: non_empty(&lookup, "GRC_STORAGE_PATH").map(PathBuf::from),
            session_days,
            login_latency,
            cookie_secure,
            static_dir: non_empty(&lookup, "GRC_STATIC_DIR").map_or(defaults.static_dir, PathBuf::from),
        })
    }
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).map(|raw| raw.trim().to_owned()).filter(|raw| !raw.is_empty())
}

fn parse_opt<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .map(|raw| raw.trim().parse::<T>().map_err(|_| ConfigError::InvalidValue { key, value: raw }))
        .transpose()
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    Ok(parse_opt(lookup, key)?.unwrap_or(default))
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
