//! Centralized configuration for studio-server.
//!
//! All environment variables are loaded and validated at startup to fail fast
//! on misconfiguration rather than at request time.

use axum::http::HeaderValue;
use std::env;
use std::fmt;
use std::time::Duration;

/// Log output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn from_str(s: &str) -> Self {
        if s.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// Configuration error.
#[derive(Debug)]
pub struct ConfigError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration error for {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Server configuration loaded from environment variables.
///
/// All fields are validated at construction time.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port (default: 3001)
    pub port: u16,
    /// CORS allow origin
    pub cors_allow_origin: HeaderValue,
    /// Start from the demo content instead of an empty store (default: true)
    pub seed_data: bool,
    /// Artificial delay before every read (default: 0)
    pub read_latency: Duration,
    /// Artificial delay before every write (default: 0)
    pub write_latency: Duration,
    /// Add `Secure` to the session cookie (default: false)
    pub session_cookie_secure: bool,
    /// Log format
    pub log_format: LogFormat,
}

fn parse_flag(field: &'static str, raw: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        "" => Ok(default),
        other => Err(ConfigError {
            field,
            message: format!("Expected a boolean, got '{}'", other),
        }),
    }
}

fn parse_millis(field: &'static str, raw: Option<String>) -> Result<Duration, ConfigError> {
    let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
        return Ok(Duration::ZERO);
    };
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| ConfigError {
            field,
            message: format!("Invalid milliseconds '{}': {}", raw, e),
        })
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// Fails fast on invalid configuration.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Port
        let port = match env::var("PORT") {
            Ok(s) => s.parse().map_err(|e| ConfigError {
                field: "PORT",
                message: format!("Invalid port '{}': {}", s, e),
            })?,
            Err(_) => 3001,
        };

        // CORS allow origin
        let cors_origin_str = env::var("CORS_ALLOW_ORIGIN").unwrap_or_else(|_| "*".into());
        let cors_allow_origin = if cors_origin_str == "*" {
            HeaderValue::from_static("*")
        } else {
            HeaderValue::from_str(&cors_origin_str).map_err(|e| ConfigError {
                field: "CORS_ALLOW_ORIGIN",
                message: format!("Invalid header value '{}': {}", cors_origin_str, e),
            })?
        };

        let seed_data = parse_flag("SEED_DATA", env::var("SEED_DATA").ok(), true)?;

        // Simulated backend latency
        let read_latency = parse_millis("READ_LATENCY_MS", env::var("READ_LATENCY_MS").ok())?;
        let write_latency = parse_millis("WRITE_LATENCY_MS", env::var("WRITE_LATENCY_MS").ok())?;

        let session_cookie_secure = parse_flag(
            "SESSION_COOKIE_SECURE",
            env::var("SESSION_COOKIE_SECURE").ok(),
            false,
        )?;

        // Log format
        let log_format =
            LogFormat::from_str(&env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".into()));

        Ok(Self {
            port,
            cors_allow_origin,
            seed_data,
            read_latency,
            write_latency,
            session_cookie_secure,
            log_format,
        })
    }

    /// Log warnings about insecure configuration.
    pub fn warn_if_insecure(&self) {
        tracing::warn!(
            "Demo authentication is active: fixed credentials, plain-text password checks and \
             an unsigned session cookie. DO NOT USE IN PRODUCTION."
        );
        if !self.session_cookie_secure {
            tracing::warn!(
                "SESSION_COOKIE_SECURE is off: the session cookie is sent over plain HTTP."
            );
        }
    }
}
