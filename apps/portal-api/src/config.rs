//! Application configuration loaded from environment variables.
//!
//! Fail-fast loading with validation: required variables must be present
//! and valid or the application exits with a clear error message.
//! Production mode refuses insecure development defaults.

use std::env;
use std::time::Duration;
use thiserror::Error;

/// Default JWT secret, for development only.
pub const INSECURE_JWT_SECRET: &str = "development-jwt-secret-change-in-production";

/// Application environment mode.
///
/// Controls security enforcement behavior:
/// - `Development`: insecure defaults are allowed with WARN-level logging.
/// - `Production`: insecure defaults cause the application to refuse startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Production,
}

impl AppEnvironment {
    /// Parse from the `APP_ENV` environment variable value.
    /// Defaults to `Development` if unset or unrecognized.
    pub fn from_env_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "development" | "dev" => Self::Development,
            other => {
                tracing::warn!(
                    value = other,
                    "Unrecognized APP_ENV value, defaulting to Development"
                );
                Self::Development
            }
        }
    }

    /// Returns true if this is production mode.
    #[must_use]
    pub fn is_production(&self) -> bool {
        *self == Self::Production
    }
}

impl std::fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Configuration errors that can occur during environment loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Failed to parse port: {0}")]
    InvalidPort(#[from] std::num::ParseIntError),
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind host (default: 0.0.0.0).
    pub host: String,

    /// Bind port (default: 8080).
    pub port: u16,

    /// Environment mode from `APP_ENV`.
    pub environment: AppEnvironment,

    /// HS256 secret for verifying access tokens.
    pub jwt_secret: String,

    /// Allowed CORS origins; `*` enables the permissive policy.
    pub cors_origins: Vec<String>,

    /// External cache service base URL. When unset, the in-process cache
    /// backend is used.
    pub cache_url: Option<String>,

    /// Bearer token for the external cache service.
    pub cache_token: Option<String>,

    /// TTL for catalog cache entries.
    pub cache_ttl: Duration,

    /// TTL for per-user capability cache entries.
    pub capability_ttl: Duration,

    /// Log filter directive.
    pub log_filter: String,

    /// Maximum accepted request body size, in bytes.
    pub max_body_size: usize,

    /// Email of the platform admin account to seed at startup, if any.
    pub bootstrap_admin_email: Option<String>,

    /// Display name for the seeded platform admin account.
    pub bootstrap_admin_name: Option<String>,
}

fn optional(var: &str) -> Option<String> {
    env::var(var).ok().filter(|s| !s.is_empty())
}

fn parse_secs(value: Option<String>, var: &str, default: u64) -> Result<Duration, ConfigError> {
    match value {
        None => Ok(Duration::from_secs(default)),
        Some(raw) => raw
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|e| ConfigError::InvalidValue {
                var: var.to_string(),
                message: e.to_string(),
            }),
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment =
            AppEnvironment::from_env_str(&env::var("APP_ENV").unwrap_or_default());

        let host = optional("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 = optional("PORT").unwrap_or_else(|| "8080".to_string()).parse()?;
        if port == 0 {
            return Err(ConfigError::InvalidValue {
                var: "PORT".to_string(),
                message: "Port must be non-zero".to_string(),
            });
        }

        let jwt_secret = match optional("JWT_SECRET") {
            Some(secret) => secret,
            None if environment.is_production() => {
                return Err(ConfigError::MissingVar("JWT_SECRET".to_string()));
            }
            None => INSECURE_JWT_SECRET.to_string(),
        };

        let cors_origins = optional("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let cache_url = optional("CACHE_URL");
        let cache_token = optional("CACHE_TOKEN");
        if cache_url.is_some() && cache_token.is_none() {
            return Err(ConfigError::MissingVar("CACHE_TOKEN".to_string()));
        }

        Ok(Self {
            host,
            port,
            environment,
            jwt_secret,
            cors_origins,
            cache_url,
            cache_token,
            cache_ttl: parse_secs(optional("CACHE_TTL_SECS"), "CACHE_TTL_SECS", 3600)?,
            capability_ttl: parse_secs(
                optional("CAPABILITY_TTL_SECS"),
                "CAPABILITY_TTL_SECS",
                300,
            )?,
            log_filter: optional("LOG_FILTER").unwrap_or_else(|| "info".to_string()),
            max_body_size: optional("MAX_BODY_SIZE")
                .unwrap_or_else(|| "262144".to_string())
                .parse()
                .map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
                    var: "MAX_BODY_SIZE".to_string(),
                    message: e.to_string(),
                })?,
            bootstrap_admin_email: optional("BOOTSTRAP_ADMIN_EMAIL"),
            bootstrap_admin_name: optional("BOOTSTRAP_ADMIN_NAME"),
        })
    }

    /// Validate security-sensitive settings against the environment mode.
    ///
    /// Returns warnings to log in development; in production any finding is
    /// a startup-refusing error.
    pub fn validate_security(&self) -> Result<Vec<String>, Vec<String>> {
        let mut findings = Vec::new();

        if self.jwt_secret == INSECURE_JWT_SECRET {
            findings.push("JWT_SECRET is the insecure development default".to_string());
        }
        if self.jwt_secret.len() < 32 {
            findings.push("JWT_SECRET is shorter than 32 bytes".to_string());
        }
        if self.cors_origins.iter().any(|o| o == "*") {
            findings.push("CORS_ORIGINS allows any origin".to_string());
        }

        if self.environment.is_production() && !findings.is_empty() {
            Err(findings)
        } else {
            Ok(findings)
        }
    }
}
