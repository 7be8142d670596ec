use std::time::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_DATABASE_TIMEOUT_SECS: u64 = 30;
const DEFAULT_AUTH_TIMEOUT_SECS: u64 = 5;
/// Every minute, at second zero.
const DEFAULT_LIFECYCLE_SCHEDULE: &str = "0 * * * * *";

/// Logging profile selected by `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    /// Human-readable output at debug level.
    Local,
    /// JSON output at debug level.
    Dev,
    /// JSON output at info level.
    Prod,
}

impl AppEnv {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value {
            "local" => Ok(Self::Local),
            "dev" => Ok(Self::Dev),
            "prod" => Ok(Self::Prod),
            other => Err(ConfigError::InvalidEnvVar {
                name: "APP_ENV".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    /// External auth endpoint; `None` disables the pass-through check.
    pub auth_url: Option<String>,
    pub database_timeout: Duration,
    /// Bounds each call to the auth service.
    pub auth_timeout: Duration,
    /// Cron expression (with seconds) for the lifecycle jobs.
    pub lifecycle_schedule: String,
    pub app_env: AppEnv,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let database_timeout =
            secs_var(&lookup, "DATABASE_TIMEOUT_SECS", DEFAULT_DATABASE_TIMEOUT_SECS)?;
        let auth_timeout = secs_var(&lookup, "AUTH_TIMEOUT_SECS", DEFAULT_AUTH_TIMEOUT_SECS)?;

        let app_env = match lookup("APP_ENV") {
            Some(value) => AppEnv::parse(&value)?,
            None => AppEnv::Local,
        };

        Ok(Self {
            database_url,
            bind_address: lookup("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            auth_url: lookup("AUTH_URL").filter(|url| !url.is_empty()),
            database_timeout,
            auth_timeout,
            lifecycle_schedule: lookup("LIFECYCLE_SCHEDULE")
                .unwrap_or_else(|| DEFAULT_LIFECYCLE_SCHEDULE.to_string()),
            app_env,
        })
    }
}

/// Reads a whole number of seconds, falling back to `default` when unset.
fn secs_var(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: u64,
) -> Result<Duration, ConfigError> {
    let Some(value) = lookup(name) else {
        return Ok(Duration::from_secs(default));
    };

    value
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn applies_defaults() {
        let config = Config::from_lookup(lookup(&[("DATABASE_URL", "sqlite::memory:")])).unwrap();

        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(config.auth_url, None);
        assert_eq!(config.database_timeout, Duration::from_secs(30));
        assert_eq!(config.auth_timeout, Duration::from_secs(5));
        assert_eq!(config.lifecycle_schedule, DEFAULT_LIFECYCLE_SCHEDULE);
        assert_eq!(config.app_env, AppEnv::Local);
    }

    #[test]
    fn requires_database_url() {
        let result = Config::from_lookup(lookup(&[]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(name))) if name == "DATABASE_URL"
        ));
    }

    #[test]
    fn rejects_non_numeric_timeout() {
        let result = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("DATABASE_TIMEOUT_SECS", "soon"),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));
    }

    #[test]
    fn reads_timeouts_independently() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("DATABASE_TIMEOUT_SECS", "60"),
            ("AUTH_TIMEOUT_SECS", "2"),
        ]))
        .unwrap();

        assert_eq!(config.database_timeout, Duration::from_secs(60));
        assert_eq!(config.auth_timeout, Duration::from_secs(2));
    }
}
