use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub shortlist: ShortlistConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let raw_min_score =
            env::var("APP_SHORTLIST_MIN_SCORE").unwrap_or_else(|_| "90".to_string());
        let min_score = raw_min_score
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|score| (0.0..=100.0).contains(score))
            .ok_or_else(|| ConfigError::InvalidShortlistScore {
                value: raw_min_score.clone(),
            })?;

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            shortlist: ShortlistConfig { min_score },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Final-score threshold at which candidates are pushed to the shortlist seam.
#[derive(Debug, Clone)]
pub struct ShortlistConfig {
    pub min_score: f64,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidShortlistScore { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidShortlistScore { value } => {
                write!(
                    f,
                    "APP_SHORTLIST_MIN_SCORE must be a number between 0 and 100, got '{}'",
                    value
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_SHORTLIST_MIN_SCORE");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.shortlist.min_score, 90.0);
    }

    #[test]
    fn load_reads_environment_and_threshold() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "production");
        env::set_var("APP_SHORTLIST_MIN_SCORE", "82.5");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.shortlist.min_score, 82.5);
        reset_env();
    }

    #[test]
    fn load_rejects_out_of_range_threshold() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_SHORTLIST_MIN_SCORE", "140");
        let err = AppConfig::load().expect_err("threshold above 100 rejected");
        assert!(matches!(err, ConfigError::InvalidShortlistScore { .. }));
        reset_env();
    }
}
