use crate::assessment::{ConfidenceWeights, ScoringConfig, ScoringConfigError};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the tool.
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
    pub assessment: AssessmentSettings,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        let question_bank = env::var("SKILLFIT_QUESTION_BANK")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let scoring = match env::var("SKILLFIT_CONFIDENCE_WEIGHTS") {
            Ok(raw) if !raw.trim().is_empty() => {
                let weights = ConfidenceWeights::parse(&raw)
                    .map_err(|source| ConfigError::InvalidConfidenceWeights { value: raw, source })?;
                ScoringConfig {
                    confidence_weights: weights,
                }
            }
            _ => ScoringConfig::default(),
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            assessment: AssessmentSettings {
                question_bank,
                scoring,
            },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where questions come from and how confidence is blended.
#[derive(Debug, Clone, Default)]
pub struct AssessmentSettings {
    pub question_bank: Option<PathBuf>,
    pub scoring: ScoringConfig,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidConfidenceWeights {
        value: String,
        source: ScoringConfigError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidConfidenceWeights { value, source } => write!(
                f,
                "SKILLFIT_CONFIDENCE_WEIGHTS '{}' must be three non-negative numbers: {}",
                value, source
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidConfidenceWeights { source, .. } => Some(source),
        }
    }
}

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
        env::remove_var("SKILLFIT_QUESTION_BANK");
        env::remove_var("SKILLFIT_CONFIDENCE_WEIGHTS");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "warn");
        assert!(config.assessment.question_bank.is_none());
        assert_eq!(
            config.assessment.scoring.confidence_weights,
            ConfidenceWeights::default()
        );
    }

    #[test]
    fn reads_bank_path_and_weights() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "ci");
        env::set_var("SKILLFIT_QUESTION_BANK", "banks/custom.json");
        env::set_var("SKILLFIT_CONFIDENCE_WEIGHTS", "2, 1, 1");
        let config = AppConfig::load().expect("config loads");
        reset_env();

        assert_eq!(config.environment, AppEnvironment::Test);
        assert_eq!(
            config.assessment.question_bank,
            Some(PathBuf::from("banks/custom.json"))
        );
        assert_eq!(config.assessment.scoring.confidence_weights.psychological, 2.0);
    }

    #[test]
    fn rejects_malformed_weights() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SKILLFIT_CONFIDENCE_WEIGHTS", "0,0,0");
        let err = AppConfig::load().expect_err("zero weights rejected");
        reset_env();

        match err {
            ConfigError::InvalidConfidenceWeights { source, .. } => {
                assert_eq!(source, ScoringConfigError::ZeroWeights)
            }
        }
    }
}
