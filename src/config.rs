use crate::error::AppError;
use crate::session::DEFAULT_FINAL_SCORE;
use crate::strategy::profile::DEFAULT_THRESHOLD_PERCENT;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub final_score: u32,
    pub threshold: u32,
    pub seed: Option<u64>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            final_score: DEFAULT_FINAL_SCORE,
            threshold: DEFAULT_THRESHOLD_PERCENT,
            seed: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let final_score = parse_var(&lookup, "RPSLS_FINAL_SCORE")?.unwrap_or(defaults.final_score);
        if final_score == 0 {
            return Err(AppError::ConfigError(
                "RPSLS_FINAL_SCORE must be at least 1".to_string(),
            ));
        }

        let threshold = parse_var(&lookup, "RPSLS_THRESHOLD")?.unwrap_or(defaults.threshold);
        if threshold > 100 {
            return Err(AppError::ConfigError(
                "RPSLS_THRESHOLD is a percentage (0-100)".to_string(),
            ));
        }

        let seed = parse_var(&lookup, "RPSLS_SEED")?;
        let log_level = lookup("RPSLS_LOG").unwrap_or(defaults.log_level);

        Ok(Config {
            final_score,
            threshold,
            seed,
            log_level,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| AppError::ConfigError(format!("{} = {:?}: {}", key, raw, e))),
    }
}
