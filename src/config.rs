use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Fixed seed; derived from the startup clock when absent
    pub seed: Option<i32>,
    pub synchronized: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub count: usize,
    pub workers: usize,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Hex,
    Int,
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(OutputFormat::Hex),
            "int" => Ok(OutputFormat::Int),
            "json" => Ok(OutputFormat::Json),
            other => Err(AppError::ConfigurationError(format!(
                "Unknown output format '{}'",
                other
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig {
                seed: None,
                synchronized: true,
            },
            output: OutputConfig {
                count: 1,
                workers: 1,
                format: OutputFormat::Hex,
            },
        }
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> AppResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|e| {
                AppError::ConfigurationError(format!("{}='{}': {}", key, raw, e))
            })
        })
        .transpose()
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup, falling back to defaults for missing keys
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            generator: GeneratorConfig {
                seed: parse_var(&lookup, "UID64_SEED")?,
                synchronized: parse_var(&lookup, "UID64_SYNC")?
                    .unwrap_or(defaults.generator.synchronized),
            },
            output: OutputConfig {
                count: parse_var(&lookup, "UID64_COUNT")?.unwrap_or(defaults.output.count),
                workers: parse_var(&lookup, "UID64_WORKERS")?.unwrap_or(defaults.output.workers),
                format: parse_var(&lookup, "UID64_FORMAT")?.unwrap_or(defaults.output.format),
            },
        };

        if config.output.workers == 0 {
            return Err(AppError::ConfigurationError(
                "UID64_WORKERS must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }
}
