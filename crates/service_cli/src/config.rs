//! Run configuration management.
//!
//! Loads option and simulation settings from a TOML file, applies
//! `MCGREEKS_*` environment overrides, then command line overrides.

use std::path::Path;

use pricer_mc::mc::{GbmParams, MonteCarloConfig, PayoffParams, PayoffType};
use pricer_mc::DEFAULT_SEED;
use serde::{Deserialize, Serialize};

use crate::{CliError, Result};

/// Configuration file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "mcgreeks.toml";

/// Log levels accepted in configuration and `MCGREEKS_LOG_LEVEL`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl std::str::FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(CliError::config(format!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                s
            ))),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// `[option]` table: the contract and its market.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OptionSection {
    pub spot: f64,
    pub strike: f64,
    pub rate: f64,
    pub volatility: f64,
    pub maturity: f64,
    pub kind: PayoffType,
}

impl Default for OptionSection {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            rate: 0.05,
            volatility: 0.2,
            maturity: 1.0,
            kind: PayoffType::Put,
        }
    }
}

/// `[simulation]` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SimulationSection {
    pub steps: usize,
    pub paths: usize,
    pub seed: u32,
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            steps: 252,
            paths: 10_000,
            seed: DEFAULT_SEED,
        }
    }
}

/// Command line values that take precedence over file and environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub kind: Option<PayoffType>,
    pub paths: Option<usize>,
    pub steps: Option<usize>,
    pub seed: Option<u32>,
}

/// Resolved configuration for one run.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RunConfig {
    pub log_level: LogLevel,
    pub option: OptionSection,
    pub simulation: SimulationSection,
}

impl RunConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::config(e.to_string()))
    }

    /// Load the given file, or [`DEFAULT_CONFIG_FILE`] if it exists, or
    /// fall back to defaults.
    ///
    /// An explicitly named file must exist.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Apply `MCGREEKS_*` environment variable overrides
    pub fn with_env_override(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup`.
    ///
    /// Unparsable values are errors rather than silently ignored.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(paths) = lookup("MCGREEKS_PATHS") {
            self.simulation.paths = parse_env("MCGREEKS_PATHS", &paths)?;
        }
        if let Some(steps) = lookup("MCGREEKS_STEPS") {
            self.simulation.steps = parse_env("MCGREEKS_STEPS", &steps)?;
        }
        if let Some(seed) = lookup("MCGREEKS_SEED") {
            self.simulation.seed = parse_env("MCGREEKS_SEED", &seed)?;
        }
        if let Some(level) = lookup("MCGREEKS_LOG_LEVEL") {
            self.log_level = level.parse()?;
        }
        Ok(self)
    }

    /// Apply command line overrides
    pub fn with_cli_override(mut self, overrides: Overrides) -> Self {
        if let Some(kind) = overrides.kind {
            self.option.kind = kind;
        }
        if let Some(paths) = overrides.paths {
            self.simulation.paths = paths;
        }
        if let Some(steps) = overrides.steps {
            self.simulation.steps = steps;
        }
        if let Some(seed) = overrides.seed {
            self.simulation.seed = seed;
        }
        self
    }

    /// Validate the configuration, reporting every problem at once
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.simulation.paths == 0 {
            errors.push("simulation.paths must be at least 1".to_string());
        }
        if self.simulation.steps == 0 {
            errors.push("simulation.steps must be at least 1".to_string());
        }
        if let Err(e) = self.gbm().validate() {
            errors.push(format!("option: {}", e));
        }
        if let Err(e) = self.payoff().validate() {
            errors.push(format!("option: {}", e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CliError::config(errors.join("; ")))
        }
    }

    /// Market parameters of the configured option.
    pub fn gbm(&self) -> GbmParams {
        GbmParams::new(
            self.option.spot,
            self.option.rate,
            self.option.volatility,
            self.option.maturity,
        )
    }

    /// Payoff of the configured option.
    pub fn payoff(&self) -> PayoffParams {
        PayoffParams::new(self.option.strike, self.option.kind)
    }

    /// Simulation settings as a pricer configuration.
    pub fn mc_config(&self) -> Result<MonteCarloConfig> {
        Ok(MonteCarloConfig::builder()
            .n_paths(self.simulation.paths)
            .n_steps(self.simulation.steps)
            .seed(self.simulation.seed)
            .build()?)
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::config(format!("{} has invalid value '{}'", key, value)))
}
