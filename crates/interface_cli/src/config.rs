//! Simulator configuration
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `simulator.toml` in the working directory, an explicit file passed on the
//! command line, then `SIM_` environment variables. Nested keys use `__`,
//! e.g. `SIM_CONVERSION__FEMALE=1.2`.

use serde::Deserialize;
use std::path::Path;

use core_kernel::{CoreError, Timezone};
use domain_service_time::ConversionFactors;

/// Base name of the optional configuration file
pub const DEFAULT_CONFIG_FILE: &str = "simulator";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Simulator configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Log level filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
    /// IANA name of the timezone used to resolve today's date
    pub timezone: String,
    /// Hazardous time conversion factors
    pub conversion: ConversionFactors,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
            timezone: Timezone::default().0.name().to_string(),
            conversion: ConversionFactors::default(),
        }
    }
}

impl SimulatorConfig {
    /// Loads configuration from files and environment
    ///
    /// `path`, when given, must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name(DEFAULT_CONFIG_FILE).required(false));

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder
            .add_source(
                config::Environment::with_prefix("SIM")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Checks values the deserializer cannot
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Temporal` for an unknown timezone, or
    /// `CoreError::Configuration` if a conversion factor is not a finite
    /// number of at least 1.
    pub fn validate(&self) -> Result<(), CoreError> {
        self.resolve_timezone()?;
        for (sex, factor) in [("male", self.conversion.male), ("female", self.conversion.female)] {
            if !factor.is_finite() || factor < 1.0 {
                return Err(CoreError::configuration(format!(
                    "conversion factor for {} must be at least 1, got {}",
                    sex, factor
                )));
            }
        }
        Ok(())
    }

    /// Parses the configured timezone name
    pub fn resolve_timezone(&self) -> Result<Timezone, CoreError> {
        Ok(self.timezone.parse::<Timezone>()?)
    }
}
