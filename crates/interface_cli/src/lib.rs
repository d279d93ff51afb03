//! Command Line Layer
//!
//! Loads a JSON scenario, records its periods, runs the requested
//! simulations and produces a JSON report.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_cli::{config::SimulatorConfig, dto::Scenario, simulation::{run, RunOptions}};
//!
//! let config = SimulatorConfig::load(None)?;
//! let scenario = Scenario::from_path(Path::new("scenario.json"))?;
//! let report = run(&scenario, &RunOptions::default(), &config)?;
//! ```

pub mod config;
pub mod error;
pub mod dto;
pub mod simulation;

pub use error::CliError;
pub use simulation::{rule_catalog, run, RunOptions};
