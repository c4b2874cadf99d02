//! Optimizer configuration.

#![allow(missing_docs)]

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

extern crate serde_json;

use aco_core::prelude::*;
use serde::Deserialize;
use std::io::{BufReader, Read};

/// Default amount of iterations between two logged iteration statistics.
pub const DEFAULT_LOG_EVERY: usize = 10;

/// An algorithm configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Specifies ant colony parameters.
    pub optimizer: Option<OptimizerConfig>,
    /// Specifies algorithm termination configuration.
    pub termination: Option<TerminationConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// Ant colony parameters, unspecified ones keep their default values.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizerConfig {
    pub ant_count: Option<usize>,
    pub alpha: Option<Float>,
    pub beta: Option<Float>,
    pub rho: Option<Float>,
    pub q: Option<Float>,
    pub seed: Option<u64>,
    pub parallel: Option<bool>,
}

/// A termination configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminationConfig {
    /// Amount of iterations of a run.
    pub max_iterations: Option<usize>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct TelemetryConfig {
    pub logging: Option<LoggingConfig>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled. Default is false.
    pub enabled: bool,
    /// Specifies how often iteration statistics are logged. Default is 10 (iterations).
    pub log_every: Option<usize>,
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, GenericError> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates optimizer parameters from config, using defaults for missing values.
pub fn create_params_from_config(config: &Config) -> AcoParams {
    let defaults = AcoParams::default();

    match &config.optimizer {
        Some(optimizer) => AcoParams {
            ant_count: optimizer.ant_count.unwrap_or(defaults.ant_count),
            alpha: optimizer.alpha.unwrap_or(defaults.alpha),
            beta: optimizer.beta.unwrap_or(defaults.beta),
            rho: optimizer.rho.unwrap_or(defaults.rho),
            q: optimizer.q.unwrap_or(defaults.q),
            seed: optimizer.seed.or(defaults.seed),
            parallel: optimizer.parallel.unwrap_or(defaults.parallel),
        },
        None => defaults,
    }
}

/// Returns amount of iterations if specified.
pub fn get_max_iterations(config: &Config) -> Option<usize> {
    config.termination.as_ref().and_then(|termination| termination.max_iterations)
}

/// Returns how often iteration statistics should be logged.
pub fn get_log_every(config: &Config) -> usize {
    get_logging_config(config).and_then(|logging| logging.log_every).unwrap_or(DEFAULT_LOG_EVERY)
}

/// Creates telemetry mode which uses given logger when logging is enabled.
pub fn create_telemetry_mode(config: &Config, logger: InfoLogger) -> TelemetryMode {
    match get_logging_config(config) {
        Some(LoggingConfig { enabled: true, .. }) => {
            TelemetryMode::OnlyLogging { logger, log_every: get_log_every(config) }
        }
        _ => TelemetryMode::None,
    }
}

fn get_logging_config(config: &Config) -> Option<&LoggingConfig> {
    config.telemetry.as_ref().and_then(|telemetry| telemetry.logging.as_ref())
}
