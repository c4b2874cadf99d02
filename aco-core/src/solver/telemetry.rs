//! A module which provides the logic to collect metrics about optimizer execution and simple logging.

#[cfg(test)]
#[path = "../../tests/unit/solver/telemetry_test.rs"]
mod telemetry_test;

use crate::models::{IterationRecord, Solution};
use crate::solver::AcoParams;
use crate::utils::{Float, Timer, get_cpus};
use std::sync::Arc;

/// A logger type which is called with a message to be logged.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Encapsulates measurements regarding optimizer execution.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TelemetryMetrics {
    /// Run duration in milliseconds.
    pub duration: usize,
    /// Total amount of iterations.
    pub iterations: usize,
    /// Total amount of selection steps resolved by the degenerate uniform fallback.
    pub fallbacks: usize,
}

/// Specifies a telemetry mode.
#[derive(Clone, Default)]
pub enum TelemetryMode {
    /// No telemetry at all.
    #[default]
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often iteration statistics are logged.
        log_every: usize,
    },
}

/// Provides way to collect metrics and write information into log.
pub struct Telemetry {
    mode: TelemetryMode,
    time: Timer,
    metrics: TelemetryMetrics,
    expected: Option<usize>,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self { mode, time: Timer::start(), metrics: TelemetryMetrics::default(), expected: None }
    }

    /// Reports start of the run.
    pub fn on_start(&mut self, size: usize, params: &AcoParams, iterations: Option<usize>) {
        self.time = Timer::start();
        self.metrics = TelemetryMetrics::default();
        self.expected = iterations;

        self.log(
            format!(
                "started with {} locations, ants: {}, alpha: {}, beta: {}, rho: {}, q: {}, seed: {}",
                size,
                params.ant_count,
                params.alpha,
                params.beta,
                params.rho,
                params.q,
                params.seed.map_or_else(|| "none".to_string(), |seed| seed.to_string())
            )
            .as_str(),
        );

        if params.parallel {
            self.log(format!("ants are constructed in parallel using {} threads", get_cpus()).as_str());
        }
    }

    /// Reports iteration statistics.
    pub fn on_iteration(&mut self, record: &IterationRecord, fallbacks: usize) {
        self.metrics.iterations = record.iteration;
        self.metrics.fallbacks += fallbacks;

        let TelemetryMode::OnlyLogging { log_every, .. } = &self.mode else {
            return;
        };

        if fallbacks > 0 {
            self.log(
                format!(
                    "warning: iteration {}: {} step(s) had no positive selection weight, uniform choice was used",
                    record.iteration, fallbacks
                )
                .as_str(),
            );
        }

        let is_last = self.expected.is_some_and(|expected| expected == record.iteration);
        if record.iteration % (*log_every).max(1) == 0 || is_last {
            let total = self.expected.map_or_else(|| "?".to_string(), |expected| expected.to_string());
            self.log(
                format!(
                    "[{}s] iteration {}/{}: best={}, average={}, worst={}",
                    self.time.elapsed_secs(),
                    record.iteration,
                    total,
                    format_distance(record.best_distance),
                    format_distance(record.average_distance),
                    format_distance(record.worst_distance),
                )
                .as_str(),
            );
        }
    }

    /// Reports end of the run.
    pub fn on_finish(&mut self, solution: &Solution) {
        self.metrics.duration = self.time.elapsed_millis() as usize;

        let elapsed = self.time.elapsed_secs_as_float();
        let speed = if elapsed > 0. { self.metrics.iterations as Float / elapsed } else { 0. };

        self.log(
            format!(
                "[{}s] finished: {} iterations ({:.2}/sec), best tour length: {}",
                self.time.elapsed_secs(),
                self.metrics.iterations,
                speed,
                format_distance(solution.length)
            )
            .as_str(),
        );
    }

    /// Returns collected metrics.
    pub fn metrics(&self) -> &TelemetryMetrics {
        &self.metrics
    }

    /// Writes log message.
    pub fn log(&self, message: &str) {
        if let TelemetryMode::OnlyLogging { logger, .. } = &self.mode {
            (logger)(message)
        }
    }
}

fn format_distance(value: Float) -> String {
    format!("{value:.3}")
}
