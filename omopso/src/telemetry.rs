//! A module which provides the logic to write information about algorithm execution into log.

#[cfg(test)]
#[path = "../tests/unit/telemetry_test.rs"]
mod telemetry_test;

use crate::pso::OptimizerStatistics;
use crate::utils::{InfoLogger, Timer};

/// Specifies a telemetry mode.
#[derive(Clone)]
pub enum TelemetryMode {
    /// No telemetry at all.
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often (in iterations) progress is logged.
        log_every: usize,
    },
}

/// Writes information about optimization progress into log.
pub struct Telemetry {
    mode: TelemetryMode,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self { mode }
    }

    /// Reports swarm initialization.
    pub fn on_initial(&self, statistics: &OptimizerStatistics, swarm_size: usize, item_time: Timer) {
        self.log(
            format!(
                "[{}s] initialized swarm of {} particles in {}ms, archive size: {}",
                statistics.time.elapsed_secs(),
                swarm_size,
                item_time.elapsed_millis(),
                statistics.archive_size
            )
            .as_str(),
        );
    }

    /// Reports iteration statistics.
    pub fn on_iteration(&self, statistics: &OptimizerStatistics, iteration_time: Timer) {
        let should_log = match &self.mode {
            TelemetryMode::None => false,
            TelemetryMode::OnlyLogging { log_every, .. } => statistics.iteration % (*log_every).max(1) == 0,
        };

        if should_log {
            self.log(
                format!(
                    "[{}s] iteration {} took {}ms, evaluations: {}, archive size: {}, improvements: {}",
                    statistics.time.elapsed_secs(),
                    statistics.iteration,
                    iteration_time.elapsed_millis(),
                    statistics.evaluations,
                    statistics.archive_size,
                    statistics.improvements
                )
                .as_str(),
            );
        }
    }

    /// Reports optimization result.
    pub fn on_result(&self, statistics: &OptimizerStatistics) {
        self.log(
            format!(
                "[{}s] total iterations: {}, evaluations: {}, front size: {}, speed: {:.2} it/sec",
                statistics.time.elapsed_secs(),
                statistics.iteration,
                statistics.evaluations,
                statistics.archive_size,
                statistics.iteration as f64 / statistics.time.elapsed_secs_as_float().max(f64::EPSILON)
            )
            .as_str(),
        );
    }

    /// Writes message into log.
    pub fn log(&self, message: &str) {
        if let TelemetryMode::OnlyLogging { logger, .. } = &self.mode {
            (logger)(message)
        }
    }
}
