//! Parameter sweep
//!
//! Enumerates the study grid over ensemble size and differential weight
//! and runs one experiment per point, strictly in sequence.

use std::ops::Range;
use std::path::PathBuf;

use agora_ports::MarketSession;

use crate::error::RunnerResult;
use crate::experiment::{ExperimentConfig, ExperimentRunner, TrialReport};

/// Configuration for a full parameter sweep
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Ensemble sizes to visit (half-open, end exclusive)
    pub ensemble_sizes: Range<u32>,
    /// First differential weight in the grid
    pub weight_start: f64,
    /// Exclusive upper bound on the weight grid
    pub weight_stop: f64,
    /// Spacing between consecutive weights
    pub weight_step: f64,
    /// Simulated market time per trial, in days
    pub simulated_days: f64,
    /// Trials per grid point
    pub trials: u32,
    /// Directory all sink files are written into
    pub output_dir: PathBuf,
    /// Forwarded to each experiment
    pub dump_all: bool,
    /// Forwarded to each experiment
    pub verbose: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            ensemble_sizes: 4..8, // k in {4, 5, 6, 7}
            weight_start: 0.1,
            weight_stop: 2.0,
            weight_step: 0.1, // 19 weights per ensemble size
            simulated_days: 4.0,
            trials: 1,
            output_dir: PathBuf::from("."),
            dump_all: true,
            verbose: true,
        }
    }
}

/// One (ensemble size, weight) grid point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperimentPoint {
    pub simulated_days: f64,
    pub ensemble_size: u32,
    pub weight: f64,
}

impl SweepConfig {
    /// Enumerate the grid in row-major order: every weight for the
    /// first ensemble size, then every weight for the next.
    ///
    /// Weights are `weight_start + i * weight_step`, kept while they
    /// stay below `weight_stop`. A non-positive step yields no points.
    pub fn points(&self) -> Vec<ExperimentPoint> {
        let mut points = Vec::new();
        if self.weight_step <= 0.0 {
            return points;
        }
        for ensemble_size in self.ensemble_sizes.clone() {
            let mut i = 0u32;
            loop {
                let weight = self.weight_start + f64::from(i) * self.weight_step;
                if weight >= self.weight_stop {
                    break;
                }
                points.push(ExperimentPoint {
                    simulated_days: self.simulated_days,
                    ensemble_size,
                    weight,
                });
                i += 1;
            }
        }
        points
    }
}

/// Outcome of a completed sweep
#[derive(Debug, Clone, Default)]
pub struct SweepSummary {
    /// Grid points visited
    pub points_run: usize,
    /// Trials completed across all points
    pub trials_run: usize,
    /// Every trial report, in execution order
    pub reports: Vec<TrialReport>,
}

impl<S: MarketSession> ExperimentRunner<S> {
    /// Run one experiment per grid point, strictly in sequence.
    ///
    /// Points execute in row-major order. The first failing trial
    /// aborts the sweep; sink files of completed trials are left in
    /// place.
    pub fn run_sweep(&mut self, config: &SweepConfig) -> RunnerResult<SweepSummary> {
        let points = config.points();
        log::info!(
            "[Sweep] {} grid point(s), {} trial(s) each",
            points.len(),
            config.trials
        );

        let mut summary = SweepSummary::default();
        for point in &points {
            let experiment = ExperimentConfig {
                simulated_days: point.simulated_days,
                ensemble_size: point.ensemble_size,
                weight: point.weight,
                trials: config.trials,
                output_dir: config.output_dir.clone(),
                dump_all: config.dump_all,
                verbose: config.verbose,
            };
            let reports = self.run(&experiment)?;
            summary.points_run += 1;
            summary.trials_run += reports.len();
            summary.reports.extend(reports);
        }

        log::info!(
            "[Sweep] Complete: {} point(s), {} trial(s)",
            summary.points_run,
            summary.trials_run
        );
        Ok(summary)
    }
}
