//! Single-point experiment
//!
//! Builds the trader line-up and order schedule for one parameter point
//! and runs its trials strictly in sequence, one sink file per trial.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use agora_core::{
    OrderSchedule, Price, PriceRange, ScheduleSegment, Seconds, StepMode, StrategyParams, TimeMode,
    TraderGroup, TraderSpec,
};
use agora_ports::{MarketSession, SessionRequest};

use crate::error::{RunnerError, RunnerResult};

/// Seconds in one simulated trading day
pub const SECONDS_PER_DAY: Seconds = 60.0 * 60.0 * 24.0;

/// Type tag of the adaptive traders populating both market sides
pub const TRADER_TYPE: &str = "PRDE";

/// Traders per market side
pub const TRADERS_PER_SIDE: u32 = 10;

/// Strategy coefficient bounds carried by every trader
const COEFF_MIN: f64 = -1.0;
const COEFF_MAX: f64 = 1.0;

/// Price regimes the session steps through, in order
pub const PRICE_REGIMES: [(Price, Price); 3] = [(50, 100), (150, 200), (220, 280)];

/// Target spacing between customer orders, in seconds
pub const ORDER_INTERVAL: Seconds = 5.0;

/// Deterministic identifier for one trial, e.g. `k04_F0.10_d04_01`.
///
/// Fractional day counts are truncated toward zero.
pub fn trial_id(ensemble_size: u32, weight: f64, simulated_days: f64, trial: u32) -> String {
    format!(
        "k{:02}_F{:.2}_d{:02}_{:02}",
        ensemble_size, weight, simulated_days as i64, trial
    )
}

/// Symmetric trader line-up for one parameter point: [`TRADERS_PER_SIDE`]
/// adaptive traders on each side, all sharing the same strategy
/// parameters.
pub fn trader_spec(ensemble_size: u32, weight: f64) -> RunnerResult<TraderSpec> {
    let params = StrategyParams::new(ensemble_size, COEFF_MIN, COEFF_MAX, weight)?;
    let group = TraderGroup::new(TRADER_TYPE, TRADERS_PER_SIDE, params)?;
    Ok(TraderSpec::symmetric(group))
}

/// Order schedule stepping through the three price regimes in equal
/// thirds of `[start, end)`, identical on both sides, with random
/// in-range pricing and drip-jittered order timing.
pub fn order_schedule(start: Seconds, end: Seconds) -> RunnerResult<OrderSchedule> {
    let range_sets: Vec<Vec<PriceRange>> = PRICE_REGIMES
        .iter()
        .map(|&(low, high)| vec![PriceRange::new(low, high)])
        .collect();
    let supply = ScheduleSegment::equal_split(start, end, range_sets, StepMode::Random)?;
    let demand = supply.clone();
    Ok(OrderSchedule {
        supply,
        demand,
        order_interval: ORDER_INTERVAL,
        time_mode: TimeMode::DripJitter,
    })
}

/// Configuration for one experiment (one parameter point)
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    /// Simulated market time, in days
    pub simulated_days: f64,
    /// Candidate strategies each adaptive trader carries
    pub ensemble_size: u32,
    /// Differential weight steering strategy recombination
    pub weight: f64,
    /// Trials to run at this point
    pub trials: u32,
    /// Directory the per-trial sink files are written into
    pub output_dir: PathBuf,
    /// Ask the session to dump full trial data at the end
    pub dump_all: bool,
    /// Ask the session to narrate its progress
    pub verbose: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            simulated_days: 4.0, // Four simulated trading days
            ensemble_size: 4,    // Smallest ensemble in the study grid
            weight: 0.1,         // Lowest differential weight in the study grid
            trials: 1,
            output_dir: PathBuf::from("."),
            dump_all: true,
            verbose: true,
        }
    }
}

/// Record of one completed trial
#[derive(Debug, Clone, PartialEq)]
pub struct TrialReport {
    /// Identifier embedded in the sink file name
    pub trial_id: String,
    /// Where the balance history was written
    pub sink_path: PathBuf,
}

/// Runs every trial of an experiment against one market session
pub struct ExperimentRunner<S: MarketSession> {
    session: S,
}

impl<S: MarketSession> ExperimentRunner<S> {
    pub fn new(session: S) -> Self {
        Self { session }
    }

    /// The wrapped session
    pub fn session(&self) -> &S {
        &self.session
    }

    /// Run all trials of one experiment, strictly in sequence.
    ///
    /// Trials are numbered from 1. Each gets a fresh sink file named
    /// `<trial_id>_avg_balance.csv` under the configured output
    /// directory, flushed and closed before the next trial starts. The
    /// first failing trial aborts the experiment.
    pub fn run(&mut self, config: &ExperimentConfig) -> RunnerResult<Vec<TrialReport>> {
        let traders = trader_spec(config.ensemble_size, config.weight)?;
        let end_time = config.simulated_days * SECONDS_PER_DAY;
        let schedule = order_schedule(0.0, end_time)?;

        log::debug!(
            "[Experiment] k={} F={}: {} trial(s) over {} simulated day(s)",
            config.ensemble_size,
            config.weight,
            config.trials,
            config.simulated_days
        );

        let mut reports = Vec::with_capacity(config.trials as usize);
        for trial in 1..=config.trials {
            let id = trial_id(
                config.ensemble_size,
                config.weight,
                config.simulated_days,
                trial,
            );
            reports.push(self.run_trial(config, &id, end_time, &traders, &schedule)?);
        }
        Ok(reports)
    }

    fn run_trial(
        &mut self,
        config: &ExperimentConfig,
        id: &str,
        end_time: Seconds,
        traders: &TraderSpec,
        schedule: &OrderSchedule,
    ) -> RunnerResult<TrialReport> {
        let path = config.output_dir.join(format!("{id}_avg_balance.csv"));

        log::info!(
            "[Experiment] Starting trial {} via {} -> {}",
            id,
            self.session.name(),
            path.display()
        );

        let file = File::create(&path).map_err(|source| {
            log::error!(
                "[Experiment] Could not open sink {}: {}",
                path.display(),
                source
            );
            RunnerError::SinkOpen {
                path: path.clone(),
                source,
            }
        })?;
        let mut sink = BufWriter::new(file);

        let request = SessionRequest {
            trial_id: id,
            start_time: 0.0,
            end_time,
            traders,
            schedule,
            dump_all: config.dump_all,
            verbose: config.verbose,
        };

        self.session.run(&request, &mut sink).map_err(|source| {
            log::error!("[Experiment] Trial {} failed: {}", id, source);
            RunnerError::Session {
                trial_id: id.to_string(),
                source,
            }
        })?;

        sink.flush().map_err(|source| {
            log::error!(
                "[Experiment] Could not flush sink {}: {}",
                path.display(),
                source
            );
            RunnerError::SinkFlush {
                path: path.clone(),
                source,
            }
        })?;
        drop(sink);

        log::info!("[Experiment] Trial {} complete", id);

        Ok(TrialReport {
            trial_id: id.to_string(),
            sink_path: path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trial_id_format() {
        assert_eq!(trial_id(4, 0.1, 4.0, 1), "k04_F0.10_d04_01");
        assert_eq!(trial_id(8, 1.9, 4.0, 12), "k08_F1.90_d04_12");
        assert_eq!(trial_id(10, 2.0, 10.0, 3), "k10_F2.00_d10_03");
    }

    #[test]
    fn test_trial_id_truncates_fractional_days() {
        assert_eq!(trial_id(4, 0.1, 4.75, 1), "k04_F0.10_d04_01");
    }

    #[test]
    fn test_trader_spec_shape() {
        let spec = trader_spec(4, 0.1).unwrap();
        assert_eq!(spec.total_sellers(), TRADERS_PER_SIDE);
        assert_eq!(spec.total_buyers(), TRADERS_PER_SIDE);
        assert_eq!(spec.sellers, spec.buyers);

        let group = &spec.sellers[0];
        assert_eq!(group.trader_type(), TRADER_TYPE);
        assert_eq!(group.params().ensemble_size(), 4);
        assert_eq!(group.params().coeff_min(), -1.0);
        assert_eq!(group.params().coeff_max(), 1.0);
        assert_eq!(group.params().weight(), 0.1);
    }

    #[test]
    fn test_trader_spec_rejects_tiny_ensemble() {
        assert!(trader_spec(1, 0.1).is_err());
    }

    #[test]
    fn test_order_schedule_regimes() {
        let end = 4.0 * SECONDS_PER_DAY;
        let schedule = order_schedule(0.0, end).unwrap();

        assert_eq!(schedule.supply.len(), 3);
        assert_eq!(schedule.demand.len(), 3);
        assert_eq!(schedule.order_interval, ORDER_INTERVAL);
        assert_eq!(schedule.time_mode, TimeMode::DripJitter);

        for (segment, &(low, high)) in schedule.supply.iter().zip(PRICE_REGIMES.iter()) {
            assert_eq!(segment.step_mode(), StepMode::Random);
            assert_eq!(segment.ranges().len(), 1);
            assert_eq!(segment.ranges()[0].low, low);
            assert_eq!(segment.ranges()[0].high, high);
        }

        assert_eq!(schedule.supply[0].valid_from(), 0.0);
        assert_eq!(schedule.supply[2].valid_to(), end);
        assert!(schedule.validate().is_ok());
    }

    #[test]
    fn test_order_schedule_sides_identical() {
        let schedule = order_schedule(0.0, 300.0).unwrap();
        for (supply, demand) in schedule.supply.iter().zip(schedule.demand.iter()) {
            assert_eq!(supply.valid_from(), demand.valid_from());
            assert_eq!(supply.valid_to(), demand.valid_to());
            assert_eq!(supply.ranges()[0].low, demand.ranges()[0].low);
            assert_eq!(supply.ranges()[0].high, demand.ranges()[0].high);
        }
    }

    #[test]
    fn test_default_config() {
        let config = ExperimentConfig::default();
        assert_eq!(config.simulated_days, 4.0);
        assert_eq!(config.ensemble_size, 4);
        assert_eq!(config.weight, 0.1);
        assert_eq!(config.trials, 1);
        assert!(config.dump_all);
        assert!(config.verbose);
    }
}
