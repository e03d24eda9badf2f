//! Trader specification
//!
//! Describes the market population handed to the simulator: groups of
//! identically configured traders on each side. Trader behavior itself is
//! opaque here; only the configuration parameters matter.

use serde::Serialize;

use crate::error::TraderConfigError;

/// Configuration record for the adaptive strategy swept by the harness
///
/// An ensemble of candidate strategy coefficients is maintained per
/// trader; the weight factor steers how aggressively candidates are
/// recombined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrategyParams {
    ensemble_size: u32,
    coeff_min: f64,
    coeff_max: f64,
    weight: f64,
}

impl StrategyParams {
    /// Create validated parameters, failing if the ensemble holds fewer
    /// than two candidates
    pub fn new(
        ensemble_size: u32,
        coeff_min: f64,
        coeff_max: f64,
        weight: f64,
    ) -> Result<Self, TraderConfigError> {
        if ensemble_size < 2 {
            return Err(TraderConfigError::EnsembleTooSmall(ensemble_size));
        }
        Ok(Self {
            ensemble_size,
            coeff_min,
            coeff_max,
            weight,
        })
    }

    pub fn ensemble_size(&self) -> u32 {
        self.ensemble_size
    }

    pub fn coeff_min(&self) -> f64 {
        self.coeff_min
    }

    pub fn coeff_max(&self) -> f64 {
        self.coeff_max
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// A group of identically configured traders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraderGroup {
    trader_type: String,
    count: u32,
    params: StrategyParams,
}

impl TraderGroup {
    /// Create a group, failing on a zero trader count
    pub fn new(
        trader_type: impl Into<String>,
        count: u32,
        params: StrategyParams,
    ) -> Result<Self, TraderConfigError> {
        if count == 0 {
            return Err(TraderConfigError::EmptyGroup);
        }
        Ok(Self {
            trader_type: trader_type.into(),
            count,
            params,
        })
    }

    /// Simulator-facing type tag, opaque to this crate
    pub fn trader_type(&self) -> &str {
        &self.trader_type
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn params(&self) -> &StrategyParams {
        &self.params
    }
}

/// The full market population: seller groups and buyer groups
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TraderSpec {
    pub sellers: Vec<TraderGroup>,
    pub buyers: Vec<TraderGroup>,
}

impl TraderSpec {
    /// A spec with the same single group on both sides
    pub fn symmetric(group: TraderGroup) -> Self {
        Self {
            sellers: vec![group.clone()],
            buyers: vec![group],
        }
    }

    /// Total seller count across all groups
    pub fn total_sellers(&self) -> u32 {
        self.sellers.iter().map(TraderGroup::count).sum()
    }

    /// Total buyer count across all groups
    pub fn total_buyers(&self) -> u32 {
        self.buyers.iter().map(TraderGroup::count).sum()
    }
}
