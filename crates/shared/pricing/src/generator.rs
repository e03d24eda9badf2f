//! Step-mode order price generation
//!
//! Maps a participant index and a list of price ranges to a concrete
//! integer order price under one of three step modes. Jittered and
//! Random modes draw from the generator's own random source.

use agora_core::{Price, PriceRange, Seconds, StepMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{PricingError, PricingResult};

/// Order price generator
///
/// Owns the random source consumed by the Jittered and Random step
/// modes. Construct with [`OrderPricer::with_seed`] for reproducible
/// draws; the default constructor seeds from OS entropy and is not
/// reproducible across runs.
pub struct OrderPricer {
    /// Seeded random number generator for reproducibility
    rng: StdRng,
}

impl OrderPricer {
    /// Create a pricer seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: SeedableRng::from_entropy(),
        }
    }

    /// Create a pricer with a specific seed for reproducible draws
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate the order price for one participant.
    ///
    /// `index` identifies the participant in `[0, participant_count)`.
    /// Fixed prices step evenly from the low to the high bound of the
    /// first range; Jittered adds uniform noise of up to half a step in
    /// either direction; Random draws uniformly over one range, chosen
    /// equiprobably when several are given. Range orientation is
    /// normalized, so reversed bounds behave identically.
    ///
    /// Fixed and Random prices always lie within the chosen range's
    /// bounds. Jittered prices may exceed them by up to the half step;
    /// that overshoot is part of the contract.
    ///
    /// Offset functions attached to ranges are ignored here; use
    /// [`OrderPricer::order_price_at`] to evaluate them.
    pub fn order_price(
        &mut self,
        index: u32,
        ranges: &[PriceRange],
        participant_count: u32,
        mode: StepMode,
    ) -> PricingResult<Price> {
        self.price(index, ranges, participant_count, mode, None)
    }

    /// Generate the order price for one participant at a given issue
    /// time.
    ///
    /// Identical to [`OrderPricer::order_price`], except the chosen
    /// range's offset function (when attached) is evaluated at
    /// `issue_time` and shifts both bounds before pricing.
    pub fn order_price_at(
        &mut self,
        index: u32,
        ranges: &[PriceRange],
        participant_count: u32,
        mode: StepMode,
        issue_time: Seconds,
    ) -> PricingResult<Price> {
        self.price(index, ranges, participant_count, mode, Some(issue_time))
    }

    fn price(
        &mut self,
        index: u32,
        ranges: &[PriceRange],
        participant_count: u32,
        mode: StepMode,
        issue_time: Option<Seconds>,
    ) -> PricingResult<Price> {
        if ranges.is_empty() {
            return Err(PricingError::EmptyRanges);
        }
        // The step size divides by (participant_count - 1), so a lone
        // participant is a caller-contract violation in every mode.
        if participant_count < 2 {
            return Err(PricingError::InvalidParticipantCount(participant_count));
        }

        let range = match mode {
            // More than one range: choose one equiprobably
            StepMode::Random if ranges.len() > 1 => &ranges[self.rng.gen_range(0..ranges.len())],
            _ => &ranges[0],
        };

        let (mut pmin, mut pmax) = range.bounds();
        if let Some(t) = issue_time {
            let shift = range.offset_at(t);
            pmin += shift;
            pmax += shift;
        }

        match mode {
            StepMode::Random => Ok(self.rng.gen_range(pmin..=pmax)),
            StepMode::Fixed | StepMode::Jittered => {
                let step_size = (pmax - pmin) as f64 / (participant_count - 1) as f64;
                let mut price = pmin + (index as f64 * step_size).floor() as Price;
                if mode == StepMode::Jittered {
                    let half_step = (step_size / 2.0).round() as Price;
                    price += self.rng.gen_range(-half_step..=half_step);
                }
                Ok(price)
            }
        }
    }
}

impl Default for OrderPricer {
    fn default() -> Self {
        Self::new()
    }
}
