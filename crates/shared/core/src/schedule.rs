//! Order schedule model
//!
//! A schedule describes how customer order prices evolve over a simulated
//! session: piecewise-in-time segments, each holding one or more price
//! ranges and a step mode. Supply and demand sides carry independent
//! segment sequences.

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::values::{OffsetFn, Price, Seconds};

/// Pricing strategy for generating one participant's order price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepMode {
    /// Prices evenly spaced across the range
    Fixed,
    /// Evenly spaced plus bounded uniform noise
    Jittered,
    /// Uniform draw, over a randomly chosen range when several are given
    Random,
}

/// Order-issue timing tag, interpreted by the market simulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeMode {
    /// All orders issued together at each interval boundary
    Periodic,
    /// Orders dripped one at a time, evenly spaced
    DripFixed,
    /// Orders dripped one at a time with jittered spacing
    DripJitter,
    /// Orders dripped at Poisson-distributed arrival times
    DripPoisson,
}

/// An interval of order prices, with an optional time-varying offset
///
/// The bounds are stored as given; consumers normalize orientation via
/// [`PriceRange::bounds`], so (high, low) and (low, high) are equivalent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PriceRange {
    pub low: Price,
    pub high: Price,
    /// Offset added to generated prices, evaluated at order issue time.
    /// Not serialized; deserialized ranges carry no offset.
    #[serde(skip)]
    pub offset: Option<OffsetFn>,
}

impl PriceRange {
    /// Create a range with no offset function
    pub fn new(low: Price, high: Price) -> Self {
        Self {
            low,
            high,
            offset: None,
        }
    }

    /// Create a range with a time-varying offset function
    pub fn with_offset(low: Price, high: Price, offset: OffsetFn) -> Self {
        Self {
            low,
            high,
            offset: Some(offset),
        }
    }

    /// The (min, max) bounds regardless of field orientation
    pub fn bounds(&self) -> (Price, Price) {
        (self.low.min(self.high), self.low.max(self.high))
    }

    /// Offset value at time `t`, or 0 when no offset is attached
    pub fn offset_at(&self, t: Seconds) -> Price {
        self.offset.map_or(0, |f| f(t))
    }
}

/// A time-bounded schedule slice: one or more price ranges plus a step
/// mode, valid over the half-open window `[valid_from, valid_to)`.
///
/// Construction rejects an empty range list. Contiguity and ordering of
/// segments within a schedule are a caller obligation, checked only by
/// the opt-in [`OrderSchedule::validate`].
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleSegment {
    valid_from: Seconds,
    valid_to: Seconds,
    ranges: Vec<PriceRange>,
    step_mode: StepMode,
}

impl ScheduleSegment {
    /// Create a segment, failing if `ranges` is empty
    pub fn new(
        valid_from: Seconds,
        valid_to: Seconds,
        ranges: Vec<PriceRange>,
        step_mode: StepMode,
    ) -> Result<Self, ScheduleError> {
        if ranges.is_empty() {
            return Err(ScheduleError::EmptySegment);
        }
        Ok(Self {
            valid_from,
            valid_to,
            ranges,
            step_mode,
        })
    }

    /// Split `[start, end)` into equal consecutive segments, one per
    /// range set, all sharing the same step mode.
    ///
    /// Interior boundaries are computed identically for both neighbours,
    /// and the last segment ends exactly at `end`, so the result always
    /// passes contiguity validation. An empty `range_sets` yields an
    /// empty segment list.
    pub fn equal_split(
        start: Seconds,
        end: Seconds,
        range_sets: Vec<Vec<PriceRange>>,
        step_mode: StepMode,
    ) -> Result<Vec<Self>, ScheduleError> {
        let n = range_sets.len();
        if n == 0 {
            return Ok(Vec::new());
        }

        let slice = (end - start) / n as f64;
        let mut segments = Vec::with_capacity(n);
        for (i, ranges) in range_sets.into_iter().enumerate() {
            let from = start + i as f64 * slice;
            let to = if i == n - 1 {
                end
            } else {
                start + (i + 1) as f64 * slice
            };
            segments.push(Self::new(from, to, ranges, step_mode)?);
        }
        Ok(segments)
    }

    pub fn valid_from(&self) -> Seconds {
        self.valid_from
    }

    pub fn valid_to(&self) -> Seconds {
        self.valid_to
    }

    pub fn ranges(&self) -> &[PriceRange] {
        &self.ranges
    }

    pub fn step_mode(&self) -> StepMode {
        self.step_mode
    }

    /// Whether `t` falls inside this segment's half-open validity window
    pub fn contains(&self, t: Seconds) -> bool {
        self.valid_from <= t && t < self.valid_to
    }
}

/// Two-sided order schedule handed to the market simulator
///
/// Supply and demand segment sequences are independent; nothing requires
/// them to share boundaries, though the default experiment makes them
/// identical.
#[derive(Debug, Clone, Serialize)]
pub struct OrderSchedule {
    pub supply: Vec<ScheduleSegment>,
    pub demand: Vec<ScheduleSegment>,
    /// Target spacing between customer orders, in seconds
    pub order_interval: Seconds,
    pub time_mode: TimeMode,
}

impl OrderSchedule {
    /// The supply segment whose window contains `t`, if any
    pub fn supply_at(&self, t: Seconds) -> Option<&ScheduleSegment> {
        self.supply.iter().find(|s| s.contains(t))
    }

    /// The demand segment whose window contains `t`, if any
    pub fn demand_at(&self, t: Seconds) -> Option<&ScheduleSegment> {
        self.demand.iter().find(|s| s.contains(t))
    }

    /// Opt-in check that each side's segments are ordered, non-inverted
    /// and exactly contiguous.
    ///
    /// Never called by the default construction paths; segments are
    /// trusted as given.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        Self::validate_side(&self.supply)?;
        Self::validate_side(&self.demand)
    }

    fn validate_side(segments: &[ScheduleSegment]) -> Result<(), ScheduleError> {
        for segment in segments {
            if segment.valid_from > segment.valid_to {
                return Err(ScheduleError::InvertedBounds {
                    from: segment.valid_from,
                    to: segment.valid_to,
                });
            }
        }
        for pair in segments.windows(2) {
            if pair[0].valid_to != pair[1].valid_from {
                return Err(ScheduleError::Discontinuity {
                    end: pair[0].valid_to,
                    start: pair[1].valid_from,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_offset(_t: Seconds) -> Price {
        7
    }

    #[test]
    fn test_range_bounds_normalized() {
        let forward = PriceRange::new(50, 100);
        let reversed = PriceRange::new(100, 50);
        assert_eq!(forward.bounds(), (50, 100));
        assert_eq!(reversed.bounds(), (50, 100));
    }

    #[test]
    fn test_range_offset_defaults_to_zero() {
        let range = PriceRange::new(50, 100);
        assert_eq!(range.offset_at(0.0), 0);
        assert_eq!(range.offset_at(12345.0), 0);
    }

    #[test]
    fn test_range_offset_evaluated() {
        let range = PriceRange::with_offset(50, 100, flat_offset);
        assert_eq!(range.offset_at(0.0), 7);
    }

    #[test]
    fn test_empty_segment_rejected() {
        let result = ScheduleSegment::new(0.0, 10.0, Vec::new(), StepMode::Random);
        assert_eq!(result.unwrap_err(), ScheduleError::EmptySegment);
    }

    #[test]
    fn test_segment_contains_half_open() {
        let segment =
            ScheduleSegment::new(10.0, 20.0, vec![PriceRange::new(1, 2)], StepMode::Fixed).unwrap();
        assert!(segment.contains(10.0));
        assert!(segment.contains(19.999));
        assert!(!segment.contains(20.0));
        assert!(!segment.contains(9.999));
    }

    #[test]
    fn test_equal_split_boundaries() {
        let sets = vec![
            vec![PriceRange::new(50, 100)],
            vec![PriceRange::new(150, 200)],
            vec![PriceRange::new(220, 280)],
        ];
        let segments =
            ScheduleSegment::equal_split(0.0, 345_600.0, sets, StepMode::Random).unwrap();

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].valid_from(), 0.0);
        // Neighbours share the exact boundary value
        assert_eq!(segments[0].valid_to(), segments[1].valid_from());
        assert_eq!(segments[1].valid_to(), segments[2].valid_from());
        // The last segment ends exactly at the horizon
        assert_eq!(segments[2].valid_to(), 345_600.0);

        let lengths: Vec<f64> = segments
            .iter()
            .map(|s| s.valid_to() - s.valid_from())
            .collect();
        for len in &lengths {
            assert!((len - 115_200.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_equal_split_empty_sets() {
        let segments =
            ScheduleSegment::equal_split(0.0, 100.0, Vec::new(), StepMode::Fixed).unwrap();
        assert!(segments.is_empty());
    }

    #[test]
    fn test_equal_split_rejects_empty_ranges() {
        let sets = vec![vec![PriceRange::new(1, 2)], Vec::new()];
        let result = ScheduleSegment::equal_split(0.0, 100.0, sets, StepMode::Fixed);
        assert_eq!(result.unwrap_err(), ScheduleError::EmptySegment);
    }

    #[test]
    fn test_segment_lookup() {
        let segments = ScheduleSegment::equal_split(
            0.0,
            300.0,
            vec![
                vec![PriceRange::new(50, 100)],
                vec![PriceRange::new(150, 200)],
                vec![PriceRange::new(220, 280)],
            ],
            StepMode::Random,
        )
        .unwrap();
        let schedule = OrderSchedule {
            supply: segments.clone(),
            demand: segments,
            order_interval: 5.0,
            time_mode: TimeMode::DripJitter,
        };

        assert_eq!(schedule.supply_at(0.0).unwrap().ranges()[0].low, 50);
        assert_eq!(schedule.supply_at(150.0).unwrap().ranges()[0].low, 150);
        assert_eq!(schedule.demand_at(299.9).unwrap().ranges()[0].low, 220);
        assert!(schedule.supply_at(300.0).is_none());
    }

    #[test]
    fn test_validate_accepts_contiguous() {
        let segments = ScheduleSegment::equal_split(
            0.0,
            345_600.0,
            vec![
                vec![PriceRange::new(50, 100)],
                vec![PriceRange::new(150, 200)],
                vec![PriceRange::new(220, 280)],
            ],
            StepMode::Random,
        )
        .unwrap();
        let schedule = OrderSchedule {
            supply: segments.clone(),
            demand: segments,
            order_interval: 5.0,
            time_mode: TimeMode::DripJitter,
        };
        assert!(schedule.validate().is_ok());
    }

    #[test]
    fn test_validate_detects_gap() {
        let supply = vec![
            ScheduleSegment::new(0.0, 100.0, vec![PriceRange::new(1, 2)], StepMode::Fixed).unwrap(),
            ScheduleSegment::new(150.0, 200.0, vec![PriceRange::new(3, 4)], StepMode::Fixed)
                .unwrap(),
        ];
        let schedule = OrderSchedule {
            supply,
            demand: Vec::new(),
            order_interval: 5.0,
            time_mode: TimeMode::Periodic,
        };
        assert_eq!(
            schedule.validate().unwrap_err(),
            ScheduleError::Discontinuity {
                end: 100.0,
                start: 150.0
            }
        );
    }

    #[test]
    fn test_validate_detects_inverted_bounds() {
        let supply = vec![
            ScheduleSegment::new(100.0, 0.0, vec![PriceRange::new(1, 2)], StepMode::Fixed).unwrap(),
        ];
        let schedule = OrderSchedule {
            supply,
            demand: Vec::new(),
            order_interval: 5.0,
            time_mode: TimeMode::Periodic,
        };
        assert_eq!(
            schedule.validate().unwrap_err(),
            ScheduleError::InvertedBounds {
                from: 100.0,
                to: 0.0
            }
        );
    }
}
