//! Supply and demand curve construction
//!
//! Prices one order per participant on each side of the market and
//! sorts the results into plottable supply and demand curves.

use agora_core::{Price, PriceRange, StepMode};

use crate::error::PricingResult;
use crate::generator::OrderPricer;

/// One snapshot of the market's supply and demand curves
#[derive(Debug, Clone, Default)]
pub struct MarketCurve {
    /// Ask prices sorted ascending
    pub asks: Vec<Price>,
    /// Bid prices sorted descending
    pub bids: Vec<Price>,
}

impl MarketCurve {
    /// Supply curve as (cumulative quantity, price) step vertices
    pub fn ask_steps(&self) -> Vec<(u32, Price)> {
        Self::steps(&self.asks)
    }

    /// Demand curve as (cumulative quantity, price) step vertices
    pub fn bid_steps(&self) -> Vec<(u32, Price)> {
        Self::steps(&self.bids)
    }

    // Each unit order becomes a horizontal step one quantity unit wide
    fn steps(prices: &[Price]) -> Vec<(u32, Price)> {
        let mut vertices = Vec::with_capacity(prices.len() * 2);
        for (i, &price) in prices.iter().enumerate() {
            let quantity = i as u32;
            vertices.push((quantity, price));
            vertices.push((quantity + 1, price));
        }
        vertices
    }
}

/// Build supply and demand curves for one market snapshot.
///
/// Generates one ask per seller and one bid per buyer under the given
/// step mode. A side whose range list is empty is left empty rather
/// than priced.
pub fn build_curve(
    pricer: &mut OrderPricer,
    seller_count: u32,
    supply_ranges: &[PriceRange],
    buyer_count: u32,
    demand_ranges: &[PriceRange],
    mode: StepMode,
) -> PricingResult<MarketCurve> {
    let mut curve = MarketCurve::default();

    if !supply_ranges.is_empty() {
        for index in 0..seller_count {
            let price = pricer.order_price(index, supply_ranges, seller_count, mode)?;
            curve.asks.push(price);
        }
        curve.asks.sort_unstable();
    }

    if !demand_ranges.is_empty() {
        for index in 0..buyer_count {
            let price = pricer.order_price(index, demand_ranges, buyer_count, mode)?;
            curve.bids.push(price);
        }
        curve.bids.sort_unstable();
        curve.bids.reverse();
    }

    Ok(curve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PricingError;

    #[test]
    fn test_fixed_curve_sorted_both_sides() {
        let mut pricer = OrderPricer::with_seed(42);
        let supply = vec![PriceRange::new(10, 20)];
        let demand = vec![PriceRange::new(100, 200)];

        let curve = build_curve(&mut pricer, 3, &supply, 5, &demand, StepMode::Fixed).unwrap();

        assert_eq!(curve.asks.len(), 3);
        assert_eq!(curve.bids.len(), 5);
        for pair in curve.asks.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        for pair in curve.bids.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
        assert!(curve.asks.iter().all(|p| (10..=20).contains(p)));
        assert!(curve.bids.iter().all(|p| (100..=200).contains(p)));
    }

    #[test]
    fn test_random_curve_within_bounds() {
        let mut pricer = OrderPricer::with_seed(999);
        let ranges = vec![PriceRange::new(50, 100)];

        let curve = build_curve(&mut pricer, 10, &ranges, 10, &ranges, StepMode::Random).unwrap();

        assert!(curve.asks.iter().all(|p| (50..=100).contains(p)));
        assert!(curve.bids.iter().all(|p| (50..=100).contains(p)));
    }

    #[test]
    fn test_empty_range_list_skips_side() {
        let mut pricer = OrderPricer::with_seed(42);
        let demand = vec![PriceRange::new(100, 200)];

        let curve = build_curve(&mut pricer, 5, &[], 5, &demand, StepMode::Fixed).unwrap();

        assert!(curve.asks.is_empty());
        assert_eq!(curve.bids.len(), 5);
    }

    #[test]
    fn test_single_participant_error_propagates() {
        let mut pricer = OrderPricer::with_seed(42);
        let supply = vec![PriceRange::new(10, 20)];

        let err = build_curve(&mut pricer, 1, &supply, 0, &[], StepMode::Fixed).unwrap_err();
        assert_eq!(err, PricingError::InvalidParticipantCount(1));
    }

    #[test]
    fn test_step_vertices_shape() {
        let curve = MarketCurve {
            asks: vec![10, 15],
            bids: vec![200, 150],
        };

        assert_eq!(curve.ask_steps(), vec![(0, 10), (1, 10), (1, 15), (2, 15)]);
        assert_eq!(
            curve.bid_steps(),
            vec![(0, 200), (1, 200), (1, 150), (2, 150)]
        );
    }
}
