//! Agora Pricing
//!
//! Order price generation for market experiments:
//! - the step-mode price generator driven by an injectable seedable RNG
//! - time-varying offset functions usable as per-range price adjustments
//! - the supply/demand curve builder deriving sorted step curves

mod curve;
mod error;
mod generator;
mod offset;

pub use curve::{MarketCurve, build_curve};
pub use error::{PricingError, PricingResult};
pub use generator::OrderPricer;
pub use offset::{offset_by_ten, schedule_offset};
