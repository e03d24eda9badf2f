//! Time-varying price offsets
//!
//! Offset functions shift a price range's bounds as a function of the
//! issue time, so the equilibrium price drifts over a session. Any
//! `fn(Seconds) -> Price` qualifies; these are the stock ones.

use std::f64::consts::PI;

use agora_core::{Price, Seconds};

/// Linear drift of one price unit per ten seconds of elapsed time.
///
/// Halfway values round away from zero.
pub fn offset_by_ten(t: Seconds) -> Price {
    (t / 10.0).round() as Price
}

/// Sinusoidal drift on a rising linear trend.
///
/// The trend gradient and the sine amplitude grow together with `t`,
/// while the wavelength shortens, so the oscillation both widens and
/// quickens as the session progresses. Always non-negative for
/// non-negative `t`.
pub fn schedule_offset(t: Seconds) -> Price {
    let pi2 = PI * 2.0;
    let t = t / 100.0;
    let c = PI * 3000.0;
    let wavelength = t / c;
    let gradient = 100.0 * t / (c / pi2);
    let amplitude = gradient;
    let offset = gradient + amplitude * (wavelength * t).sin();
    offset.round() as Price
}
