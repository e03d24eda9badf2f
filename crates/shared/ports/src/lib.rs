//! Agora Ports
//!
//! Port definitions (traits) for the Agora market experiment harness.
//! These define the boundary between the harness and the market simulator.

mod error;
mod session;

pub use error::{SessionError, SessionResult};
pub use session::{MarketSession, SessionRequest};
