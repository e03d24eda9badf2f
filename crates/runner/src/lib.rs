//! Agora Runner - Market Experiment Orchestration
//!
//! Drives batches of market-session trials against any [`MarketSession`]
//! implementation:
//!
//! - **Experiment**: trader line-up, order schedule and trial loop for
//!   one parameter point
//! - **Sweep**: the full study grid over ensemble size and differential
//!   weight, run strictly in sequence
//!
//! ## Architecture
//!
//! ```text
//!  ┌──────────────┐   points    ┌──────────────────┐
//!  │    Sweep     │ ──────────▶ │ ExperimentRunner │
//!  └──────────────┘             └────────┬─────────┘
//!                                        │ one request per trial
//!                                        ▼
//!                               ┌──────────────────┐
//!                               │  MarketSession   │
//!                               │     (port)       │
//!                               └────────┬─────────┘
//!                                        │ balance history
//!                                        ▼
//!                               <trial_id>_avg_balance.csv
//! ```

pub mod error;
pub mod experiment;
pub mod sweep;

// Re-export main types
pub use error::{RunnerError, RunnerResult};
pub use experiment::{ExperimentConfig, ExperimentRunner, TrialReport};
pub use sweep::{ExperimentPoint, SweepConfig, SweepSummary};

// Re-export the session port for convenience
pub use agora_ports::{MarketSession, SessionRequest};
