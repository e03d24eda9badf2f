use std::io::Write;

use agora_core::{OrderSchedule, Seconds, TraderSpec};

use crate::error::SessionResult;

/// One trial's worth of input to the market simulator
#[derive(Debug, Clone, Copy)]
pub struct SessionRequest<'a> {
    /// Trial identifier, embedded in simulator artifact names
    pub trial_id: &'a str,
    /// Session start in seconds (always 0 in the default harness)
    pub start_time: Seconds,
    /// Session end in seconds
    pub end_time: Seconds,
    /// Market population
    pub traders: &'a TraderSpec,
    /// Customer order schedule for both sides
    pub schedule: &'a OrderSchedule,
    /// Dump every periodic balance snapshot, not only the final one
    pub dump_all: bool,
    /// Simulator-side progress output
    pub verbose: bool,
}

/// Port for the continuous double-auction market simulator
///
/// One call runs one complete trial: the implementation advances
/// simulated time from `start_time` to `end_time`, issues customer
/// orders per the schedule, and records its artifacts. The balance
/// history goes to `sink`; any price tape is keyed by the trial id.
///
/// The call blocks until the trial completes and there is no timeout:
/// a hung implementation blocks the caller indefinitely.
pub trait MarketSession: Send {
    /// Run one trial to completion
    fn run(&mut self, request: &SessionRequest<'_>, sink: &mut dyn Write) -> SessionResult<()>;

    /// Get the name of the implementation
    fn name(&self) -> &str {
        "MarketSession"
    }
}
