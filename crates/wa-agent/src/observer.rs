//! Observer trait for progress reporting and data collection.

use wa_area::{ArrivalObserver, ArrivalOutcome};
use wa_core::AgentId;

/// Callbacks invoked by [`WanderSim::run`][crate::WanderSim::run] at key
/// points in the step loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  The [`ArrivalObserver`] supertrait receives
/// each arrival *before* the group picks its next destination;
/// [`on_agent_arrived`](Self::on_agent_arrived) runs after, with the outcome.
pub trait WanderObserver: ArrivalObserver {
    /// Called at the very start of each tick.
    fn on_tick_start(&mut self, _tick: u64) {}

    fn on_agent_arrived(&mut self, _tick: u64, _agent: AgentId, _outcome: &ArrivalOutcome) {}

    /// Called at the end of each tick with the number of arrivals in it.
    fn on_tick_end(&mut self, _tick: u64, _arrivals: usize) {}

    /// Called once after the final tick completes.
    fn on_run_end(&mut self, _final_tick: u64) {}
}

/// A [`WanderObserver`] that does nothing.
pub struct NoopObserver;

impl ArrivalObserver for NoopObserver {}

impl WanderObserver for NoopObserver {}
