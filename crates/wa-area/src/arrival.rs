//! Arrival handling: the observer hook and the re-roll / advance decision.
//!
//! On every arrival the observer fires first, with the group's destination
//! and target as they were *before* the decision.  Then:
//!
//! ```text
//! chained waypoints empty      → re-roll inside the group, target = group
//! p ~ U[0,1),  p <  weight     → re-roll inside the group, target = group
//! otherwise                    → target = uniformly chosen chained waypoint
//! ```
//!
//! The weight and the chained waypoints are the group root's, whichever node
//! of the group reports the arrival.

use glam::Vec3;
use tracing::debug;
use wa_core::{AgentId, NodeId, WanderRng};

use crate::{AreaRegistry, AreaResult, ArrivalState, Target};

/// What the observer sees when an agent reports arrival.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrivalEvent {
    /// The waypoint the agent reported to.
    pub reported_by: Target,
    /// The group that waypoint belongs to (itself for plain waypoints).
    pub group:       Target,
    pub agent:       AgentId,
    /// Destination that was active when the agent arrived.
    pub destination: Vec3,
    /// Target the group was tracking when the agent arrived.
    pub target:      Target,
}

/// Listener for arrival events.
///
/// Called exactly once per arrival, before any state changes.
pub trait ArrivalObserver {
    fn on_target_arrived(&mut self, _event: &ArrivalEvent) {}
}

/// An [`ArrivalObserver`] that does nothing.
pub struct NoopArrivalObserver;

impl ArrivalObserver for NoopArrivalObserver {}

/// Collects every event; handy in tests and for post-run inspection.
#[derive(Default, Debug)]
pub struct RecordingObserver {
    pub events: Vec<ArrivalEvent>,
}

impl ArrivalObserver for RecordingObserver {
    fn on_target_arrived(&mut self, event: &ArrivalEvent) {
        self.events.push(event.clone());
    }
}

/// The decision taken for one arrival.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ArrivalDecision {
    Reroll,
    Advance(Target),
}

/// Weighted choice between wandering on and leaving the group.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArrivalPolicy {
    wander_weight: f32,
}

impl ArrivalPolicy {
    /// `wander_weight` is clamped to `[0, 1]`; NaN and infinities mean 1.
    pub fn new(wander_weight: f32) -> Self {
        Self { wander_weight: clamp_weight(wander_weight) }
    }

    #[inline]
    pub fn wander_weight(&self) -> f32 {
        self.wander_weight
    }

    /// Decide one arrival.  Draws from `rng` only when `chained` is non-empty.
    ///
    /// The draw is strict (`p < weight`) so a weight of 0 never re-rolls and a
    /// weight of 1 always does.
    pub fn decide(&self, chained: &[Target], rng: &mut WanderRng) -> ArrivalDecision {
        if chained.is_empty() {
            return ArrivalDecision::Reroll;
        }
        let p = rng.unit();
        if p < self.wander_weight {
            return ArrivalDecision::Reroll;
        }
        match rng.choose(chained) {
            Some(&next) => ArrivalDecision::Advance(next),
            None => ArrivalDecision::Reroll,
        }
    }
}

/// Clamp a wander weight to `[0, 1]`.  Non-finite weights become the
/// default of 1 (always wander).
#[inline]
pub(crate) fn clamp_weight(weight: f32) -> f32 {
    if weight.is_finite() { weight.clamp(0.0, 1.0) } else { 1.0 }
}

/// Result of one arrival.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArrivalOutcome {
    pub state:       ArrivalState,
    /// Where the agent should head next.
    pub next_target: Target,
    /// The freshly rolled destination, when the group re-rolled.
    pub destination: Option<Vec3>,
}

impl AreaRegistry {
    /// Handle an agent reporting arrival at area `id`.
    pub fn on_arrived(
        &mut self,
        id:       NodeId,
        agent:    AgentId,
        rng:      &mut WanderRng,
        observer: &mut dyn ArrivalObserver,
    ) -> AreaResult<ArrivalOutcome> {
        self.check(id)?;
        Ok(self.arrive(id, agent, rng, observer))
    }

    pub(crate) fn arrive(
        &mut self,
        id:       NodeId,
        agent:    AgentId,
        rng:      &mut WanderRng,
        observer: &mut dyn ArrivalObserver,
    ) -> ArrivalOutcome {
        let root = self.node(id).root;
        let group = self.node(root);
        observer.on_target_arrived(&ArrivalEvent {
            reported_by: Target::Area(id),
            group:       Target::Area(root),
            agent,
            destination: group.destination,
            target:      group.next_target,
        });

        let decision = ArrivalPolicy::new(group.spec.wander_weight)
            .decide(&group.spec.next_waypoints, rng);

        let outcome = match decision {
            ArrivalDecision::Reroll => {
                let point = self.roll_destination(id, rng);
                let group = self.node_mut(root);
                group.next_target = Target::Area(root);
                group.state = ArrivalState::SeekingWithinArea;
                ArrivalOutcome {
                    state:       ArrivalState::SeekingWithinArea,
                    next_target: group.next_target,
                    destination: Some(point),
                }
            }
            ArrivalDecision::Advance(next) => {
                let group = self.node_mut(root);
                group.next_target = next;
                group.state = ArrivalState::AdvancingToNextWaypoint;
                ArrivalOutcome {
                    state:       ArrivalState::AdvancingToNextWaypoint,
                    next_target: next,
                    destination: None,
                }
            }
        };

        debug!(area = %id, group = %root, agent = %agent, state = ?outcome.state, next = %outcome.next_target, "target arrived");
        outcome
    }
}
