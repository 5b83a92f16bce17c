//! The `Waypoint` trait — what an AI agent needs from anything it walks to.

use glam::Vec3;
use wa_core::{AgentId, NodeId, WanderRng, WaypointId};

use crate::{
    AreaError, AreaRegistry, AreaResult, ArrivalDecision, ArrivalEvent, ArrivalObserver,
    ArrivalOutcome, ArrivalPolicy, ArrivalState, Target,
};

/// Capability interface consumed by agents.
///
/// Any node of a wander group can stand in for the whole group: distances,
/// target and destination all resolve through the group root.
pub trait Waypoint {
    /// Next point to move toward.  For areas this rolls a new destination.
    fn position(&mut self, rng: &mut WanderRng) -> Vec3;

    fn stop_distance(&self) -> f32;

    fn slow_distance(&self) -> f32;

    /// What the agent should face or follow.
    fn next_target(&self) -> Target;

    /// Report that `agent` reached this waypoint.  Edge-triggered: call once
    /// per arrival.
    fn target_arrived(
        &mut self,
        agent:    AgentId,
        rng:      &mut WanderRng,
        observer: &mut dyn ArrivalObserver,
    ) -> ArrivalOutcome;
}

// ── AreaHandle ────────────────────────────────────────────────────────────────

/// A live area node borrowed from its registry.
///
/// Created by [`AreaRegistry::handle`], which validates the id.
pub struct AreaHandle<'a> {
    registry: &'a mut AreaRegistry,
    node:     NodeId,
}

impl<'a> AreaHandle<'a> {
    pub(crate) fn new(registry: &'a mut AreaRegistry, node: NodeId) -> Self {
        Self { registry, node }
    }

    /// Current group destination, without rolling.
    #[inline]
    pub fn destination(&self) -> Vec3 {
        let root = self.registry.node(self.node).root;
        self.registry.node(root).destination
    }

    fn group(&self) -> &crate::AreaNode {
        self.registry.node(self.registry.node(self.node).root)
    }
}

impl Waypoint for AreaHandle<'_> {
    fn position(&mut self, rng: &mut WanderRng) -> Vec3 {
        self.registry.roll_destination(self.node, rng)
    }

    fn stop_distance(&self) -> f32 {
        self.group().spec.stop_distance
    }

    fn slow_distance(&self) -> f32 {
        self.group().spec.slow_distance
    }

    fn next_target(&self) -> Target {
        self.group().next_target
    }

    fn target_arrived(
        &mut self,
        agent:    AgentId,
        rng:      &mut WanderRng,
        observer: &mut dyn ArrivalObserver,
    ) -> ArrivalOutcome {
        self.registry.arrive(self.node, agent, rng, observer)
    }
}

// ── FixedWaypoint ─────────────────────────────────────────────────────────────

/// A plain point waypoint.  On arrival it always moves on to one of its
/// chained targets, or stays put when it has none.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedWaypoint {
    id:                 WaypointId,
    pub position:       Vec3,
    pub stop_distance:  f32,
    pub slow_distance:  f32,
    pub next_waypoints: Vec<Target>,
    next_target:        Target,
}

impl FixedWaypoint {
    #[inline]
    pub fn id(&self) -> WaypointId {
        self.id
    }
}

impl Waypoint for FixedWaypoint {
    fn position(&mut self, _rng: &mut WanderRng) -> Vec3 {
        self.position
    }

    fn stop_distance(&self) -> f32 {
        self.stop_distance
    }

    fn slow_distance(&self) -> f32 {
        self.slow_distance
    }

    fn next_target(&self) -> Target {
        self.next_target
    }

    fn target_arrived(
        &mut self,
        agent:    AgentId,
        rng:      &mut WanderRng,
        observer: &mut dyn ArrivalObserver,
    ) -> ArrivalOutcome {
        let me = Target::Waypoint(self.id);
        observer.on_target_arrived(&ArrivalEvent {
            reported_by: me,
            group:       me,
            agent,
            destination: self.position,
            target:      self.next_target,
        });

        match ArrivalPolicy::new(0.0).decide(&self.next_waypoints, rng) {
            ArrivalDecision::Advance(next) => {
                self.next_target = next;
                ArrivalOutcome {
                    state:       ArrivalState::AdvancingToNextWaypoint,
                    next_target: next,
                    destination: None,
                }
            }
            ArrivalDecision::Reroll => {
                self.next_target = me;
                ArrivalOutcome {
                    state:       ArrivalState::SeekingWithinArea,
                    next_target: me,
                    destination: Some(self.position),
                }
            }
        }
    }
}

// ── WaypointSet ───────────────────────────────────────────────────────────────

/// Owner of every [`FixedWaypoint`], addressed by [`WaypointId`].
#[derive(Clone, Debug, Default)]
pub struct WaypointSet {
    waypoints: Vec<FixedWaypoint>,
}

impl WaypointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        position: Vec3,
        stop_distance: f32,
        slow_distance: f32,
        next_waypoints: Vec<Target>,
    ) -> WaypointId {
        let id = WaypointId(self.waypoints.len() as u32);
        self.waypoints.push(FixedWaypoint {
            id,
            position,
            stop_distance,
            slow_distance,
            next_waypoints,
            next_target: Target::Waypoint(id),
        });
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn get(&self, id: WaypointId) -> AreaResult<&FixedWaypoint> {
        self.waypoints.get(id.index()).ok_or(AreaError::UnknownWaypoint(id))
    }

    pub fn get_mut(&mut self, id: WaypointId) -> AreaResult<&mut FixedWaypoint> {
        self.waypoints.get_mut(id.index()).ok_or(AreaError::UnknownWaypoint(id))
    }
}
