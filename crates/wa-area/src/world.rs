//! `WanderWorld` — areas and plain waypoints behind one target lookup.

use glam::Vec3;
use wa_core::{AgentId, WanderRng};

use crate::{
    AreaError, AreaHandle, AreaRegistry, AreaResult, ArrivalObserver, ArrivalOutcome, FixedWaypoint,
    Target, Waypoint, WaypointSet,
};

/// Everything an agent can target.
#[derive(Clone, Debug, Default)]
pub struct WanderWorld {
    pub areas:     AreaRegistry,
    pub waypoints: WaypointSet,
}

impl WanderWorld {
    pub fn new(areas: AreaRegistry, waypoints: WaypointSet) -> Self {
        Self { areas, waypoints }
    }

    /// Borrow `target` as a [`Waypoint`].
    ///
    /// # Errors
    ///
    /// Unknown ids and inactive areas.
    pub fn resolve(&mut self, target: Target) -> AreaResult<WaypointMut<'_>> {
        match target {
            Target::Area(id) => self.areas.handle(id).map(WaypointMut::Area),
            Target::Waypoint(id) => self.waypoints.get_mut(id).map(WaypointMut::Fixed),
        }
    }

    /// `Ok` when [`resolve`](Self::resolve) would succeed for `target`.
    pub fn check(&self, target: Target) -> AreaResult<()> {
        match target {
            Target::Area(id) => {
                self.areas.check(id)?;
                if self.areas.is_live(id) { Ok(()) } else { Err(AreaError::Inactive(id)) }
            }
            Target::Waypoint(id) => self.waypoints.get(id).map(|_| ()),
        }
    }

    /// Chained targets an arrival at `target` may advance to.  For areas
    /// these are the group root's.
    pub fn chained(&self, target: Target) -> AreaResult<&[Target]> {
        match target {
            Target::Area(id) => {
                let root = self.areas.root_of(id)?;
                Ok(self.areas.node(root).next_waypoints())
            }
            Target::Waypoint(id) => Ok(self.waypoints.get(id)?.next_waypoints.as_slice()),
        }
    }

    /// Walk every chain reachable from `starts` and fail on the first target
    /// id that names nothing.  Inactive areas pass: they may be re-activated.
    pub fn check_chains(&self, starts: impl IntoIterator<Item = Target>) -> AreaResult<usize> {
        let mut seen: Vec<Target> = Vec::new();
        let mut stack: Vec<Target> = starts.into_iter().collect();
        while let Some(target) = stack.pop() {
            if seen.contains(&target) {
                continue;
            }
            seen.push(target);
            stack.extend(self.chained(target)?.iter().copied());
        }
        Ok(seen.len())
    }
}

/// Either kind of waypoint, borrowed mutably.
pub enum WaypointMut<'a> {
    Area(AreaHandle<'a>),
    Fixed(&'a mut FixedWaypoint),
}

impl Waypoint for WaypointMut<'_> {
    fn position(&mut self, rng: &mut WanderRng) -> Vec3 {
        match self {
            WaypointMut::Area(a) => a.position(rng),
            WaypointMut::Fixed(w) => w.position(rng),
        }
    }

    fn stop_distance(&self) -> f32 {
        match self {
            WaypointMut::Area(a) => a.stop_distance(),
            WaypointMut::Fixed(w) => w.stop_distance(),
        }
    }

    fn slow_distance(&self) -> f32 {
        match self {
            WaypointMut::Area(a) => a.slow_distance(),
            WaypointMut::Fixed(w) => w.slow_distance(),
        }
    }

    fn next_target(&self) -> Target {
        match self {
            WaypointMut::Area(a) => a.next_target(),
            WaypointMut::Fixed(w) => w.next_target(),
        }
    }

    fn target_arrived(
        &mut self,
        agent:    AgentId,
        rng:      &mut WanderRng,
        observer: &mut dyn ArrivalObserver,
    ) -> ArrivalOutcome {
        match self {
            WaypointMut::Area(a) => a.target_arrived(agent, rng, observer),
            WaypointMut::Fixed(w) => w.target_arrived(agent, rng, observer),
        }
    }
}
