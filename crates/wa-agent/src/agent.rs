//! A single wandering agent.

use glam::Vec3;
use tracing::{trace, warn};
use wa_area::{
    AreaError, ArrivalObserver, ArrivalOutcome, ArrivalState, Target, WanderWorld, Waypoint,
};
use wa_core::{AgentId, WanderRng};

use crate::AgentResult;

/// Floor on the slow-down factor so agents never stall inside the slowing
/// radius.
const MIN_SLOW_FACTOR: f32 = 0.2;

/// What one [`WanderAgent::step`] did.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StepOutcome {
    /// Moved; `remaining` is the distance left to the goal.
    Moving { remaining: f32 },
    /// Reached the target and reported it.
    Arrived(ArrivalOutcome),
    /// Sitting on a dead-end waypoint it already reported, or waiting for
    /// an inactive target to come back.
    Idle,
}

#[derive(Clone, Debug)]
pub struct WanderAgent {
    pub id:       AgentId,
    pub position: Vec3,
    /// World units per second.
    pub speed:    f32,
    target:       Target,
    /// Where to go when the target stops resolving: the spawn target, then
    /// the group of the last area arrived at.
    home:         Target,
    goal:         Option<Vec3>,
    /// Set on a dead-end arrival; cleared once the agent is outside the
    /// stopping distance again.
    reported:     bool,
    arrivals:     u64,
}

impl WanderAgent {
    pub fn new(id: AgentId, position: Vec3, speed: f32, target: Target) -> Self {
        Self {
            id,
            position,
            speed,
            target,
            home: target,
            goal: None,
            reported: false,
            arrivals: 0,
        }
    }

    #[inline]
    pub fn target(&self) -> Target {
        self.target
    }

    /// Point currently being walked to, once the target has been asked.
    #[inline]
    pub fn goal(&self) -> Option<Vec3> {
        self.goal
    }

    #[inline]
    pub fn arrivals(&self) -> u64 {
        self.arrivals
    }

    /// Advance `dt` seconds.
    ///
    /// An inactive target sends the agent home; with home inactive too the
    /// agent stays [`Idle`](StepOutcome::Idle) until one comes back.
    ///
    /// # Errors
    ///
    /// Fails if the current target names no area or waypoint in `world`.
    pub fn step(
        &mut self,
        dt:       f32,
        world:    &mut WanderWorld,
        rng:      &mut WanderRng,
        observer: &mut dyn ArrivalObserver,
    ) -> AgentResult<StepOutcome> {
        match world.check(self.target) {
            Ok(()) => {}
            Err(AreaError::Inactive(_)) => {
                if self.home == self.target || world.check(self.home).is_err() {
                    return Ok(StepOutcome::Idle);
                }
                warn!(agent = %self.id, target = %self.target, home = %self.home, "target inactive, heading home");
                self.retarget(self.home, None);
            }
            Err(e) => return Err(e.into()),
        }

        let mut waypoint = world.resolve(self.target)?;
        let goal = match self.goal {
            Some(g) => g,
            None => {
                let g = waypoint.position(rng);
                self.goal = Some(g);
                g
            }
        };

        let stop = waypoint.stop_distance();
        let slow = waypoint.slow_distance();
        let dist = self.position.distance(goal);

        if dist <= stop {
            if self.reported {
                return Ok(StepOutcome::Idle);
            }
            let outcome = waypoint.target_arrived(self.id, rng, observer);
            self.arrivals += 1;
            self.follow(&outcome, world);
            return Ok(StepOutcome::Arrived(outcome));
        }
        self.reported = false;

        let factor = if slow > stop && dist < slow {
            ((dist - stop) / (slow - stop)).max(MIN_SLOW_FACTOR)
        } else {
            1.0
        };
        let travel = self.speed * factor * dt;
        if travel >= dist {
            self.position = goal;
        } else {
            self.position += (goal - self.position) / dist * travel;
        }

        let remaining = self.position.distance(goal);
        trace!(agent = %self.id, target = %self.target, remaining, "moved");
        Ok(StepOutcome::Moving { remaining })
    }

    /// Take up the target an arrival handed back.
    fn follow(&mut self, outcome: &ArrivalOutcome, world: &WanderWorld) {
        if let Target::Area(id) = self.target {
            if let Ok(root) = world.areas.root_of(id) {
                self.home = Target::Area(root);
            }
        }

        let next = outcome.next_target;
        if let Err(err) = world.check(next) {
            let fallback = if world.check(self.home).is_ok() { self.home } else { self.target };
            warn!(agent = %self.id, %next, %fallback, %err, "chained target unusable, falling back");
            self.retarget(fallback, None);
            return;
        }

        // A plain waypoint with nothing chained hands the agent back to itself.
        let dead_end = matches!(next, Target::Waypoint(_))
            && next == self.target
            && outcome.state == ArrivalState::SeekingWithinArea;
        self.retarget(next, outcome.destination);
        self.reported = dead_end;
    }

    fn retarget(&mut self, target: Target, goal: Option<Vec3>) {
        self.target = target;
        self.goal = goal;
        self.reported = false;
    }
}
