//! Fluent builder for constructing a [`WanderSim`].

use glam::Vec3;
use tracing::debug;
use wa_area::{Target, WanderWorld};
use wa_core::{AgentId, NodeId, WanderConfig, WanderRng};

use crate::{AgentError, AgentResult, WanderAgent, WanderSim};

struct Spawn {
    position: Vec3,
    target:   Target,
    speed:    Option<f32>,
}

/// Fluent builder for [`WanderSim`].
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = WanderSimBuilder::new(config, world)
///     .agent(Vec3::ZERO, Target::Area(meadow))
///     .agent_with_speed(Vec3::X, Target::Waypoint(gate), 5.0)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct WanderSimBuilder {
    config: WanderConfig,
    world:  WanderWorld,
    spawns: Vec<Spawn>,
}

impl WanderSimBuilder {
    pub fn new(config: WanderConfig, world: WanderWorld) -> Self {
        Self { config, world, spawns: Vec::new() }
    }

    /// Add an agent at `position` heading for `target` at the configured speed.
    pub fn agent(mut self, position: Vec3, target: Target) -> Self {
        self.spawns.push(Spawn { position, target, speed: None });
        self
    }

    pub fn agent_with_speed(mut self, position: Vec3, target: Target, speed: f32) -> Self {
        self.spawns.push(Spawn { position, target, speed: Some(speed) });
        self
    }

    /// Validate the config, every starting target and every chained target
    /// reachable from them, roll each group's first destination, and return
    /// a ready-to-run [`WanderSim`].
    ///
    /// Two agents may not start in the same area group: the group's
    /// destination is shared state with a single controller.  Chains that
    /// later lead agents into one group are not detected.
    pub fn build(mut self) -> AgentResult<WanderSim> {
        self.config.validate()?;

        let mut groups: Vec<(NodeId, AgentId)> = Vec::new();
        for (i, spawn) in self.spawns.iter().enumerate() {
            self.world.check(spawn.target)?;
            if let Target::Area(id) = spawn.target {
                let group = self.world.areas.root_of(id)?;
                let agent = AgentId(i as u32);
                if let Some(&(_, first)) = groups.iter().find(|(g, _)| *g == group) {
                    return Err(AgentError::SharedGroup { group, first, second: agent });
                }
                groups.push((group, agent));
            }
        }
        let reachable = self.world.check_chains(self.spawns.iter().map(|s| s.target))?;
        debug!(agents = self.spawns.len(), reachable, "validated targets");

        let seed = self.config.seed;
        self.world.areas.initialize(&mut WanderRng::new(seed));

        let mut agents = Vec::with_capacity(self.spawns.len());
        let mut rngs = Vec::with_capacity(self.spawns.len());
        for (i, spawn) in self.spawns.into_iter().enumerate() {
            let id = AgentId(i as u32);
            let speed = spawn.speed.unwrap_or(self.config.agent_speed);
            agents.push(WanderAgent::new(id, spawn.position, speed, spawn.target));
            rngs.push(WanderRng::for_agent(seed, id));
        }

        Ok(WanderSim {
            config: self.config,
            world: self.world,
            agents,
            rngs,
            tick: 0,
        })
    }
}
