//! The fixed-step driver.

use tracing::{debug, info};
use wa_area::WanderWorld;
use wa_core::{WanderConfig, WanderRng};

use crate::{AgentResult, StepOutcome, WanderAgent, WanderObserver};

/// Steps every agent once per tick, in agent order, against one world.
///
/// Build with [`WanderSimBuilder`][crate::WanderSimBuilder].
pub struct WanderSim {
    pub(crate) config: WanderConfig,
    pub(crate) world:  WanderWorld,
    pub(crate) agents: Vec<WanderAgent>,
    /// One RNG per agent, indexed like `agents`.
    pub(crate) rngs:   Vec<WanderRng>,
    pub(crate) tick:   u64,
}

impl WanderSim {
    #[inline]
    pub fn world(&self) -> &WanderWorld {
        &self.world
    }

    /// Mutable world access between ticks, e.g. to activate or deactivate
    /// areas mid-run.
    #[inline]
    pub fn world_mut(&mut self) -> &mut WanderWorld {
        &mut self.world
    }

    #[inline]
    pub fn agents(&self) -> &[WanderAgent] {
        &self.agents
    }

    #[inline]
    pub fn config(&self) -> &WanderConfig {
        &self.config
    }

    /// Ticks completed so far.
    #[inline]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Run the remaining ticks of `config.total_ticks`.
    pub fn run<O: WanderObserver>(&mut self, observer: &mut O) -> AgentResult<()> {
        info!(agents = self.agents.len(), ticks = self.config.total_ticks, "wander run starting");
        while self.tick < self.config.total_ticks {
            self.step(observer)?;
        }
        observer.on_run_end(self.tick);
        info!(final_tick = self.tick, "wander run finished");
        Ok(())
    }

    /// Advance one tick.  Returns the number of arrivals in it.
    pub fn step<O: WanderObserver>(&mut self, observer: &mut O) -> AgentResult<usize> {
        let tick = self.tick;
        let dt = self.config.tick_secs;
        observer.on_tick_start(tick);

        let mut arrivals = 0;
        for (agent, rng) in self.agents.iter_mut().zip(self.rngs.iter_mut()) {
            if let StepOutcome::Arrived(outcome) = agent.step(dt, &mut self.world, rng, &mut *observer)? {
                arrivals += 1;
                observer.on_agent_arrived(tick, agent.id, &outcome);
            }
        }

        if arrivals > 0 {
            debug!(tick, arrivals, "tick arrivals");
        }
        observer.on_tick_end(tick, arrivals);
        self.tick += 1;
        Ok(arrivals)
    }
}
