//! Run configuration for driving agents against a set of wander areas.

/// Top-level configuration.
///
/// Typically loaded from a TOML/JSON file by the application crate (enable the
/// `serde` feature) and passed to the runner.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WanderConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Seconds of simulated time per tick.
    pub tick_secs: f32,

    /// Total ticks to run.
    pub total_ticks: u64,

    /// Default agent travel speed, world units per second.
    pub agent_speed: f32,
}

impl Default for WanderConfig {
    fn default() -> Self {
        Self {
            seed:        0,
            tick_secs:   0.1,
            total_ticks: 1_000,
            agent_speed: 3.0,
        }
    }
}

impl WanderConfig {
    /// Reject settings no run can make progress with.
    pub fn validate(&self) -> crate::WaResult<()> {
        if self.tick_secs.is_nan() || self.tick_secs <= 0.0 {
            return Err(crate::WaError::Config(format!(
                "tick_secs must be positive, got {}",
                self.tick_secs
            )));
        }
        if self.agent_speed.is_nan() || self.agent_speed < 0.0 {
            return Err(crate::WaError::Config(format!(
                "agent_speed must be non-negative, got {}",
                self.agent_speed
            )));
        }
        Ok(())
    }

    /// Simulated seconds covered by the whole run.
    #[inline]
    pub fn duration_secs(&self) -> f64 {
        self.total_ticks as f64 * self.tick_secs as f64
    }
}
