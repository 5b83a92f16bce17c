//! `wa-agent` — AI agents that consume wander areas.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`agent`]    | `WanderAgent` — move, slow down, stop, report arrival          |
//! | [`sim`]      | `WanderSim` — fixed-step loop over all agents                  |
//! | [`builder`]  | `WanderSimBuilder`                                             |
//! | [`observer`] | `WanderObserver` trait, `NoopObserver`                         |
//! | [`error`]    | `AgentError`, `AgentResult<T>`                                 |
//!
//! # Per-step agent loop
//!
//! ```text
//! goal unset   → goal = target.position()        (areas roll a destination)
//! dist > stop  → move toward goal; scale speed down inside slow distance
//! dist ≤ stop  → target.target_arrived() once; follow the outcome's target
//! ```

pub mod agent;
pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use agent::{StepOutcome, WanderAgent};
pub use builder::WanderSimBuilder;
pub use error::{AgentError, AgentResult};
pub use observer::{NoopObserver, WanderObserver};
pub use sim::WanderSim;
