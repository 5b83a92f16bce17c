//! `wa-core` — foundational types for the `rust_wander` area selector.
//!
//! This crate is a dependency of every other `wa-*` crate.  It has no `wa-*`
//! dependencies and few external ones (`glam`, `rand`, `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`, `AgentId`, `WaypointId`                     |
//! | [`transform`]   | `Transform` (translation / rotation / scale)          |
//! | [`rng`]         | `WanderRng` (injected, seedable)                      |
//! | [`config`]      | `WanderConfig`                                        |
//! | [`error`]       | `WaError`, `WaResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod transform;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::WanderConfig;
pub use error::{WaError, WaResult};
pub use ids::{AgentId, NodeId, WaypointId};
pub use rng::WanderRng;
pub use transform::Transform;

pub use glam::{Quat, Vec3};
