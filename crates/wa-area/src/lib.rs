//! `wa-area` — hierarchical wander areas and the arrival state machine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                          |
//! |--------------|-------------------------------------------------------------------|
//! | [`shape`]    | `AreaShape` — circle / box / point, local-space sampling          |
//! | [`node`]     | `AreaSpec`, `AreaNode`, `ArrivalState`, `DebugColor`              |
//! | [`target`]   | `Target` — area or plain waypoint reference                       |
//! | [`registry`] | `AreaRegistry` — storage, group membership, destination selection |
//! | [`arrival`]  | `ArrivalPolicy`, `ArrivalObserver`, `ArrivalOutcome`              |
//! | [`waypoint`] | `Waypoint` trait, `AreaHandle`, `FixedWaypoint`, `WaypointSet`    |
//! | [`world`]    | `WanderWorld` — resolve any `Target` to a `Waypoint`              |
//! | [`loader`]   | CSV area loading                                                  |
//! | [`error`]    | `AreaError`, `AreaResult<T>`                                      |
//!
//! # Groups
//!
//! Areas form scene trees.  The top-most node of each tree is the group root
//! ("main area"); every other live node in the tree is one of its children.
//! The root alone owns the group's destination, next target and arrival
//! state, and its stop/slow distances speak for the whole group:
//!
//! ```text
//! next_destination(root)   → uniform child (if > 1 child) samples; root stores it
//! next_destination(child)  → child samples itself;             root stores it
//! on_arrived(any)          → observer(previous destination) → re-roll or advance
//! ```
//!
//! # Example
//!
//! ```rust
//! use wa_area::{AreaRegistry, AreaSpec, NoopArrivalObserver};
//! use wa_core::{AgentId, Vec3, WanderRng};
//!
//! let mut areas = AreaRegistry::new();
//! let meadow = areas.insert(AreaSpec::circle(5.0).named("meadow")).unwrap();
//! let mut rng = WanderRng::new(7);
//!
//! let dest = areas.next_destination(meadow, &mut rng).unwrap();
//! assert!(dest.distance(Vec3::ZERO) <= 5.0);
//!
//! let outcome = areas.on_arrived(meadow, AgentId(0), &mut rng, &mut NoopArrivalObserver).unwrap();
//! assert_eq!(outcome.destination, Some(areas.destination(meadow).unwrap()));
//! ```

pub mod arrival;
pub mod error;
pub mod loader;
pub mod node;
pub mod registry;
pub mod shape;
pub mod target;
pub mod waypoint;
pub mod world;


pub use arrival::{
    ArrivalDecision, ArrivalEvent, ArrivalObserver, ArrivalOutcome, ArrivalPolicy,
    NoopArrivalObserver, RecordingObserver,
};
pub use error::{AreaError, AreaResult};
pub use loader::{load_areas_csv, load_areas_reader};
pub use node::{AreaNode, AreaSpec, ArrivalState, DebugColor, Resolved};
pub use registry::AreaRegistry;
pub use shape::AreaShape;
pub use target::Target;
pub use waypoint::{AreaHandle, FixedWaypoint, Waypoint, WaypointSet};
pub use world::{WanderWorld, WaypointMut};
