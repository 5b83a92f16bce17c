//! References to things an agent can move toward.

use std::fmt;

use wa_core::{NodeId, WaypointId};

/// What an agent is heading for.
///
/// `Area` names any node of a wander group (every node stands in for its
/// whole group).  `Waypoint` names a plain point waypoint the area registry
/// does not own.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Target {
    Area(NodeId),
    Waypoint(WaypointId),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Area(id) => write!(f, "area:{}", id.0),
            Target::Waypoint(id) => write!(f, "waypoint:{}", id.0),
        }
    }
}
