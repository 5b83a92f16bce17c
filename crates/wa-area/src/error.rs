use thiserror::Error;

use wa_core::{NodeId, WaError, WaypointId};

#[derive(Debug, Error)]
pub enum AreaError {
    #[error("area {0} not found")]
    UnknownNode(NodeId),

    #[error("waypoint {0} not found")]
    UnknownWaypoint(WaypointId),

    #[error("area {0} is inactive")]
    Inactive(NodeId),

    #[error("parenting {child} under {parent} would create a cycle")]
    Cycle { child: NodeId, parent: NodeId },

    #[error("area parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] WaError),
}

pub type AreaResult<T> = Result<T, AreaError>;
