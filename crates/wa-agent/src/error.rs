use thiserror::Error;
use wa_area::AreaError;
use wa_core::{AgentId, NodeId, WaError};

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("configuration error: {0}")]
    Config(#[from] WaError),

    #[error("area error: {0}")]
    Area(#[from] AreaError),

    #[error("agents {first} and {second} both start in group {group}; a group has one controller")]
    SharedGroup { group: NodeId, first: AgentId, second: AgentId },
}

pub type AgentResult<T> = Result<T, AgentError>;
