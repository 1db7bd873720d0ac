//! Error types for OpenDesk

use thiserror::Error;

/// OpenDesk error type
///
/// `CapacityExceeded` belongs to the internal-invariant class: the registry
/// filter should have excluded the agent before commit was attempted, so in
/// correct operation it never surfaces. A ticket with no eligible agent is
/// NOT an error; it degrades to a skill-gap record in the run output.
#[derive(Error, Debug)]
pub enum DeskError {
    /// Commit attempted on an agent already at capacity
    #[error("capacity exceeded for agent: {agent_id}")]
    CapacityExceeded {
        /// The agent that was already at its maximum concurrent load
        agent_id: String,
    },

    /// Agent not found in the registry
    #[error("agent not found: {0}")]
    AgentNotFound(String),

    /// Two agents share the same id
    #[error("duplicate agent id: {0}")]
    DuplicateAgent(String),

    /// Two tickets share the same id
    #[error("duplicate ticket id: {0}")]
    DuplicateTicket(String),

    /// Invalid skill tag
    #[error("invalid skill tag: {0}")]
    InvalidTag(String),

    /// Proficiency outside 1..=10
    #[error("invalid proficiency: {0} (must be 1-10)")]
    InvalidProficiency(u8),

    /// Score outside [0, 1]
    #[error("invalid score: {0} (must be 0.0-1.0)")]
    InvalidScore(f32),

    /// Configuration rejected before any assignment work began
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed agent record rejected at the boundary
    #[error("invalid agent {id}: {reason}")]
    InvalidAgent {
        /// Offending agent id (may be empty)
        id: String,
        /// Why the record was rejected
        reason: String,
    },

    /// Malformed ticket record rejected at the boundary
    #[error("invalid ticket {id}: {reason}")]
    InvalidTicket {
        /// Offending ticket id (may be empty)
        id: String,
        /// Why the record was rejected
        reason: String,
    },

    /// IO error (CLI layer)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed input/output document (CLI layer)
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for OpenDesk
pub type DeskResult<T> = Result<T, DeskError>;
