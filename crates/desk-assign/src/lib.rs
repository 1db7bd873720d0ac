//! Deterministic Ticket Allocation Engine
//!
//! Ranks agent-ticket pairs with a four-part weighted score and commits
//! tickets to agents under capacity constraints, in priority order,
//! producing a machine-readable rationale per decision.
//!
//! # Features
//!
//! - Pure, side-effect-free scoring (reproducible runs)
//! - Registry-owned workload counters with a single commit path
//! - Exact tie-break rules for byte-identical output across runs
//! - Skill-gap detection feeding staffing recommendations

#![warn(missing_docs)]

pub mod engine;
pub mod rationale;
pub mod registry;
pub mod scorer;

pub use engine::{AllocationEngine, AllocationOutcome};
pub use registry::AgentRegistry;
pub use scorer::{AgentScorer, CompositeScore};

use desk_common::Priority;
use desk_common::SkillTag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One allocation decision. Created once by the engine, immutable after.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    /// Ticket this decision is for
    pub ticket_id: String,
    /// Winning agent, or `None` when the ticket is unassignable
    pub agent_id: Option<String>,
    /// Winning agent's display name
    pub agent_name: Option<String>,
    /// Ticket priority at decision time
    pub priority: Priority,
    /// Composite total in [0, 1]; 0.0 for unassigned tickets
    pub total_score: f32,
    /// Sub-score breakdown, absent for unassigned tickets
    pub breakdown: Option<CompositeScore>,
    /// One-line human-readable explanation of the decision
    pub rationale: String,
    /// Position in the processing sequence (priority order, not input order)
    pub processed_order: usize,
}

/// Ticket for which no agent was eligible.
///
/// Not an error: a first-class output record used to drive hiring and
/// training recommendations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGap {
    /// The unassignable ticket
    pub ticket_id: String,
    /// Required skills that no agent in the registry possesses. Empty when
    /// the skills exist but every holder was at capacity or lacked the
    /// escalation flag.
    pub missing_skills: BTreeSet<SkillTag>,
}
