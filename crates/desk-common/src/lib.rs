//! OpenDesk Common - Shared types for the ticket assignment core
//!
//! This crate provides the validated domain primitives consumed by the
//! allocation engine:
//! - Value objects (skill tags, proficiency, priority, scores)
//! - Agent and ticket records
//! - Engine configuration (scoring weights, escalation policy)
//! - Error handling
//!
//! Value objects are immutable, comparable by value and self-validating.
//! Malformed input (empty ids, out-of-range proficiency, weights that do
//! not sum to 1.0) is rejected here, at the boundary, so the engine itself
//! can assume validated input.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod agent;
pub mod config;
pub mod error;
pub mod ticket;
pub mod value_objects;

pub use agent::Agent;
pub use config::{EngineConfig, ScoreWeights};
pub use error::{DeskError, DeskResult};
pub use ticket::Ticket;
pub use value_objects::{Priority, Proficiency, Score, SkillTag};
