//! Allocation run analytics and reports
//!
//! Thin derivation layer over the engine's output: per-agent load,
//! priority distribution, skill demand, missing-skill rankings and the
//! staffing recommendations they imply. Consumes committed assignments;
//! never mutates anything.

pub mod analytics;
pub mod summary;

pub use analytics::{AgentWorkload, Analytics, RunSummary, SkillDemand};
pub use summary::summary_report;
