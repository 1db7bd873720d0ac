//! Ticket classification - the normalizer in front of the allocation engine
//!
//! Maps raw ticket text to `{required_skills, priority, business_impact}`.
//! Two interchangeable variants sit behind the [`Classifier`] trait:
//!
//! - [`KeywordClassifier`]: per-skill keyword tables plus urgency
//!   heuristics (the default)
//! - [`SimilarityClassifier`]: bag-of-words cosine similarity against
//!   per-skill template descriptions
//!
//! The variant is selected by configuration, never by inheritance; the
//! engine only ever sees the trait.

pub mod keyword;
pub mod similarity;
mod text;

pub use keyword::KeywordClassifier;
pub use similarity::SimilarityClassifier;

use desk_common::{Priority, Score, SkillTag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Normalizer output for one ticket
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Skill tags extracted from the ticket text
    pub required_skills: BTreeSet<SkillTag>,
    /// Priority label
    pub priority: Priority,
    /// Estimated business impact
    pub business_impact: Score,
}

/// Capability interface for ticket normalizers
pub trait Classifier: Send + Sync {
    /// Classify raw ticket text
    fn classify(&self, subject: &str, description: &str) -> Classification;
}

/// Which classifier variant to build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierKind {
    /// Keyword-rule classifier
    #[default]
    Keyword,
    /// Text-similarity classifier
    Similarity,
}

/// Build the configured classifier variant
pub fn build(kind: ClassifierKind) -> Box<dyn Classifier> {
    match kind {
        ClassifierKind::Keyword => Box::new(KeywordClassifier::new()),
        ClassifierKind::Similarity => Box::new(SimilarityClassifier::new()),
    }
}
