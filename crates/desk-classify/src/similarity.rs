//! Text-similarity classifier

use crate::text;
use crate::{Classification, Classifier};
use desk_common::SkillTag;
use std::collections::HashMap;
use tracing::debug;

/// Template description per skill; the ticket text is compared against
/// each and skills above the similarity threshold become required.
const SKILL_TEMPLATES: &[(&str, &str)] = &[
    (
        "Networking",
        "network connectivity vpn connection router switch firewall configuration",
    ),
    (
        "Database_SQL",
        "database sql query performance optimization table index backup restore",
    ),
    (
        "Cloud_AWS",
        "aws cloud ec2 s3 lambda serverless infrastructure deployment",
    ),
    (
        "Network_Security",
        "security breach attack malware virus phishing authentication encryption",
    ),
    (
        "Hardware_Diagnostics",
        "hardware laptop desktop computer fan battery power boot bios",
    ),
    (
        "Windows_OS",
        "windows operating system registry driver update patch installation",
    ),
    (
        "Linux_Administration",
        "linux ubuntu debian centos bash shell script permissions",
    ),
    (
        "Microsoft_365",
        "microsoft office outlook teams sharepoint onedrive email calendar",
    ),
];

/// Minimum cosine similarity for a skill to be considered required
const MIN_SIMILARITY: f32 = 0.1;

/// Maximum number of skills attached to one ticket
const TOP_N: usize = 5;

/// Bag-of-words cosine-similarity classifier.
///
/// The interchangeable second variant behind the classifier seam: instead
/// of exact keyword hits it measures how close the ticket text is to a
/// per-skill template description, which tolerates paraphrasing.
#[derive(Debug)]
pub struct SimilarityClassifier {
    templates: Vec<(SkillTag, HashMap<String, f32>)>,
}

impl SimilarityClassifier {
    /// Build the classifier with its template vectors
    pub fn new() -> Self {
        let templates = SKILL_TEMPLATES
            .iter()
            .filter_map(|(skill, description)| {
                SkillTag::new(*skill)
                    .ok()
                    .map(|tag| (tag, term_counts(description)))
            })
            .collect();
        Self { templates }
    }
}

impl Default for SimilarityClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for SimilarityClassifier {
    fn classify(&self, subject: &str, description: &str) -> Classification {
        let combined = text::combined(subject, description);
        let ticket_vector = term_counts(&combined);

        let mut scored: Vec<(&SkillTag, f32)> = self
            .templates
            .iter()
            .map(|(tag, template)| (tag, cosine(&ticket_vector, template)))
            .filter(|(_, sim)| *sim > MIN_SIMILARITY)
            .collect();
        // Similarity descending, tag ascending so equal scores rank stably
        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        let required_skills = scored
            .into_iter()
            .take(TOP_N)
            .map(|(tag, _)| tag.clone())
            .collect();

        let classification = Classification {
            required_skills,
            priority: text::priority(&combined),
            business_impact: text::business_impact(&combined),
        };
        debug!(
            skills = classification.required_skills.len(),
            priority = %classification.priority,
            "similarity classification"
        );
        classification
    }
}

fn term_counts(text: &str) -> HashMap<String, f32> {
    let mut counts = HashMap::new();
    for token in text::tokenize(text) {
        *counts.entry(token).or_insert(0.0) += 1.0;
    }
    counts
}

fn cosine(a: &HashMap<String, f32>, b: &HashMap<String, f32>) -> f32 {
    let dot: f32 = a
        .iter()
        .filter_map(|(term, weight)| b.get(term).map(|other| weight * other))
        .sum();
    if dot == 0.0 {
        return 0.0;
    }
    let norm_a: f32 = a.values().map(|w| w * w).sum::<f32>().sqrt();
    let norm_b: f32 = b.values().map(|w| w * w).sum::<f32>().sqrt();
    dot / (norm_a * norm_b)
}
