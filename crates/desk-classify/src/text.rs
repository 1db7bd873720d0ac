//! Shared text heuristics for the classifier variants

use desk_common::{Priority, Score};

/// Keywords that push a ticket toward CRITICAL
pub(crate) const CRITICAL_KEYWORDS: &[&str] = &[
    "critical",
    "urgent",
    "down",
    "outage",
    "security",
    "breach",
    "attack",
    "production",
    "business-critical",
];

/// Keywords that push a ticket toward HIGH
pub(crate) const HIGH_KEYWORDS: &[&str] = &[
    "failing", "error", "unable", "blocked", "stopped",
];

const SECURITY_KEYWORDS: &[&str] = &[
    "breach",
    "attack",
    "phishing",
    "malware",
    "virus",
    "unauthorized",
    "suspicious",
    "security",
];

/// Lowercased subject + description, the text every heuristic runs over
pub(crate) fn combined(subject: &str, description: &str) -> String {
    format!("{} {}", subject.to_lowercase(), description.to_lowercase())
}

/// Lowercase word tokens, alphanumerics only
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn count_hits(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| text.contains(**k)).count()
}

/// Business impact tiers: production outages outrank customer-facing
/// issues, which outrank internal ones.
pub(crate) fn business_impact(text: &str) -> Score {
    if text.contains("production") || text.contains("business-critical") {
        Score::perfect()
    } else if text.contains("public") || text.contains("customer") {
        Score::clamped(0.8)
    } else if text.contains("internal") || text.contains("employee") {
        Score::clamped(0.5)
    } else {
        Score::clamped(0.3)
    }
}

/// Rough blast radius from scope words
fn affected_users(text: &str) -> u32 {
    if text.contains("all") || text.contains("everyone") || text.contains("company") {
        100
    } else if text.contains("department") || text.contains("team") || text.contains("multiple") {
        20
    } else if text.contains("group") {
        10
    } else {
        1
    }
}

fn security_risk(text: &str) -> f32 {
    count_hits(text, SECURITY_KEYWORDS) as f32 / SECURITY_KEYWORDS.len() as f32
}

/// Priority label from the weighted urgency score.
///
/// Deliberately ignores ticket age: a wall-clock term would make two runs
/// over the same batch disagree.
pub(crate) fn priority(text: &str) -> Priority {
    let urgency = count_hits(text, CRITICAL_KEYWORDS) as f32 * 10.0
        + count_hits(text, HIGH_KEYWORDS) as f32 * 5.0
        + business_impact(text).value() * 8.0
        + affected_users(text) as f32 / 10.0
        + security_risk(text) * 9.0;

    if urgency >= 20.0 {
        Priority::Critical
    } else if urgency >= 15.0 {
        Priority::High
    } else if urgency >= 10.0 {
        Priority::Medium
    } else {
        Priority::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("VPN tunnel: dropping!"),
            vec!["vpn", "tunnel", "dropping"]
        );
    }

    #[test]
    fn test_business_impact_tiers() {
        assert_eq!(business_impact("production database").value(), 1.0);
        assert_eq!(business_impact("customer portal slow").value(), 0.8);
        assert_eq!(business_impact("internal wiki typo").value(), 0.5);
        assert_eq!(business_impact("misc question").value(), 0.3);
    }

    #[test]
    fn test_priority_escalates_with_urgency() {
        let calm = priority("how do i change my wallpaper");
        let dire = priority("critical production outage, security breach, all users down");
        assert_eq!(calm, Priority::Low);
        assert_eq!(dire, Priority::Critical);
        assert!(dire > calm);
    }

    #[test]
    fn test_priority_is_deterministic() {
        let text = "error: team unable to login, internal tool failing";
        assert_eq!(priority(text), priority(text));
    }
}
