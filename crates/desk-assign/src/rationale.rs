//! Rationale builder - pure formatting of allocation decisions
//!
//! No side effects, no mutation: given the winning agent, the ticket and
//! the composite score, produce the one-line explanation stored on the
//! assignment record.

use crate::scorer::CompositeScore;
use desk_common::{Agent, Ticket};

/// Explanation line for a committed assignment.
///
/// Names the top matched skills with their proficiencies, a seniority
/// phrase, a workload phrase when the agent has headroom, and the
/// escalation capability for HIGH/CRITICAL tickets, ending with the
/// numeric match score.
pub fn assigned(agent: &Agent, ticket: &Ticket, score: &CompositeScore) -> String {
    let mut parts: Vec<String> = Vec::new();

    let mut matched: Vec<(&str, u8)> = ticket
        .required_skills
        .iter()
        .filter_map(|tag| {
            let level = agent.proficiency(tag);
            (level > 0).then_some((tag.as_str(), level))
        })
        .collect();
    matched.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    if !matched.is_empty() {
        let details: Vec<String> = matched
            .iter()
            .take(3)
            .map(|(tag, level)| format!("{tag} ({level})"))
            .collect();
        parts.push(format!("strong skills in {}", details.join(", ")));
    }

    parts.push(seniority_phrase(agent.experience_level).to_string());

    if agent.current_workload <= 2 {
        parts.push("optimal workload capacity".to_string());
    } else if agent.current_workload <= 4 {
        parts.push("balanced workload".to_string());
    }

    if ticket.priority.requires_escalation() {
        parts.push(format!("capable of handling {} priority", ticket.priority));
    }

    format!(
        "Assigned to {} ({}) - {}. Match score: {:.2}, Priority: {}",
        agent.name,
        agent.id,
        parts.join(", "),
        score.total,
        ticket.priority
    )
}

/// Explanation line for an unassignable ticket
pub fn unassigned(ticket: &Ticket) -> String {
    format!(
        "No suitable agent available for {} priority ticket - requires escalation or additional resources",
        ticket.priority
    )
}

fn seniority_phrase(experience_level: u8) -> &'static str {
    match experience_level {
        10.. => "senior expert level",
        7..=9 => "experienced professional",
        4..=6 => "competent handler",
        _ => "developing expertise",
    }
}
