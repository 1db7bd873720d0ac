//! Executive text summary

use crate::analytics::Analytics;
use desk_common::Priority;
use std::fmt::Write;

/// Render the run analytics as a plain-text executive summary.
///
/// Pure formatting; the console is the CLI's business.
pub fn summary_report(analytics: &Analytics) -> String {
    let mut out = String::new();
    let rule = "=".repeat(60);

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "TICKET ASSIGNMENT SUMMARY");
    let _ = writeln!(out, "{rule}");

    let s = &analytics.summary;
    let success_rate = if s.total_tickets > 0 {
        s.assigned_tickets as f32 / s.total_tickets as f32 * 100.0
    } else {
        0.0
    };
    let _ = writeln!(out, "Total Tickets:        {}", s.total_tickets);
    let _ = writeln!(out, "Total Agents:         {}", s.total_agents);
    let _ = writeln!(
        out,
        "Successfully Assigned: {} ({success_rate:.1}%)",
        s.assigned_tickets
    );
    let _ = writeln!(out, "Unassigned:           {}", s.unassigned_tickets);
    let _ = writeln!(out, "Average Match Score:  {:.2}", analytics.average_score);

    let _ = writeln!(out, "\nPRIORITY DISTRIBUTION:");
    for priority in Priority::ALL {
        let count = analytics
            .priority_distribution
            .get(&priority)
            .copied()
            .unwrap_or(0);
        let _ = writeln!(out, "  {priority}: {count}");
    }

    let _ = writeln!(out, "\nAGENT UTILIZATION:");
    for w in &analytics.agent_workload {
        let _ = writeln!(
            out,
            "  {} ({}): {}/{} tickets ({:.1}%)",
            w.name, w.agent_id, w.tickets_assigned, w.max_concurrent, w.utilization_pct
        );
    }

    if !analytics.recommendations.is_empty() {
        let _ = writeln!(out, "\nRECOMMENDATIONS:");
        for rec in &analytics.recommendations {
            let _ = writeln!(out, "  - {rec}");
        }
    }

    let _ = writeln!(out, "{rule}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{AgentWorkload, RunSummary, SkillDemand};
    use std::collections::BTreeMap;

    fn analytics_fixture() -> Analytics {
        Analytics {
            summary: RunSummary {
                total_tickets: 4,
                total_agents: 2,
                assigned_tickets: 3,
                unassigned_tickets: 1,
            },
            priority_distribution: BTreeMap::from([
                (Priority::Critical, 1),
                (Priority::Medium, 3),
            ]),
            average_score: 0.72,
            agent_workload: vec![AgentWorkload {
                agent_id: "a1".into(),
                name: "Alice".into(),
                tickets_assigned: 3,
                max_concurrent: 5,
                utilization_pct: 60.0,
            }],
            skill_demand: vec![],
            missing_skills: vec![SkillDemand {
                skill: "Quantum".into(),
                tickets: 1,
            }],
            recommendations: vec!["hire a quantum plumber".into()],
        }
    }

    #[test]
    fn test_summary_contains_key_metrics() {
        let report = summary_report(&analytics_fixture());
        assert!(report.contains("Total Tickets:        4"));
        assert!(report.contains("75.0%"));
        assert!(report.contains("CRITICAL: 1"));
        assert!(report.contains("Alice (a1): 3/5"));
        assert!(report.contains("hire a quantum plumber"));
    }

    #[test]
    fn test_empty_run_no_divide_by_zero() {
        let mut analytics = analytics_fixture();
        analytics.summary.total_tickets = 0;
        analytics.summary.assigned_tickets = 0;
        let report = summary_report(&analytics);
        assert!(report.contains("(0.0%)"));
    }
}
