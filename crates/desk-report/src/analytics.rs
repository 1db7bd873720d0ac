//! Aggregate statistics over a completed run

use desk_assign::AllocationOutcome;
use desk_common::{Agent, Priority, Ticket};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Run-level totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Tickets in the batch
    pub total_tickets: usize,
    /// Agents in the registry
    pub total_agents: usize,
    /// Tickets committed to an agent
    pub assigned_tickets: usize,
    /// Unassignable tickets
    pub unassigned_tickets: usize,
}

/// Post-run load for one agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentWorkload {
    /// Agent id
    pub agent_id: String,
    /// Display name
    pub name: String,
    /// Tickets held after the run
    pub tickets_assigned: u32,
    /// Capacity
    pub max_concurrent: u32,
    /// Percentage of capacity in use
    pub utilization_pct: f32,
}

/// Demand counter for one skill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillDemand {
    /// Skill tag
    pub skill: String,
    /// Number of tickets requesting it
    pub tickets: usize,
}

/// Aggregate analytics for one allocation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analytics {
    /// Run-level totals
    pub summary: RunSummary,
    /// Assignment counts per priority level
    pub priority_distribution: BTreeMap<Priority, usize>,
    /// Mean composite score over assigned tickets
    pub average_score: f32,
    /// Post-run load per agent, id-sorted
    pub agent_workload: Vec<AgentWorkload>,
    /// Skills requested across the batch, most-demanded first
    pub skill_demand: Vec<SkillDemand>,
    /// Skills no agent possesses, ranked by how often tickets asked for
    /// them
    pub missing_skills: Vec<SkillDemand>,
    /// Staffing recommendations derived from the above
    pub recommendations: Vec<String>,
}

/// Utilization above which an agent counts as overloaded
const OVERLOAD_PCT: f32 = 80.0;

impl Analytics {
    /// Derive analytics from a completed run.
    ///
    /// `agents` is the post-run registry snapshot; `tickets` is the
    /// original input batch.
    pub fn from_run(outcome: &AllocationOutcome, agents: &[Agent], tickets: &[Ticket]) -> Self {
        let summary = RunSummary {
            total_tickets: tickets.len(),
            total_agents: agents.len(),
            assigned_tickets: outcome.assigned_count(),
            unassigned_tickets: outcome.unassigned_count(),
        };

        let mut priority_distribution = BTreeMap::new();
        for assignment in &outcome.assignments {
            *priority_distribution.entry(assignment.priority).or_insert(0) += 1;
        }

        let assigned_scores: Vec<f32> = outcome
            .assignments
            .iter()
            .filter(|a| a.agent_id.is_some())
            .map(|a| a.total_score)
            .collect();
        let average_score = if assigned_scores.is_empty() {
            0.0
        } else {
            assigned_scores.iter().sum::<f32>() / assigned_scores.len() as f32
        };

        let agent_workload: Vec<AgentWorkload> = agents
            .iter()
            .map(|a| AgentWorkload {
                agent_id: a.id.clone(),
                name: a.name.clone(),
                tickets_assigned: a.current_workload,
                max_concurrent: a.max_concurrent,
                utilization_pct: a.utilization() * 100.0,
            })
            .collect();

        let skill_demand = ranked_counts(
            tickets
                .iter()
                .flat_map(|t| t.required_skills.iter().map(|s| s.as_str())),
        );
        let missing_skills = ranked_counts(
            outcome
                .skill_gaps
                .iter()
                .flat_map(|g| g.missing_skills.iter().map(|s| s.as_str())),
        );

        let recommendations =
            build_recommendations(&summary, &missing_skills, &agent_workload);

        Self {
            summary,
            priority_distribution,
            average_score,
            agent_workload,
            skill_demand,
            missing_skills,
            recommendations,
        }
    }
}

/// Count occurrences and rank by (count desc, name asc)
fn ranked_counts<'a>(items: impl Iterator<Item = &'a str>) -> Vec<SkillDemand> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    let mut ranked: Vec<SkillDemand> = counts
        .into_iter()
        .map(|(skill, tickets)| SkillDemand {
            skill: skill.to_string(),
            tickets,
        })
        .collect();
    ranked.sort_by(|a, b| b.tickets.cmp(&a.tickets).then_with(|| a.skill.cmp(&b.skill)));
    ranked
}

fn build_recommendations(
    summary: &RunSummary,
    missing_skills: &[SkillDemand],
    workload: &[AgentWorkload],
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if summary.unassigned_tickets > 0 {
        recommendations.push(format!(
            "{} tickets remain unassigned - consider hiring or training additional agents",
            summary.unassigned_tickets
        ));
    }

    if let Some(top) = missing_skills.first() {
        recommendations.push(format!(
            "Critical skill gap: {} - requested by {} unassignable ticket(s) but held by no agent",
            top.skill, top.tickets
        ));
    }

    let overloaded: Vec<&str> = workload
        .iter()
        .filter(|w| w.utilization_pct > OVERLOAD_PCT)
        .map(|w| w.name.as_str())
        .collect();
    if !overloaded.is_empty() {
        recommendations.push(format!(
            "{} agent(s) above {OVERLOAD_PCT:.0}% capacity: {}",
            overloaded.len(),
            overloaded.join(", ")
        ));
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use desk_assign::{AgentRegistry, AllocationEngine};
    use desk_common::{EngineConfig, Proficiency, Score, SkillTag};

    fn run_fixture() -> (AllocationOutcome, Vec<Agent>, Vec<Ticket>) {
        let mut a1 = Agent::new("a1", "Alice");
        a1.experience_level = 8;
        a1.max_concurrent = 2;
        a1.handles.insert(Priority::High);
        a1.skills.insert(
            SkillTag::new("Networking").unwrap(),
            Proficiency::new(9).unwrap(),
        );

        let mut t1 = Ticket::new("t1", "vpn down");
        t1.priority = Priority::High;
        t1.business_impact = Score::clamped(0.9);
        t1.required_skills = [SkillTag::new("Networking").unwrap()].into_iter().collect();

        let mut t2 = Ticket::new("t2", "quantum rig");
        t2.priority = Priority::Low;
        t2.required_skills = [SkillTag::new("Quantum").unwrap()].into_iter().collect();

        let tickets = vec![t1, t2];
        let engine =
            AllocationEngine::new(AgentRegistry::new(vec![a1]).unwrap(), EngineConfig::default())
                .unwrap();
        let outcome = engine.run(&tickets).unwrap();
        let agents = engine.registry().snapshot();
        (outcome, agents, tickets)
    }

    #[test]
    fn test_summary_counts() {
        let (outcome, agents, tickets) = run_fixture();
        let analytics = Analytics::from_run(&outcome, &agents, &tickets);
        assert_eq!(analytics.summary.total_tickets, 2);
        assert_eq!(analytics.summary.assigned_tickets, 1);
        assert_eq!(analytics.summary.unassigned_tickets, 1);
    }

    #[test]
    fn test_priority_distribution() {
        let (outcome, agents, tickets) = run_fixture();
        let analytics = Analytics::from_run(&outcome, &agents, &tickets);
        assert_eq!(analytics.priority_distribution[&Priority::High], 1);
        assert_eq!(analytics.priority_distribution[&Priority::Low], 1);
    }

    #[test]
    fn test_missing_skill_ranked() {
        let (outcome, agents, tickets) = run_fixture();
        let analytics = Analytics::from_run(&outcome, &agents, &tickets);
        assert_eq!(analytics.missing_skills.len(), 1);
        assert_eq!(analytics.missing_skills[0].skill, "Quantum");
        assert_eq!(analytics.missing_skills[0].tickets, 1);
    }

    #[test]
    fn test_recommendations_mention_gap() {
        let (outcome, agents, tickets) = run_fixture();
        let analytics = Analytics::from_run(&outcome, &agents, &tickets);
        assert!(analytics
            .recommendations
            .iter()
            .any(|r| r.contains("unassigned")));
        assert!(analytics
            .recommendations
            .iter()
            .any(|r| r.contains("Quantum")));
    }

    #[test]
    fn test_agent_workload_utilization() {
        let (outcome, agents, tickets) = run_fixture();
        let analytics = Analytics::from_run(&outcome, &agents, &tickets);
        let alice = &analytics.agent_workload[0];
        assert_eq!(alice.tickets_assigned, 1);
        assert!((alice.utilization_pct - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_ranked_counts_orders_by_demand() {
        let ranked = ranked_counts(["a", "b", "b", "c", "b", "c"].into_iter());
        assert_eq!(ranked[0].skill, "b");
        assert_eq!(ranked[0].tickets, 3);
        assert_eq!(ranked[1].skill, "c");
        assert_eq!(ranked[2].skill, "a");
    }
}
