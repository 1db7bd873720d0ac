//! Allocation engine - orders the batch, selects agents, commits workload
//!
//! The run is strictly sequential: each commit changes the workload
//! sub-score observed by every subsequent ticket, so no two tickets may be
//! scored against the same agent's workload snapshot once one of them has
//! committed. The registry serializes the counter updates; this loop
//! provides the ordering.

use crate::rationale;
use crate::registry::AgentRegistry;
use crate::scorer::{AgentScorer, CompositeScore};
use crate::{Assignment, SkillGap};
use desk_common::{Agent, DeskError, DeskResult, EngineConfig, Ticket};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{info, warn};

/// Result of one batch allocation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationOutcome {
    /// One record per input ticket, in original input order
    pub assignments: Vec<Assignment>,
    /// Tickets no agent was eligible for, in processing order
    pub skill_gaps: Vec<SkillGap>,
}

impl AllocationOutcome {
    /// Number of tickets committed to an agent
    pub fn assigned_count(&self) -> usize {
        self.assignments.iter().filter(|a| a.agent_id.is_some()).count()
    }

    /// Number of unassignable tickets
    pub fn unassigned_count(&self) -> usize {
        self.assignments.len() - self.assigned_count()
    }
}

/// Batch allocation engine.
///
/// Owns the run context: the registry, the scorer and the escalation
/// policy. One engine produces one deterministic batch allocation per
/// `run` call; it never re-balances or reassigns.
pub struct AllocationEngine {
    registry: AgentRegistry,
    scorer: AgentScorer,
    config: EngineConfig,
}

impl AllocationEngine {
    /// Create an engine over a validated registry. Configuration problems
    /// (weights not summing to 1.0) surface here, before any assignment
    /// work begins.
    pub fn new(registry: AgentRegistry, config: EngineConfig) -> DeskResult<Self> {
        config.validate()?;
        let scorer = AgentScorer::new(&config)?;
        Ok(Self {
            registry,
            scorer,
            config,
        })
    }

    /// The registry with post-run workload counters
    pub fn registry(&self) -> &AgentRegistry {
        &self.registry
    }

    /// Allocate a batch of tickets.
    ///
    /// Tickets are processed by (priority desc, business impact desc,
    /// input order asc); assignments are returned in the original input
    /// order, each retaining its position in the processing sequence.
    ///
    /// A ticket with no eligible agent degrades to a [`SkillGap`] record
    /// and never stops the batch. A `CapacityExceeded` from the registry
    /// aborts the run: it means the eligibility filter was bypassed.
    pub fn run(&self, tickets: &[Ticket]) -> DeskResult<AllocationOutcome> {
        let mut seen = BTreeSet::new();
        for ticket in tickets {
            ticket.validate()?;
            if !seen.insert(ticket.id.as_str()) {
                return Err(DeskError::DuplicateTicket(ticket.id.clone()));
            }
        }

        let order = Self::processing_order(tickets);
        let known_skills = self.registry.union_skills();

        let mut assignments: Vec<Option<Assignment>> = vec![None; tickets.len()];
        let mut skill_gaps = Vec::new();

        for (processed_order, &idx) in order.iter().enumerate() {
            let ticket = &tickets[idx];
            let escalation = self.config.requires_escalation(ticket.priority);
            let experience_ceiling = self.registry.experience_ceiling();

            let mut best: Option<(Agent, CompositeScore)> = None;
            // Candidates arrive id-ascending; replacing only on a strict
            // rank improvement makes the lowest id win remaining ties.
            for agent in self.registry.list_available(ticket.priority, escalation) {
                if let Some(score) =
                    self.scorer.score(&agent, ticket, escalation, experience_ceiling)
                {
                    let better = match &best {
                        None => true,
                        Some((leader, current)) => score.ranks_above(
                            current,
                            agent.current_workload,
                            leader.current_workload,
                        ),
                    };
                    if better {
                        best = Some((agent, score));
                    }
                }
            }

            let assignment = match best {
                Some((agent, score)) => {
                    self.registry.commit(&agent.id, &ticket.id)?;
                    info!(
                        ticket = %ticket.id,
                        agent = %agent.id,
                        score = score.total,
                        priority = %ticket.priority,
                        "assigned"
                    );
                    Assignment {
                        ticket_id: ticket.id.clone(),
                        agent_id: Some(agent.id.clone()),
                        agent_name: Some(agent.name.clone()),
                        priority: ticket.priority,
                        total_score: score.total,
                        breakdown: Some(score),
                        rationale: rationale::assigned(&agent, ticket, &score),
                        processed_order,
                    }
                }
                None => {
                    let missing: BTreeSet<_> = ticket
                        .required_skills
                        .difference(&known_skills)
                        .cloned()
                        .collect();
                    warn!(
                        ticket = %ticket.id,
                        priority = %ticket.priority,
                        missing = missing.len(),
                        "no eligible agent"
                    );
                    skill_gaps.push(SkillGap {
                        ticket_id: ticket.id.clone(),
                        missing_skills: missing,
                    });
                    Assignment {
                        ticket_id: ticket.id.clone(),
                        agent_id: None,
                        agent_name: None,
                        priority: ticket.priority,
                        total_score: 0.0,
                        breakdown: None,
                        rationale: rationale::unassigned(ticket),
                        processed_order,
                    }
                }
            };
            assignments[idx] = Some(assignment);
        }

        Ok(AllocationOutcome {
            assignments: assignments.into_iter().flatten().collect(),
            skill_gaps,
        })
    }

    /// Ticket indices by (priority desc, business impact desc, input order
    /// asc). The final tie-break on input order makes the sequence exact.
    fn processing_order(tickets: &[Ticket]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..tickets.len()).collect();
        order.sort_by(|&a, &b| {
            tickets[b]
                .priority
                .cmp(&tickets[a].priority)
                .then_with(|| {
                    tickets[b]
                        .business_impact
                        .value()
                        .total_cmp(&tickets[a].business_impact.value())
                })
                .then_with(|| a.cmp(&b))
        });
        order
    }
}
