//! Agent suitability scoring with weighted sub-scores

use desk_common::{Agent, DeskResult, EngineConfig, ScoreWeights, Ticket};
use serde::{Deserialize, Serialize};

/// Composite score for one agent-ticket pair
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CompositeScore {
    /// Overall score (0.0 - 1.0)
    pub total: f32,
    /// Skill fit component
    pub skill_match: f32,
    /// Seniority component
    pub experience: f32,
    /// Workload headroom component
    pub workload: f32,
    /// Escalation capability component
    pub priority_capability: f32,
}

impl CompositeScore {
    /// Tie-break ordering for equal totals: higher skill match, then higher
    /// experience, then lower absolute workload. The caller breaks remaining
    /// ties by agent id.
    ///
    /// The workload comparison is over the raw ticket counts, not the
    /// normalized sub-score: equal sub-scores can hide different absolute
    /// loads (2/4 and 1/2 both normalize to 0.5), and the lighter agent
    /// must win.
    pub fn ranks_above(&self, other: &Self, own_load: u32, other_load: u32) -> bool {
        match self.total.total_cmp(&other.total) {
            std::cmp::Ordering::Greater => true,
            std::cmp::Ordering::Less => false,
            std::cmp::Ordering::Equal => {
                match self.skill_match.total_cmp(&other.skill_match) {
                    std::cmp::Ordering::Greater => true,
                    std::cmp::Ordering::Less => false,
                    std::cmp::Ordering::Equal => {
                        match self.experience.total_cmp(&other.experience) {
                            std::cmp::Ordering::Greater => true,
                            std::cmp::Ordering::Less => false,
                            std::cmp::Ordering::Equal => own_load < other_load,
                        }
                    }
                }
            }
        }
    }
}

/// Pure scoring function over agent-ticket pairs.
///
/// Deterministic and side-effect-free: identical inputs always yield the
/// identical score, which is what makes whole runs reproducible.
#[derive(Debug, Clone)]
pub struct AgentScorer {
    weights: ScoreWeights,
}

impl AgentScorer {
    /// Create a scorer from validated configuration
    pub fn new(config: &EngineConfig) -> DeskResult<Self> {
        config.validate()?;
        Ok(Self {
            weights: config.weights,
        })
    }

    /// Score one agent against one ticket.
    ///
    /// Returns `None` when the hard skill-gap rule applies: the ticket
    /// requires skills and the agent holds none of them, making the agent
    /// ineligible regardless of the other sub-scores.
    ///
    /// `escalation_required` reflects the configured policy for the
    /// ticket's priority; `experience_ceiling` is the registry-wide
    /// maximum used to normalize seniority, 0 when relative seniority is
    /// meaningless (fewer than two agents).
    pub fn score(
        &self,
        agent: &Agent,
        ticket: &Ticket,
        escalation_required: bool,
        experience_ceiling: u8,
    ) -> Option<CompositeScore> {
        if !ticket.required_skills.is_empty() && !agent.has_any_skill(&ticket.required_skills) {
            return None;
        }

        let skill_match = Self::skill_match(agent, ticket);
        let experience = Self::experience(agent, experience_ceiling);
        let workload = 1.0 - agent.utilization();
        let priority_capability = if !escalation_required || agent.handles.contains(&ticket.priority)
        {
            1.0
        } else {
            0.0
        };

        let total = self.weights.skill_match * skill_match
            + self.weights.experience * experience
            + self.weights.workload * workload
            + self.weights.priority_capability * priority_capability;

        Some(CompositeScore {
            total,
            skill_match,
            experience,
            workload,
            priority_capability,
        })
    }

    /// Mean proficiency over required skills, normalized to [0, 1].
    /// A ticket with no required skills scores a neutral 0.5.
    fn skill_match(agent: &Agent, ticket: &Ticket) -> f32 {
        if ticket.required_skills.is_empty() {
            return 0.5;
        }
        let sum: u32 = ticket
            .required_skills
            .iter()
            .map(|tag| agent.proficiency(tag) as u32)
            .sum();
        sum as f32 / ticket.required_skills.len() as f32 / 10.0
    }

    /// Seniority against the registry-wide ceiling; falls back to a fixed
    /// /10 scale when the registry reports no ceiling, so a lone agent's
    /// level is not inflated to a perfect 1.0.
    fn experience(agent: &Agent, experience_ceiling: u8) -> f32 {
        let divisor = if experience_ceiling == 0 {
            10.0
        } else {
            experience_ceiling as f32
        };
        (agent.experience_level as f32 / divisor).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use desk_common::{Priority, Proficiency, Score, SkillTag};

    fn scorer() -> AgentScorer {
        AgentScorer::new(&EngineConfig::default()).unwrap()
    }

    fn agent(id: &str, skills: &[(&str, u8)], experience: u8, max: u32, load: u32) -> Agent {
        let mut a = Agent::new(id, id.to_uppercase());
        a.experience_level = experience;
        a.max_concurrent = max;
        a.current_workload = load;
        for (tag, level) in skills {
            a.skills.insert(
                SkillTag::new(*tag).unwrap(),
                Proficiency::new(*level).unwrap(),
            );
        }
        a
    }

    fn ticket(id: &str, skills: &[&str], priority: Priority) -> Ticket {
        let mut t = Ticket::new(id, "subject");
        t.priority = priority;
        t.business_impact = Score::default();
        t.required_skills = skills.iter().map(|s| SkillTag::new(*s).unwrap()).collect();
        t
    }

    #[test]
    fn test_skill_match_average() {
        let a = agent("a1", &[("Networking", 8), ("DNS_Configuration", 4)], 5, 5, 0);
        let t = ticket("t1", &["Networking", "DNS_Configuration"], Priority::Low);
        let s = scorer().score(&a, &t, false, 5).unwrap();
        // (8 + 4) / 2 / 10
        assert!((s.skill_match - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_missing_skill_counts_as_zero() {
        let a = agent("a1", &[("Networking", 10)], 5, 5, 0);
        let t = ticket("t1", &["Networking", "Database_SQL"], Priority::Low);
        let s = scorer().score(&a, &t, false, 5).unwrap();
        // (10 + 0) / 2 / 10
        assert!((s.skill_match - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_no_required_skills_is_neutral() {
        let a = agent("a1", &[], 5, 5, 0);
        let t = ticket("t1", &[], Priority::Low);
        let s = scorer().score(&a, &t, false, 5).unwrap();
        assert!((s.skill_match - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_hard_skill_gap_rule() {
        let a = agent("a1", &[("Printer_Troubleshooting", 10)], 10, 5, 0);
        let t = ticket("t1", &["Quantum"], Priority::Low);
        assert!(scorer().score(&a, &t, false, 10).is_none());
    }

    #[test]
    fn test_experience_normalized_to_global_max() {
        let a = agent("a1", &[], 4, 5, 0);
        let t = ticket("t1", &[], Priority::Low);
        let s = scorer().score(&a, &t, false, 8).unwrap();
        assert!((s.experience - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_experience_fallback_scale() {
        let a = agent("a1", &[], 4, 5, 0);
        let t = ticket("t1", &[], Priority::Low);
        let s = scorer().score(&a, &t, false, 0).unwrap();
        assert!((s.experience - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_workload_headroom() {
        let a = agent("a1", &[], 5, 4, 1);
        let t = ticket("t1", &[], Priority::Low);
        let s = scorer().score(&a, &t, false, 5).unwrap();
        assert!((s.workload - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_priority_capability() {
        let mut capable = agent("a1", &[], 9, 5, 0);
        capable.handles.insert(Priority::Critical);
        let incapable = agent("a2", &[], 9, 5, 0);
        let t = ticket("t1", &[], Priority::Critical);

        let sc = scorer().score(&capable, &t, true, 9).unwrap();
        let si = scorer().score(&incapable, &t, true, 9).unwrap();
        assert_eq!(sc.priority_capability, 1.0);
        assert_eq!(si.priority_capability, 0.0);

        // LOW/MEDIUM are implicitly handled by everyone
        let low = ticket("t2", &[], Priority::Low);
        let sl = scorer().score(&incapable, &low, false, 9).unwrap();
        assert_eq!(sl.priority_capability, 1.0);
    }

    #[test]
    fn test_weighted_total() {
        let a = agent("a1", &[("Networking", 10)], 10, 5, 0);
        let t = ticket("t1", &["Networking"], Priority::Low);
        let s = scorer().score(&a, &t, false, 10).unwrap();
        // 0.4*1.0 + 0.2*1.0 + 0.2*1.0 + 0.2*1.0
        assert!((s.total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_determinism() {
        let a = agent("a1", &[("Networking", 7)], 6, 5, 2);
        let t = ticket("t1", &["Networking"], Priority::High);
        let s1 = scorer().score(&a, &t, true, 9).unwrap();
        let s2 = scorer().score(&a, &t, true, 9).unwrap();
        assert_eq!(s1.total, s2.total);
        assert_eq!(s1.skill_match, s2.skill_match);
    }

    #[test]
    fn test_tie_break_ordering() {
        let high_skill = CompositeScore {
            total: 0.8,
            skill_match: 0.9,
            experience: 0.5,
            workload: 0.5,
            priority_capability: 1.0,
        };
        let low_skill = CompositeScore {
            skill_match: 0.7,
            ..high_skill
        };
        assert!(high_skill.ranks_above(&low_skill, 0, 0));
        assert!(!low_skill.ranks_above(&high_skill, 0, 0));

        let senior = CompositeScore {
            experience: 0.8,
            ..low_skill
        };
        assert!(senior.ranks_above(&low_skill, 0, 0));
    }

    #[test]
    fn test_tie_break_lower_absolute_workload() {
        // Identical sub-scores; only the raw ticket counts differ. The
        // lighter agent ranks above, and equal counts defer to the caller.
        let s = CompositeScore {
            total: 0.8,
            skill_match: 0.5,
            experience: 1.0,
            workload: 0.5,
            priority_capability: 1.0,
        };
        assert!(s.ranks_above(&s, 1, 2));
        assert!(!s.ranks_above(&s, 2, 1));
        assert!(!s.ranks_above(&s, 2, 2));
    }

    #[test]
    fn test_invalid_weights_rejected() {
        let cfg = EngineConfig {
            weights: ScoreWeights {
                skill_match: 0.9,
                experience: 0.9,
                workload: 0.0,
                priority_capability: 0.0,
            },
            ..Default::default()
        };
        assert!(AgentScorer::new(&cfg).is_err());
    }

    #[test]
    fn test_strong_idle_agent_beats_weak_loaded_agent() {
        // a1 (skill 9, idle) must beat a2 (skill 3, nearly full) for a
        // HIGH Networking ticket.
        let mut a1 = agent("a1", &[("Networking", 9)], 5, 5, 0);
        a1.handles.insert(Priority::High);
        let mut a2 = agent("a2", &[("Networking", 3)], 5, 5, 4);
        a2.handles.insert(Priority::High);
        let t = ticket("t1", &["Networking"], Priority::High);

        let s1 = scorer().score(&a1, &t, true, 5).unwrap();
        let s2 = scorer().score(&a2, &t, true, 5).unwrap();
        assert!((s1.skill_match - 0.9).abs() < 1e-6);
        assert!((s1.workload - 1.0).abs() < 1e-6);
        assert!(s1.ranks_above(&s2, 0, 4));
    }
}
