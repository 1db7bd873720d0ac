//! Agent registry - exclusive owner of workload counters

use dashmap::DashMap;
use desk_common::{Agent, DeskError, DeskResult, Priority, SkillTag};
use std::collections::BTreeSet;
use tracing::debug;

/// Holds all agent records and is the single mutation point for
/// `current_workload`. The engine never read-modifies-writes a counter
/// directly; it goes through [`AgentRegistry::commit`], which serializes
/// updates per agent via the map's shard locks.
pub struct AgentRegistry {
    agents: DashMap<String, Agent>,
}

impl AgentRegistry {
    /// Build a registry from validated-at-the-boundary agent records.
    ///
    /// Rejects duplicate ids and malformed records before any assignment
    /// work begins.
    pub fn new(agents: Vec<Agent>) -> DeskResult<Self> {
        let map = DashMap::with_capacity(agents.len());
        for agent in agents {
            agent.validate()?;
            if map.contains_key(&agent.id) {
                return Err(DeskError::DuplicateAgent(agent.id));
            }
            map.insert(agent.id.clone(), agent);
        }
        Ok(Self { agents: map })
    }

    /// Number of registered agents
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Agents with spare capacity, filtered to escalation-capable agents
    /// when the priority requires it. Sorted by agent id: DashMap iteration
    /// order is not stable, and the engine's tie-breaks assume a
    /// deterministic sequence.
    pub fn list_available(&self, priority: Priority, escalation_required: bool) -> Vec<Agent> {
        let mut available: Vec<Agent> = self
            .agents
            .iter()
            .filter(|entry| {
                let a = entry.value();
                a.has_capacity() && (!escalation_required || a.handles.contains(&priority))
            })
            .map(|entry| entry.value().clone())
            .collect();
        available.sort_by(|a, b| a.id.cmp(&b.id));
        available
    }

    /// Increment the agent's workload by one.
    ///
    /// `CapacityExceeded` here is an internal-invariant violation: the
    /// availability filter should have excluded the agent. It is still
    /// guarded because scoring and commit are separated in time.
    pub fn commit(&self, agent_id: &str, ticket_id: &str) -> DeskResult<()> {
        let mut entry = self
            .agents
            .get_mut(agent_id)
            .ok_or_else(|| DeskError::AgentNotFound(agent_id.to_string()))?;

        if !entry.has_capacity() {
            return Err(DeskError::CapacityExceeded {
                agent_id: agent_id.to_string(),
            });
        }
        entry.current_workload += 1;
        debug!(
            agent = agent_id,
            ticket = ticket_id,
            load = entry.current_workload,
            max = entry.max_concurrent,
            "committed ticket"
        );
        Ok(())
    }

    /// Read-only snapshot of every agent, sorted by id
    pub fn snapshot(&self) -> Vec<Agent> {
        let mut all: Vec<Agent> = self.agents.iter().map(|e| e.value().clone()).collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    /// Union of every agent's skill tags, for missing-skill computation
    pub fn union_skills(&self) -> BTreeSet<SkillTag> {
        self.agents
            .iter()
            .flat_map(|e| e.value().skills.keys().cloned().collect::<Vec<_>>())
            .collect()
    }

    /// Ceiling for normalizing the experience sub-score: the highest
    /// experience level across agents. Reports 0 when fewer than two
    /// agents are registered; relative seniority is meaningless there and
    /// the scorer falls back to its fixed /10 scale.
    pub fn experience_ceiling(&self) -> u8 {
        if self.agents.len() < 2 {
            return 0;
        }
        self.agents
            .iter()
            .map(|e| e.value().experience_level)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use desk_common::Proficiency;

    fn agent(id: &str, max: u32, load: u32) -> Agent {
        let mut a = Agent::new(id, id.to_uppercase());
        a.experience_level = 5;
        a.max_concurrent = max;
        a.current_workload = load;
        a
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = AgentRegistry::new(vec![agent("a1", 5, 0), agent("a1", 3, 0)]);
        assert!(matches!(result, Err(DeskError::DuplicateAgent(_))));
    }

    #[test]
    fn test_list_available_filters_capacity() {
        let reg = AgentRegistry::new(vec![agent("a1", 5, 5), agent("a2", 5, 4)]).unwrap();
        let available = reg.list_available(Priority::Low, false);
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id, "a2");
    }

    #[test]
    fn test_list_available_escalation_filter() {
        let mut senior = agent("a1", 5, 0);
        senior.handles.insert(Priority::Critical);
        let junior = agent("a2", 5, 0);
        let reg = AgentRegistry::new(vec![senior, junior]).unwrap();

        let critical = reg.list_available(Priority::Critical, true);
        assert_eq!(critical.len(), 1);
        assert_eq!(critical[0].id, "a1");

        // Without escalation everyone with capacity qualifies
        let low = reg.list_available(Priority::Low, false);
        assert_eq!(low.len(), 2);
    }

    #[test]
    fn test_list_available_sorted_by_id() {
        let reg =
            AgentRegistry::new(vec![agent("zed", 5, 0), agent("ann", 5, 0), agent("mia", 5, 0)])
                .unwrap();
        let ids: Vec<_> = reg
            .list_available(Priority::Low, false)
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec!["ann", "mia", "zed"]);
    }

    #[test]
    fn test_commit_increments() {
        let reg = AgentRegistry::new(vec![agent("a1", 2, 0)]).unwrap();
        reg.commit("a1", "t1").unwrap();
        assert_eq!(reg.snapshot()[0].current_workload, 1);
    }

    #[test]
    fn test_commit_at_capacity_fails() {
        let reg = AgentRegistry::new(vec![agent("a1", 1, 0)]).unwrap();
        reg.commit("a1", "t1").unwrap();
        let err = reg.commit("a1", "t2").unwrap_err();
        assert!(matches!(err, DeskError::CapacityExceeded { .. }));
    }

    #[test]
    fn test_commit_unknown_agent_fails() {
        let reg = AgentRegistry::new(vec![agent("a1", 1, 0)]).unwrap();
        assert!(matches!(
            reg.commit("ghost", "t1"),
            Err(DeskError::AgentNotFound(_))
        ));
    }

    #[test]
    fn test_experience_ceiling_needs_two_agents() {
        let reg = AgentRegistry::new(vec![agent("a1", 5, 0)]).unwrap();
        assert_eq!(reg.experience_ceiling(), 0);
    }

    #[test]
    fn test_union_skills_and_experience_ceiling() {
        let mut a1 = agent("a1", 5, 0);
        a1.skills.insert(
            SkillTag::new("Networking").unwrap(),
            Proficiency::new(9).unwrap(),
        );
        let mut a2 = agent("a2", 5, 0);
        a2.experience_level = 8;
        a2.skills.insert(
            SkillTag::new("Database_SQL").unwrap(),
            Proficiency::new(4).unwrap(),
        );
        let reg = AgentRegistry::new(vec![a1, a2]).unwrap();

        let union = reg.union_skills();
        assert!(union.contains(&SkillTag::new("Networking").unwrap()));
        assert!(union.contains(&SkillTag::new("Database_SQL").unwrap()));
        assert_eq!(reg.experience_ceiling(), 8);
    }
}
