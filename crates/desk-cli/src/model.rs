//! Input/output documents for the dataset JSON format

use chrono::{DateTime, Utc};
use desk_assign::Assignment;
use desk_common::{
    Agent, DeskError, DeskResult, Priority, Proficiency, Score, SkillTag, Ticket,
};
use desk_classify::Classifier;
use desk_report::Analytics;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Top-level input document: `{ "agents": [...], "tickets": [...] }`
#[derive(Debug, Deserialize)]
pub struct InputDoc {
    pub agents: Vec<AgentRecord>,
    pub tickets: Vec<TicketRecord>,
}

/// Raw agent record as it appears in the dataset file
#[derive(Debug, Deserialize)]
pub struct AgentRecord {
    pub agent_id: String,
    pub name: String,
    #[serde(default)]
    pub skills: BTreeMap<String, u8>,
    pub experience_level: u8,
    /// Per-agent capacity; falls back to the configured default
    #[serde(default)]
    pub max_concurrent: Option<u32>,
    #[serde(default)]
    pub current_load: u32,
    /// Escalation capability; derived from experience when absent
    #[serde(default)]
    pub handles_priority: Option<BTreeSet<Priority>>,
}

impl AgentRecord {
    /// Convert to a validated domain record.
    ///
    /// `override_max`, when configured, wins over both the record's own
    /// capacity and the default.
    pub fn into_agent(self, default_max: u32, override_max: Option<u32>) -> DeskResult<Agent> {
        let mut skills = BTreeMap::new();
        for (tag, level) in self.skills {
            skills.insert(SkillTag::new(tag)?, Proficiency::new(level)?);
        }

        // Records without an explicit capability set get one derived from
        // seniority: senior agents take CRITICAL, experienced ones HIGH.
        let handles = self.handles_priority.unwrap_or_else(|| {
            let mut set = BTreeSet::new();
            if self.experience_level >= 6 {
                set.insert(Priority::High);
            }
            if self.experience_level >= 8 {
                set.insert(Priority::Critical);
            }
            set
        });

        let agent = Agent {
            id: self.agent_id,
            name: self.name,
            skills,
            experience_level: self.experience_level,
            max_concurrent: override_max
                .or(self.max_concurrent)
                .unwrap_or(default_max),
            current_workload: self.current_load,
            handles,
        };
        agent.validate()?;
        Ok(agent)
    }
}

/// Raw ticket record as it appears in the dataset file
#[derive(Debug, Deserialize)]
pub struct TicketRecord {
    pub ticket_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Pre-normalized skills; classified from the text when absent
    #[serde(default)]
    pub required_skills: Option<BTreeSet<String>>,
    /// Pre-assigned priority; classified when absent
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub business_impact: Option<f32>,
}

impl TicketRecord {
    /// Convert to a domain ticket, running the classifier for any field
    /// the record does not carry.
    pub fn into_ticket(self, classifier: &dyn Classifier) -> DeskResult<Ticket> {
        let needs_classification =
            self.required_skills.is_none() || self.priority.is_none() || self.business_impact.is_none();
        let classified = needs_classification
            .then(|| classifier.classify(&self.title, &self.description));

        let required_skills = match self.required_skills {
            Some(raw) => raw
                .into_iter()
                .map(SkillTag::new)
                .collect::<DeskResult<BTreeSet<_>>>()?,
            None => classified
                .as_ref()
                .map(|c| c.required_skills.clone())
                .unwrap_or_default(),
        };
        let priority = self
            .priority
            .or_else(|| classified.as_ref().map(|c| c.priority))
            .unwrap_or_default();
        let business_impact = match self.business_impact {
            Some(value) => Score::new(value)
                .map_err(|_| DeskError::InvalidTicket {
                    id: self.ticket_id.clone(),
                    reason: format!("business_impact {value} out of 0.0-1.0"),
                })?,
            None => classified
                .as_ref()
                .map(|c| c.business_impact)
                .unwrap_or_default(),
        };

        let ticket = Ticket {
            id: self.ticket_id,
            subject: self.title,
            description: self.description,
            required_skills,
            priority,
            business_impact,
        };
        ticket.validate()?;
        Ok(ticket)
    }
}

/// Metadata block of the output document
#[derive(Debug, Serialize)]
pub struct Metadata {
    pub generated_at: DateTime<Utc>,
    pub total_tickets: usize,
    pub total_agents: usize,
    pub assigned: usize,
    pub unassigned: usize,
}

/// Top-level output document
#[derive(Debug, Serialize)]
pub struct OutputDoc {
    pub metadata: Metadata,
    pub assignments: Vec<Assignment>,
    pub analytics: Analytics,
}
