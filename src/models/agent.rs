use serde::{Deserialize, Serialize};

use super::{FileTreeNode, KnowledgeItem, Project, RecurringTask, TimelineEvent};

/// Everything the dashboard shows for one agent.
///
/// The identity fields are copied from configuration; the collections are
/// extracted fresh from the agent's workspace on every pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRecord {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub role: String,
    pub color: String,
    pub status: AgentStatus,
    pub projects: Vec<Project>,
    pub tasks: Vec<RecurringTask>,
    pub knowledge: Vec<KnowledgeItem>,
    /// At most 15 events, newest first.
    pub timeline: Vec<TimelineEvent>,
    pub files: FileTreeNode,
}

/// Whether the agent's workspace directory exists.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    Active,
    Offline,
}

/// One complete extraction pass over all configured workspaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// UTC generation time, `%Y-%m-%dT%H:%M:%SZ`.
    #[serde(rename = "lastUpdated")]
    pub generated_at: String,
    /// One record per configured workspace, in configuration order.
    pub agents: Vec<AgentRecord>,
}

impl Snapshot {
    /// One line per agent for console output.
    pub fn summary_lines(&self) -> Vec<String> {
        self.agents
            .iter()
            .map(|agent| {
                format!(
                    "{} {}: {} projects, {} knowledge, {} events, {} tasks",
                    agent.emoji,
                    agent.name,
                    agent.projects.len(),
                    agent.knowledge.len(),
                    agent.timeline.len(),
                    agent.tasks.len()
                )
            })
            .collect()
    }
}
