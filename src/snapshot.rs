//! Aggregation of per-workspace extraction into a dashboard snapshot.
//!
//! Workspaces are independent: each record is built only from its own
//! directory, so callers may build records concurrently. Rebuilding from
//! unchanged documents yields an identical snapshot apart from `generated_at`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::config::WorkspaceConfig;
use crate::extract::{
    build_file_tree, entry_name, parse_knowledge, parse_projects, parse_tasks, parse_timeline,
    read_text, HEARTBEAT_FILE, KNOWLEDGE_FILE, MEMORY_DIR, PROJECTS_FILE,
};
use crate::models::{AgentRecord, AgentStatus, FileTreeNode, Snapshot};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Snapshot persistence errors.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write snapshot to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Extract everything the dashboard shows for one agent.
///
/// A missing workspace gives an offline record with empty sections; its
/// documents are not touched.
pub fn build_agent_record(config: &WorkspaceConfig) -> AgentRecord {
    let ws = config.workspace.as_path();
    let mut record = AgentRecord {
        id: config.id.clone(),
        name: config.name.clone(),
        emoji: config.emoji.clone(),
        role: config.role.clone(),
        color: config.color.clone(),
        status: AgentStatus::Offline,
        projects: Vec::new(),
        tasks: Vec::new(),
        knowledge: Vec::new(),
        timeline: Vec::new(),
        files: FileTreeNode::empty_directory(entry_name(ws)),
    };

    if !ws.is_dir() {
        tracing::debug!("Workspace {} for {} is offline", ws.display(), config.id);
        return record;
    }

    let projects = read_text(&ws.join(PROJECTS_FILE));
    let heartbeat = read_text(&ws.join(HEARTBEAT_FILE));

    record.status = AgentStatus::Active;
    record.projects = parse_projects(&projects, ws);
    record.tasks = parse_tasks(&projects, &heartbeat);
    record.knowledge = parse_knowledge(&read_text(&ws.join(KNOWLEDGE_FILE)));
    record.timeline = parse_timeline(&ws.join(MEMORY_DIR));
    record.files = build_file_tree(ws);

    tracing::debug!(
        "Extracted {}: {} projects, {} tasks, {} knowledge, {} events",
        config.id,
        record.projects.len(),
        record.tasks.len(),
        record.knowledge.len(),
        record.timeline.len()
    );
    record
}

/// Build a snapshot of all workspaces, stamped with the current time.
pub fn build_snapshot(configs: &[WorkspaceConfig]) -> Snapshot {
    build_snapshot_at(configs, Utc::now())
}

/// Build a snapshot with an explicit generation time.
pub fn build_snapshot_at(configs: &[WorkspaceConfig], at: DateTime<Utc>) -> Snapshot {
    Snapshot {
        generated_at: at.format(TIMESTAMP_FORMAT).to_string(),
        agents: configs.iter().map(build_agent_record).collect(),
    }
}

/// Write a snapshot as pretty-printed JSON, creating parent directories.
///
/// The JSON goes to a temporary file next to `path` and is renamed into
/// place, so readers and concurrent writers never see a partial file.
pub fn write_snapshot(snapshot: &Snapshot, path: &Path) -> Result<(), SnapshotError> {
    let json = serde_json::to_string_pretty(snapshot)?;
    let io_err = |source: std::io::Error| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent).map_err(io_err)?;
            parent
        }
        None => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(json.as_bytes()).map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;

    tracing::debug!("Wrote snapshot to {}", path.display());
    Ok(())
}
