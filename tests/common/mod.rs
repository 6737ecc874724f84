//! Shared workspace fixtures for the integration specs.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use agent_dashboard::config::WorkspaceConfig;

pub const PROJECTS: &str = "\
# Projekte

### 🎯 Launch
- **Status:** 🟡 in progress
- **Next:** ship v2
- **Files:** ./launch
- 2024-03-01

### ✅ Website Relaunch
**Status:** ✅ Done
Neue Seite ist live.

### Newsletter
**Status:** 🔴 blocked
Wartet auf Freigabe, 30% fertig.

## Wiederkehrende Aufgaben
| Aufgabe | Frequenz |
|---|---|
| Slack Mentions | Alle 5 Min |
| Wettbewerber Check | Wöchentlich |
";

pub const HEARTBEAT: &str = "\
# Heartbeat
## Slack Mentions (every heartbeat)
## Notion Sync (daily)
";

pub const KNOWLEDGE: &str = "\
# Wissen
## ✅ Pricing Model
learned it
## 🔴 Onboarding
## AI
";

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    fs::write(path, content).expect("Failed to write fixture file");
}

/// Create a populated workspace named `workspace-hugo` below `base`.
pub fn write_workspace(base: &Path) -> PathBuf {
    let ws = base.join("workspace-hugo");
    write(&ws.join("PROJECTS.md"), PROJECTS);
    write(&ws.join("HEARTBEAT.md"), HEARTBEAT);
    write(&ws.join("KNOWLEDGE.md"), KNOWLEDGE);

    write(&ws.join("launch/brief.md"), "brief");
    write(&ws.join("launch/hero.png"), "png");
    write(&ws.join("launch/notes.txt"), "notes");
    write(&ws.join("launch/.DS_Store"), "");
    write(&ws.join("launch/node_modules/dep/index.js"), "js");

    write(
        &ws.join("memory/2024-03-01.md"),
        "# 1. März\n## 09:00 Slack Mentions\ntext\n## Dashboard Update\n",
    );
    write(
        &ws.join("memory/2024-03-02-evening.md"),
        "## Projekt Kickoff 18:30\n",
    );

    write(&ws.join(".git/HEAD"), "ref: refs/heads/main");
    ws
}

pub fn agent(id: &str, workspace: PathBuf) -> WorkspaceConfig {
    WorkspaceConfig {
        id: id.to_string(),
        name: format!("Agent {}", id),
        emoji: "🚀".to_string(),
        role: "Marketing Agent".to_string(),
        color: "#F5A623".to_string(),
        workspace,
    }
}
