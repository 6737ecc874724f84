//! Dashboard configuration: which agent workspaces to read and where to serve.
//!
//! Configuration is read once at startup and never mutated afterwards.
//! Sources, in order:
//! - An explicit `--config <path>` (errors are reported)
//! - `<config dir>/agent-dashboard/config.json` (errors fall back to defaults)
//! - Built-in defaults
//!
//! `AGENT_DASHBOARD_PORT` and `AGENT_DASHBOARD_OUTPUT` override the loaded values.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};

const APP_NAME: &str = "agent-dashboard";
const CONFIG_FILE: &str = "config.json";

pub const DEFAULT_PORT: u16 = 7777;
pub const DEFAULT_OUTPUT: &str = "data.json";

/// Static identity of one agent and the workspace it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub role: String,
    /// CSS color used by the dashboard, e.g. `#F5A623`.
    pub color: String,
    /// Root directory of the agent's workspace.
    pub workspace: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Port for the HTTP server
    pub port: u16,
    /// Address the HTTP server binds to
    pub bind: String,
    /// Where each generated snapshot is written
    pub output: PathBuf,
    /// Directory with the dashboard's static files (`index.html`)
    pub static_dir: PathBuf,
    /// Agents in display order
    pub agents: Vec<WorkspaceConfig>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind: "0.0.0.0".to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            static_dir: PathBuf::from("."),
            agents: default_agents(),
        }
    }
}

impl DashboardConfig {
    /// Load from the user's config directory, falling back to defaults if the
    /// file doesn't exist or fails to parse.
    pub fn load() -> Self {
        let config = match Self::try_load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        };
        config.with_env_overrides()
    }

    /// Load from an explicit file. Unlike [`load`](Self::load), errors propagate.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config.with_env_overrides())
    }

    fn try_load() -> Result<Self> {
        let config_path = get_config_path()?;
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).context("Failed to read config file")?;
        let config = serde_json::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    fn with_env_overrides(mut self) -> Self {
        if let Some(port) = std::env::var("AGENT_DASHBOARD_PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
        {
            self.port = port;
        }
        if let Ok(output) = std::env::var("AGENT_DASHBOARD_OUTPUT") {
            self.output = PathBuf::from(output);
        }
        self
    }
}

fn get_config_path() -> Result<PathBuf> {
    let mut path =
        config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Ok(path)
}

/// The stock agents, with workspaces under `~/.openclaw`.
fn default_agents() -> Vec<WorkspaceConfig> {
    let base = home_dir().unwrap_or_default().join(".openclaw");
    let agent = |id: &str, name: &str, emoji: &str, role: &str, color: &str, dir: &str| {
        WorkspaceConfig {
            id: id.to_string(),
            name: name.to_string(),
            emoji: emoji.to_string(),
            role: role.to_string(),
            color: color.to_string(),
            workspace: base.join(dir),
        }
    };

    vec![
        agent("hugo", "Hugo", "🚀", "Marketing Agent", "#F5A623", "workspace-hugo"),
        agent("alfred", "Alfred", "🐸", "HR & Recruiting Agent", "#00b894", "workspace"),
        agent("rainman", "Rainman", "📊", "Data Analyst", "#3b82f6", "workspace-rainman"),
    ]
}
