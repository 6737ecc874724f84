//! Multi-agent status dashboard.
//!
//! Reads each agent workspace's `PROJECTS.md`, `KNOWLEDGE.md`, `HEARTBEAT.md`
//! and `memory/` logs, and assembles a [`models::Snapshot`] for the dashboard UI.

pub mod api;
pub mod config;
pub mod extract;
pub mod models;
pub mod snapshot;
