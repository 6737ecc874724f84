//! Value types produced by the extraction pass.
//!
//! # Core Concepts
//!
//! - [`Snapshot`]: The complete output of one pass, one [`AgentRecord`] per workspace.
//! - [`AgentRecord`]: Static agent identity plus everything extracted from its workspace.
//! - [`Project`]: A block of `PROJECTS.md` with status, progress and next step.
//! - [`RecurringTask`]: A cadence-tagged routine from `PROJECTS.md` or `HEARTBEAT.md`.
//! - [`KnowledgeItem`]: A topic from `KNOWLEDGE.md` marked learned, partial or missing.
//! - [`TimelineEvent`]: A heading from a dated memory log.
//! - [`FileTreeNode`]: A bounded, filtered summary of the workspace directory.
//!
//! All types are immutable values with no cross-references. Each snapshot is
//! rebuilt from scratch; nothing is carried over between passes.

mod agent;
mod file_tree;
mod knowledge;
mod project;
mod task;
mod timeline;

pub use agent::*;
pub use file_tree::*;
pub use knowledge::*;
pub use project::*;
pub use task::*;
pub use timeline::*;
