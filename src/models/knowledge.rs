use serde::{Deserialize, Serialize};

/// One `##` section of `KNOWLEDGE.md`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeItem {
    /// Heading text with the status glyph removed.
    pub name: String,
    pub status: KnowledgeStatus,
}

/// How well an agent knows a topic, taken from the heading glyph.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum KnowledgeStatus {
    /// ✅
    Learned,
    /// 🟡, or no glyph at all
    #[default]
    Partial,
    /// 🔴
    Missing,
}
