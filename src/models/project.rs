use serde::{Deserialize, Serialize};

/// A project parsed from one `###` block of a workspace's `PROJECTS.md`.
///
/// Projects have no identity beyond their position in the document; the
/// extractor emits them in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Leading glyph of the heading, `📄` when the heading has none.
    pub icon: String,
    pub title: String,
    pub status: ProjectStatus,
    /// Completion in percent, `0..=100`.
    #[serde(rename = "pct")]
    pub percent_complete: u8,
    /// Value of the `**Next:**` field, empty when absent.
    #[serde(rename = "next")]
    pub next_step: String,
    /// Number of files below the folder named by `**Files:**`.
    #[serde(rename = "files")]
    pub referenced_file_count: usize,
    /// First `YYYY-MM-DD` in the block body, empty when absent.
    pub date: String,
    /// Free text of the block, at most 200 characters.
    #[serde(rename = "detail")]
    pub summary: String,
}

/// Canonical project status.
///
/// - `Done`: Finished
/// - `Ongoing`: Running continuously, mostly complete
/// - `Active`: Being worked on
/// - `Blocked`: Waiting on something external
/// - `Backlog`: Not started, also the fallback for unknown markers
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Done,
    Ongoing,
    Active,
    Blocked,
    #[default]
    Backlog,
}

impl ProjectStatus {
    /// Completion assumed for a project that states no explicit percentage.
    pub fn default_percent(&self) -> u8 {
        match self {
            Self::Done => 100,
            Self::Ongoing => 85,
            Self::Active => 50,
            Self::Blocked | Self::Backlog => 0,
        }
    }
}
