use serde::{Deserialize, Serialize};

/// A node of the summarized workspace directory tree.
///
/// Serialized untagged: directories as `{name, children}`, files as
/// `{name, size}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileTreeNode {
    Directory {
        name: String,
        children: Vec<FileTreeNode>,
    },
    File {
        name: String,
        /// Human readable size (`512B`, `1.5KB`, `2.0MB`), empty if unreadable.
        #[serde(rename = "size")]
        size_label: String,
    },
}

impl FileTreeNode {
    /// A directory without children, used for offline or unreadable workspaces.
    pub fn empty_directory(name: impl Into<String>) -> Self {
        Self::Directory {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Directory { name, .. } | Self::File { name, .. } => name,
        }
    }

    /// Children of a directory; files have none.
    pub fn children(&self) -> &[FileTreeNode] {
        match self {
            Self::Directory { children, .. } => children,
            Self::File { .. } => &[],
        }
    }
}
