use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::is_skipped_name;
use crate::models::FileTreeNode;

/// Deepest level below the workspace root that still produces nodes.
pub const MAX_TREE_DEPTH: usize = 3;

/// Summarize a workspace directory as a bounded, filtered tree.
///
/// Subdirectories come before files, each group sorted case-insensitively.
/// Empty directories are pruned, except the root and its direct children.
/// A missing, excluded or non-directory root yields an empty root node.
pub fn build_file_tree(root: &Path) -> FileTreeNode {
    let name = entry_name(root);
    if !root.is_dir() {
        return FileTreeNode::empty_directory(name);
    }
    scan(root, &name, 0).unwrap_or_else(|| FileTreeNode::empty_directory(name))
}

fn scan(path: &Path, name: &str, depth: usize) -> Option<FileTreeNode> {
    if depth > MAX_TREE_DEPTH || is_skipped_name(name) {
        return None;
    }

    if !path.is_dir() {
        let size_label = match fs::metadata(path) {
            Ok(meta) => format_size(meta.len()),
            Err(e) => {
                tracing::debug!("Cannot stat {}: {}", path.display(), e);
                String::new()
            }
        };
        return Some(FileTreeNode::File {
            name: name.to_string(),
            size_label,
        });
    }

    let children: Vec<FileTreeNode> = match sorted_entries(path) {
        Ok(entries) => entries
            .iter()
            .filter_map(|(child_path, child_name)| scan(child_path, child_name, depth + 1))
            .collect(),
        Err(e) => {
            tracing::debug!("Cannot list {}: {}", path.display(), e);
            Vec::new()
        }
    };

    if children.is_empty() && depth > 1 {
        return None;
    }

    Some(FileTreeNode::Directory {
        name: name.to_string(),
        children,
    })
}

/// Directory entries, subdirectories first, then by lower-cased name.
fn sorted_entries(dir: &Path) -> std::io::Result<Vec<(PathBuf, String)>> {
    let mut entries: Vec<(bool, String, PathBuf)> = fs::read_dir(dir)?
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!("Skipping unreadable entry in {}: {}", dir.display(), e);
                None
            }
        })
        .map(|entry| {
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();
            (!path.is_dir(), name, path)
        })
        .collect();

    entries.sort_by_cached_key(|(not_dir, name, _)| (*not_dir, name.to_lowercase()));

    Ok(entries
        .into_iter()
        .map(|(_, name, path)| (path, name))
        .collect())
}

/// Count files below `dir`, skipping hidden and excluded names at every level.
pub fn count_files(dir: &Path) -> usize {
    WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0 || !is_skipped_name(&entry.file_name().to_string_lossy())
        })
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!("Skipping entry while counting files: {}", e);
                None
            }
        })
        .filter(|entry| !entry.file_type().is_dir())
        .count()
}

/// Human readable size: `NB` below 1 KiB, then one decimal `KB` or `MB`.
pub fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;

    if bytes < KIB {
        format!("{}B", bytes)
    } else if bytes < MIB {
        format!("{:.1}KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1}MB", bytes as f64 / MIB as f64)
    }
}

pub(crate) fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
