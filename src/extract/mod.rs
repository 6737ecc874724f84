//! Tolerant parsers that turn a workspace's markdown documents into models.
//!
//! Every extractor is best-effort: a missing or unreadable document yields an
//! empty collection, and a block with missing fields is still emitted with
//! defaults. Nothing here returns an error.
//!
//! The keyword tables are ordered slices, not maps. The first entry whose
//! keyword is contained in the input wins, so table order decides ties.

mod file_tree;
mod knowledge;
mod projects;
mod status;
mod tasks;
mod timeline;

use std::path::Path;

pub(crate) use file_tree::entry_name;
pub use file_tree::{build_file_tree, count_files, format_size, MAX_TREE_DEPTH};
pub use knowledge::parse_knowledge;
pub use projects::parse_projects;
pub use status::normalize_status;
pub use tasks::{parse_heartbeat_tasks, parse_table_tasks, parse_tasks};
pub use timeline::{parse_timeline, MAX_TIMELINE_EVENTS};

/// Conventional document names inside a workspace.
pub const PROJECTS_FILE: &str = "PROJECTS.md";
pub const KNOWLEDGE_FILE: &str = "KNOWLEDGE.md";
pub const HEARTBEAT_FILE: &str = "HEARTBEAT.md";
pub const MEMORY_DIR: &str = "memory";

/// Names never descended into or counted, in addition to hidden names.
pub const EXCLUDED_NAMES: &[&str] = &[
    ".git",
    "node_modules",
    ".next",
    "cache",
    "__pycache__",
    ".DS_Store",
    "trash",
    ".clawhub",
    "b64",
    "vorlagen",
    "test-results",
];

/// Whether a directory entry is hidden or on the exclusion list.
pub fn is_skipped_name(name: &str) -> bool {
    name.starts_with('.') || EXCLUDED_NAMES.contains(&name)
}

/// Read a whole document as text, returning an empty string on any failure.
pub fn read_text(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!("Skipping unreadable document {}: {}", path.display(), e);
            String::new()
        }
    }
}

/// Cut `text` to at most `max_chars` characters without splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Ordered `(keywords, value)` pairs; see [`first_keyword_match`].
pub(crate) type KeywordTable = &'static [(&'static [&'static str], &'static str)];

/// Value of the first table entry with a keyword contained in `haystack`.
///
/// Callers lower-case `haystack`; keywords are stored lower-case.
pub(crate) fn first_keyword_match(table: KeywordTable, haystack: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| haystack.contains(k)))
        .map(|(_, value)| *value)
}

/// A markdown heading and the lines up to the next heading of the same level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Section<'a> {
    /// Heading text after the `#` marker and its whitespace.
    pub heading: &'a str,
    pub body: Vec<&'a str>,
}

/// Lazily splits a document into [`Section`]s at lines that start with exactly
/// `level` `#` characters followed by whitespace.
///
/// Text before the first heading is discarded. Fenced code blocks are not
/// special-cased: a heading-looking line inside a fence still starts a section.
pub(crate) struct Sections<'a> {
    lines: std::iter::Peekable<std::str::Lines<'a>>,
    level: usize,
}

impl<'a> Sections<'a> {
    pub fn new(text: &'a str, level: usize) -> Self {
        Self {
            lines: text.lines().peekable(),
            level,
        }
    }
}

impl<'a> Iterator for Sections<'a> {
    type Item = Section<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let heading = loop {
            let line = self.lines.next()?;
            if let Some(heading) = heading_text(line, self.level) {
                break heading;
            }
        };

        let mut body = Vec::new();
        while let Some(line) = self.lines.peek() {
            if heading_text(line, self.level).is_some() {
                break;
            }
            body.push(*line);
            self.lines.next();
        }

        Some(Section { heading, body })
    }
}

/// Heading text if `line` opens a heading of exactly `level`.
fn heading_text(line: &str, level: usize) -> Option<&str> {
    let bytes = line.as_bytes();
    if bytes.len() <= level || !bytes[..level].iter().all(|&b| b == b'#') {
        return None;
    }
    // The marker is ASCII, so `level` is a char boundary.
    let rest = &line[level..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.trim_start())
}
