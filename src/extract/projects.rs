use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::{count_files, normalize_status, truncate_chars, Section, Sections};
use crate::models::{Project, ProjectStatus};

const DEFAULT_ICON: &str = "📄";
const SUMMARY_MAX_CHARS: usize = 200;
const VARIATION_SELECTOR: char = '\u{FE0F}';

static STATUS_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Status:\*\*\s*(.+)").expect("valid status regex"));
static NEXT_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Next:\*\*\s*(.+)").expect("valid next regex"));
static FILES_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Files:\*\*\s*(.+)").expect("valid files regex"));
static PERCENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s*%").expect("valid percent regex"));
static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("valid date regex"));

/// Parse the `###` blocks of a `PROJECTS.md` document.
///
/// `workspace` anchors relative `**Files:**` folders for file counting.
pub fn parse_projects(content: &str, workspace: &Path) -> Vec<Project> {
    Sections::new(content, 3)
        .filter_map(|section| parse_block(&section, workspace))
        .collect()
}

fn parse_block(section: &Section<'_>, workspace: &Path) -> Option<Project> {
    let mut lines: Vec<&str> = std::iter::once(section.heading)
        .chain(section.body.iter().copied())
        .collect();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }
    let start = lines.iter().position(|line| !line.trim().is_empty())?;
    let (title_line, body_lines) = lines[start..].split_first()?;

    let (icon, title) = split_icon(title_line.trim());
    let body = body_lines.join("\n");

    let status = field(&STATUS_FIELD, &body)
        .map(normalize_status)
        .unwrap_or(ProjectStatus::Backlog);

    let percent_complete = PERCENT
        .captures(&body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().parse::<u64>().map_or(100, |n| n.min(100)) as u8)
        .unwrap_or_else(|| status.default_percent());

    let next_step = field(&NEXT_FIELD, &body).unwrap_or_default().to_string();

    let referenced_file_count = match field(&FILES_FIELD, &body) {
        Some(folder) => {
            let dir = workspace.join(folder.trim_end_matches('/'));
            if dir.is_dir() {
                count_files(&dir)
            } else {
                tracing::debug!("Project folder {} does not exist", dir.display());
                0
            }
        }
        None => 0,
    };

    let date = ISO_DATE
        .find(&body)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let summary = body_lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with("**"))
        .map(|line| line.trim_start_matches(|c| c == '-' || c == ' '))
        .collect::<Vec<_>>()
        .join(" ");

    Some(Project {
        icon,
        title: title.to_string(),
        status,
        percent_complete,
        next_step,
        referenced_file_count,
        date,
        summary: truncate_chars(&summary, SUMMARY_MAX_CHARS).to_string(),
    })
}

/// Trimmed value of the first `**Label:** value` match, if non-empty.
fn field<'a>(pattern: &Regex, body: &'a str) -> Option<&'a str> {
    pattern
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|value| !value.is_empty())
}

/// Split a leading non-ASCII symbol off the title line.
fn split_icon(title_line: &str) -> (String, &str) {
    if let Some(first) = title_line.chars().next() {
        if first as u32 > 127 && !first.is_alphanumeric() && !first.is_whitespace() {
            let mut icon_end = first.len_utf8();
            if title_line[icon_end..].starts_with(VARIATION_SELECTOR) {
                icon_end += VARIATION_SELECTOR.len_utf8();
            }
            let rest = title_line[icon_end..].trim();
            if !rest.is_empty() {
                return (title_line[..icon_end].to_string(), rest);
            }
        }
    }
    (DEFAULT_ICON.to_string(), title_line)
}
