use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use super::{first_keyword_match, read_text, truncate_chars, KeywordTable};
use crate::models::TimelineEvent;

/// Events kept after sorting.
pub const MAX_TIMELINE_EVENTS: usize = 15;
/// Newest memory logs scanned per workspace.
const MAX_LOG_FILES: usize = 5;
const TEXT_MAX_CHARS: usize = 120;
const DEFAULT_ICON: &str = "📌";

const EVENT_ICONS: KeywordTable = &[
    (&["slack", "mention"], "💬"),
    (&["dashboard"], "📊"),
    (&["notion"], "📝"),
    (&["kalender", "calendar"], "📅"),
    (&["produkt", "product"], "📦"),
    (&["projekt", "project"], "🏗️"),
    (&["github"], "🐙"),
];

static FULL_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"));
static DATE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("valid date regex"));
static CLOCK_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{1,2}:[0-9]{2}").expect("valid time regex"));

/// Collect `##` headings from the newest memory logs as timeline events.
///
/// Events are sorted by their date label, newest first, and capped at
/// [`MAX_TIMELINE_EVENTS`]. A missing `memory_dir` yields no events.
pub fn parse_timeline(memory_dir: &Path) -> Vec<TimelineEvent> {
    let mut events: Vec<TimelineEvent> = newest_logs(memory_dir)
        .iter()
        .flat_map(|(path, stem)| parse_log(&read_text(path), &date_label(stem)))
        .collect();

    // Stable, so events sharing a label keep file and line order.
    events.sort_by(|a, b| b.date.cmp(&a.date));
    events.truncate(MAX_TIMELINE_EVENTS);
    events
}

/// Up to [`MAX_LOG_FILES`] `*.md` files with their stems, by file name descending.
fn newest_logs(memory_dir: &Path) -> Vec<(PathBuf, String)> {
    let entries = match std::fs::read_dir(memory_dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("No memory logs in {}: {}", memory_dir.display(), e);
            return Vec::new();
        }
    };

    let mut logs: Vec<(String, PathBuf)> = entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let file_name = entry.file_name().to_string_lossy().into_owned();
            let path = entry.path();
            let visible_md = file_name.ends_with(".md") && !file_name.starts_with('.');
            (visible_md && path.is_file()).then_some((file_name, path))
        })
        .collect();

    logs.sort_by(|a, b| b.0.cmp(&a.0));
    logs.truncate(MAX_LOG_FILES);
    logs.into_iter()
        .map(|(file_name, path)| {
            let stem = file_name
                .strip_suffix(".md")
                .unwrap_or(&file_name)
                .to_string();
            (path, stem)
        })
        .collect()
}

/// `YYYY-MM-DD` from a log file stem, or `unknown`.
fn date_label(stem: &str) -> String {
    if FULL_DATE.is_match(stem) {
        return stem.to_string();
    }
    DATE_PREFIX
        .find(stem)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn parse_log(content: &str, date: &str) -> Vec<TimelineEvent> {
    content
        .lines()
        .filter_map(|line| line.trim().strip_prefix("## "))
        .map(|heading| {
            let heading = heading.trim();
            let lower = heading.to_lowercase();
            let icon = first_keyword_match(EVENT_ICONS, &lower).unwrap_or(DEFAULT_ICON);
            let date = match CLOCK_TIME.find(heading) {
                Some(time) => format!("{} {}", date, time.as_str()),
                None => date.to_string(),
            };
            TimelineEvent {
                date,
                text: truncate_chars(heading, TEXT_MAX_CHARS).to_string(),
                icon: icon.to_string(),
            }
        })
        .collect()
}
