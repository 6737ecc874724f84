use std::sync::LazyLock;

use regex::Regex;

use super::{first_keyword_match, truncate_chars, KeywordTable, Sections};
use crate::models::RecurringTask;

const TABLE_SECTION_LABEL: &str = "Wiederkehrende Aufgaben";
const TABLE_HEADER_CELL: &str = "Aufgabe";
const DEFAULT_ICON: &str = "⚡";
const DEFAULT_FREQUENCY: &str = "Heartbeat";
const NAME_MAX_CHARS: usize = 50;

const TABLE_ICONS: KeywordTable = &[
    (&["slack"], "💬"),
    (&["linkedin"], "💼"),
    (&["knowledge"], "📚"),
    (&["dashboard", "icloud"], "📁"),
    (&["wettbewerber", "competitor"], "🔍"),
    (&["seo"], "📈"),
    (&["memory"], "🧠"),
    (&["kalender", "calendar"], "📅"),
];

const HEARTBEAT_ICONS: KeywordTable = &[
    (&["slack"], "💬"),
    (&["notion"], "📝"),
    (&["google", "calendar", "kalender"], "📅"),
    (&["cv", "extract"], "📄"),
    (&["sync"], "🔄"),
    (&["task"], "✅"),
    (&["inbox"], "📥"),
    (&["chat"], "💬"),
];

const HEARTBEAT_FREQUENCIES: KeywordTable = &[
    (&["daily", "täglich", "1x daily"], "Täglich"),
    (&["weekly", "wöchentlich"], "Wöchentlich"),
    (&["heartbeat", "every heartbeat"], "Alle 5 Min"),
];

/// Fixed tasks for heartbeats written as a plain numbered checklist.
const SLACK_CHECK: (&str, &str, &str) = ("💬", "Slack Mentions checken", "Alle 5 Min");
const CALENDAR_CHECK: (&str, &str, &str) = ("📅", "Kalender checken", "Alle 5 Min");

static EVERY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"every\s+(\w+)").expect("valid every regex"));
static PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.*?\)").expect("valid parenthesis regex"));
static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s+(.+)").expect("valid list item regex"));

/// Recurring tasks of a workspace: the projects table first, then heartbeat
/// sections whose names are not already taken.
pub fn parse_tasks(projects: &str, heartbeat: &str) -> Vec<RecurringTask> {
    let mut tasks = parse_table_tasks(projects);
    parse_heartbeat_tasks(heartbeat, &mut tasks);
    tasks
}

/// Rows of the "Wiederkehrende Aufgaben" table in `PROJECTS.md`.
///
/// The table runs from the labeled line to the next `##` heading.
pub fn parse_table_tasks(projects: &str) -> Vec<RecurringTask> {
    let mut lines = projects.lines();
    if !lines
        .by_ref()
        .any(|line| line.trim_end().ends_with(TABLE_SECTION_LABEL))
    {
        return Vec::new();
    }

    lines
        .take_while(|line| !line.starts_with("##"))
        .filter_map(parse_row)
        .collect()
}

fn parse_row(row: &str) -> Option<RecurringTask> {
    let row = row.trim();
    if !row.starts_with('|') || row.starts_with("|-") {
        return None;
    }

    let cells: Vec<&str> = row
        .split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect();
    let [name, frequency, ..] = cells.as_slice() else {
        return None;
    };
    if *name == TABLE_HEADER_CELL || name.chars().all(|c| c == '-' || c == ':') {
        return None;
    }

    let keywords = format!("{name} {frequency}").to_lowercase();
    let icon = first_keyword_match(TABLE_ICONS, &keywords).unwrap_or(DEFAULT_ICON);
    Some(RecurringTask::new(icon, *name, *frequency))
}

/// Append one task per `##` section of `HEARTBEAT.md` to `tasks`.
///
/// Sections whose cleaned heading matches an existing task name
/// (case-insensitive) are skipped. A heartbeat without any `##` section falls
/// back to scanning its numbered list, but only while `tasks` is still empty.
pub fn parse_heartbeat_tasks(heartbeat: &str, tasks: &mut Vec<RecurringTask>) {
    let mut saw_section = false;

    for section in Sections::new(heartbeat, 2) {
        saw_section = true;
        let heading = section.heading.trim();
        let lower = heading.to_lowercase();

        let clean = PARENTHESIZED.replace_all(heading, "");
        let clean = clean.trim();
        if clean.chars().count() <= 3 {
            continue;
        }
        let name = truncate_chars(clean, NAME_MAX_CHARS);
        let name_lower = name.to_lowercase();
        if tasks.iter().any(|t| t.name.to_lowercase() == name_lower) {
            tracing::debug!("Skipping duplicate heartbeat task {:?}", name);
            continue;
        }

        let icon = first_keyword_match(HEARTBEAT_ICONS, &lower).unwrap_or(DEFAULT_ICON);
        tasks.push(RecurringTask::new(icon, name, heartbeat_frequency(&lower)));
    }

    if !saw_section && tasks.is_empty() {
        checklist_tasks(heartbeat, tasks);
    }
}

/// Cadence label for a lower-cased heartbeat heading.
fn heartbeat_frequency(lower: &str) -> String {
    if let Some(label) = first_keyword_match(HEARTBEAT_FREQUENCIES, lower) {
        return label.to_string();
    }
    EVERY
        .captures(lower)
        .and_then(|caps| caps.get(1))
        .map(|unit| format!("Every {}", unit.as_str()))
        .unwrap_or_else(|| DEFAULT_FREQUENCY.to_string())
}

fn checklist_tasks(heartbeat: &str, tasks: &mut Vec<RecurringTask>) {
    for line in heartbeat.lines() {
        let Some(text) = NUMBERED_ITEM
            .captures(line.trim())
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_lowercase())
        else {
            continue;
        };

        let (icon, name, frequency) = if text.contains("slack") {
            SLACK_CHECK
        } else if text.contains("calendar") || text.contains("kalender") {
            CALENDAR_CHECK
        } else {
            continue;
        };

        if !tasks.iter().any(|t| t.name == name) {
            tasks.push(RecurringTask::new(icon, name, frequency));
        }
    }
}
