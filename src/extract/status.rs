use crate::models::ProjectStatus;

/// Status markers in resolution order. The first contained marker wins.
const STATUS_MARKERS: &[(&str, ProjectStatus)] = &[
    ("✅", ProjectStatus::Done),
    ("done", ProjectStatus::Done),
    ("🔵", ProjectStatus::Ongoing),
    ("ongoing", ProjectStatus::Ongoing),
    ("🟡", ProjectStatus::Active),
    ("active", ProjectStatus::Active),
    ("in progress", ProjectStatus::Active),
    ("🔴", ProjectStatus::Blocked),
    ("blocked", ProjectStatus::Blocked),
    ("backlog", ProjectStatus::Backlog),
];

/// Map free status text (glyphs or words, any case) to a canonical status.
///
/// Total: text without a known marker is [`ProjectStatus::Backlog`].
pub fn normalize_status(text: &str) -> ProjectStatus {
    let lower = text.to_lowercase();
    STATUS_MARKERS
        .iter()
        .find(|(marker, _)| lower.contains(marker))
        .map(|(_, status)| *status)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_glyphs_and_words() {
        assert_eq!(normalize_status("✅"), ProjectStatus::Done);
        assert_eq!(normalize_status("DONE"), ProjectStatus::Done);
        assert_eq!(normalize_status("🔵 läuft"), ProjectStatus::Ongoing);
        assert_eq!(normalize_status("In Progress"), ProjectStatus::Active);
        assert_eq!(normalize_status("🔴 waiting"), ProjectStatus::Blocked);
        assert_eq!(normalize_status("Backlog"), ProjectStatus::Backlog);
    }

    #[test]
    fn first_marker_in_table_order_wins() {
        // "done" is listed before "blocked", regardless of position in the text.
        assert_eq!(normalize_status("blocked, then done"), ProjectStatus::Done);
        assert_eq!(normalize_status("🟡 blocked"), ProjectStatus::Active);
    }

    #[test]
    fn falls_back_to_backlog() {
        assert_eq!(normalize_status(""), ProjectStatus::Backlog);
        assert_eq!(normalize_status("irgendwann"), ProjectStatus::Backlog);
    }
}
