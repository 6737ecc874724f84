use super::Sections;
use crate::models::{KnowledgeItem, KnowledgeStatus};

const STATUS_GLYPHS: &[(&str, KnowledgeStatus)] = &[
    ("✅", KnowledgeStatus::Learned),
    ("🟡", KnowledgeStatus::Partial),
    ("🔴", KnowledgeStatus::Missing),
];

/// Parse the `##` sections of a `KNOWLEDGE.md` document.
pub fn parse_knowledge(content: &str) -> Vec<KnowledgeItem> {
    Sections::new(content, 2)
        .filter_map(|section| classify(section.heading.trim()))
        .collect()
}

fn classify(heading: &str) -> Option<KnowledgeItem> {
    let (name, status) = match STATUS_GLYPHS
        .iter()
        .find(|(glyph, _)| heading.contains(glyph))
    {
        Some((glyph, status)) => (heading.replace(glyph, "").trim().to_string(), *status),
        None => (heading.to_string(), KnowledgeStatus::default()),
    };

    (name.chars().count() > 2).then_some(KnowledgeItem { name, status })
}
