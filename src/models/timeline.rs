use serde::{Deserialize, Serialize};

/// A heading from a dated memory log, shown on the agent's timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// `YYYY-MM-DD`, optionally followed by ` HH:MM`, or `unknown`.
    ///
    /// Events are ordered by comparing this string, not a parsed date.
    pub date: String,
    /// Heading text, at most 120 characters.
    pub text: String,
    pub icon: String,
}
