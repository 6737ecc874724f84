use serde::{Deserialize, Serialize};

/// A recurring, cadence-tagged routine of an agent.
///
/// Tasks come from the "Wiederkehrende Aufgaben" table in `PROJECTS.md` and
/// from the sections of `HEARTBEAT.md`. Names are unique case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringTask {
    pub icon: String,
    pub name: String,
    /// Free-text cadence, e.g. `Täglich`, `Alle 5 Min` or a table label.
    #[serde(rename = "freq")]
    pub frequency: String,
}

impl RecurringTask {
    pub fn new(
        icon: impl Into<String>,
        name: impl Into<String>,
        frequency: impl Into<String>,
    ) -> Self {
        Self {
            icon: icon.into(),
            name: name.into(),
            frequency: frequency.into(),
        }
    }
}
