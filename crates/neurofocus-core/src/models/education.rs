use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::profile::Accent;

/// A short reading module shown alongside the screeners.
///
/// `content` is Markdown. `icon` is a symbol name the shell maps to an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EducationModule {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub icon: String,
    pub content: String,
    pub accent: Accent,
    pub tag: Option<String>,
}

impl EducationModule {
    /// Content with surrounding blank lines removed and each line's trailing
    /// whitespace trimmed.
    pub fn body(&self) -> String {
        self.content
            .trim()
            .lines()
            .map(str::trim_end)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
