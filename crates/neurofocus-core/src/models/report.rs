use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Sentence carried by every report, both as a standalone field and appended
/// to the result narrative.
pub const DISCLAIMER: &str = "Not a diagnosis. Only a qualified clinician can diagnose ADHD.";

/// One transcript line: 1-based position, question text, chosen answer label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportQuestion {
    pub index: u32,
    pub text: String,
    pub answer: String,
}

/// Flat, self-contained report handed to a renderer. Every field is addressable
/// by name in a report template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportDocument {
    pub title: String,
    pub subtitle: String,
    pub result_category: String,
    /// Band narrative followed by a blank line and [`DISCLAIMER`].
    pub result_description: String,
    /// Pre-formatted `"<category>: <score>/<max> - <insight>"` lines.
    pub insights: Vec<String>,
    pub questions: Vec<ReportQuestion>,
    pub disclaimer: String,
}
