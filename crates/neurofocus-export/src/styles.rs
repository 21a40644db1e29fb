use serde::{Deserialize, Serialize};

/// Fonts and sizes for printable reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// Font for body text (e.g. "Helvetica", "Calibri").
    pub body_font: String,

    /// Font for headings.
    pub heading_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Footer disclaimer font size in points.
    pub footnote_size: usize,

    /// Heading 1 (report title) font size in points.
    pub heading1_size: usize,

    /// Heading 2 (section) font size in points.
    pub heading2_size: usize,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Helvetica".to_string(),
            heading_font: "Helvetica".to_string(),
            body_size: 11,
            footnote_size: 9,
            heading1_size: 22,
            heading2_size: 14,
        }
    }
}
