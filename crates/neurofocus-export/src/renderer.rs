use tracing::debug;

use neurofocus_core::models::report::ReportDocument;

use crate::docx::generate_docx;
use crate::error::ExportError;
use crate::pdf::generate_pdf;
use crate::render::render_markdown;
use crate::styles::DocumentStyles;

/// Turns a finished [`ReportDocument`] into a file artifact.
///
/// The document is self-contained; renderers never re-derive scores.
pub trait ReportRenderer: Send + Sync {
    /// File extension for the produced artifact, without the dot.
    fn file_extension(&self) -> &'static str;

    fn render(&self, report: &ReportDocument) -> Result<Vec<u8>, ExportError>;
}

/// UTF-8 Markdown via the built-in template.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl ReportRenderer for MarkdownRenderer {
    fn file_extension(&self) -> &'static str {
        "md"
    }

    fn render(&self, report: &ReportDocument) -> Result<Vec<u8>, ExportError> {
        Ok(render_markdown(report)?.into_bytes())
    }
}

/// Printable Word document.
#[derive(Debug, Clone, Default)]
pub struct DocxRenderer {
    pub styles: DocumentStyles,
}

impl DocxRenderer {
    pub fn new(styles: DocumentStyles) -> Self {
        Self { styles }
    }
}

impl ReportRenderer for DocxRenderer {
    fn file_extension(&self) -> &'static str {
        "docx"
    }

    fn render(&self, report: &ReportDocument) -> Result<Vec<u8>, ExportError> {
        let markdown = render_markdown(report)?;
        let bytes = generate_docx(&markdown, &self.styles)?;
        debug!(title = %report.title, bytes = bytes.len(), "rendered docx report");
        Ok(bytes)
    }
}

/// Printable PDF laid out directly from the document fields.
#[derive(Debug, Clone, Default)]
pub struct PdfRenderer {
    pub styles: DocumentStyles,
}

impl PdfRenderer {
    pub fn new(styles: DocumentStyles) -> Self {
        Self { styles }
    }
}

impl ReportRenderer for PdfRenderer {
    fn file_extension(&self) -> &'static str {
        "pdf"
    }

    fn render(&self, report: &ReportDocument) -> Result<Vec<u8>, ExportError> {
        let bytes = generate_pdf(report, &self.styles)?;
        debug!(title = %report.title, bytes = bytes.len(), "rendered pdf report");
        Ok(bytes)
    }
}
