use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use neurofocus_core::models::report::ReportDocument;

use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// US Letter, in points.
const PAGE_WIDTH: f32 = 612.0;
const PAGE_HEIGHT: f32 = 792.0;
const MARGIN: f32 = 50.0;
/// Body content stops this far above the bottom edge; the footer lives below.
const CONTENT_FLOOR: f32 = 120.0;
const FOOTER_BASELINE: f32 = 60.0;
/// Average Helvetica glyph width as a fraction of the font size.
const GLYPH_WIDTH: f32 = 0.5;

/// Lay out a report as a one-column PDF using the built-in Helvetica family.
///
/// Font sizes come from `styles`; font names do not, since only the standard
/// PDF fonts are available without embedding.
pub fn generate_pdf(report: &ReportDocument, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let (doc, page, layer) =
        PdfDocument::new(report.title.as_str(), mm(PAGE_WIDTH), mm(PAGE_HEIGHT), "Report");
    let fonts = Fonts {
        regular: builtin(&doc, BuiltinFont::Helvetica)?,
        bold: builtin(&doc, BuiltinFont::HelveticaBold)?,
        italic: builtin(&doc, BuiltinFont::HelveticaOblique)?,
    };

    let mut writer = PageWriter {
        doc: &doc,
        layer: doc.get_page(page).get_layer(layer),
        fonts: &fonts,
        y: PAGE_HEIGHT - MARGIN,
        footer: &report.disclaimer,
        footnote_size: styles.footnote_size as f32,
    };

    let body = styles.body_size as f32;
    let heading = styles.heading2_size as f32;

    writer.text(&report.title, styles.heading1_size as f32, Face::Bold);
    writer.gap(16.0);
    writer.text(
        &format!("Screener Used: {} ({})", report.title, report.subtitle),
        body,
        Face::Bold,
    );
    writer.gap(10.0);
    writer.text(&format!("Result Category: {}", report.result_category), body, Face::Bold);
    for paragraph in report.result_description.split("\n\n") {
        writer.gap(4.0);
        writer.text(paragraph, body, Face::Regular);
    }

    writer.gap(18.0);
    writer.text("Domain Breakdown", heading, Face::Bold);
    writer.gap(4.0);
    for line in &report.insights {
        writer.text(&format!("\u{2022} {line}"), body, Face::Regular);
    }

    writer.gap(18.0);
    writer.text("Response Transcript", heading, Face::Bold);
    for question in &report.questions {
        writer.gap(6.0);
        writer.text(&format!("{}. {}", question.index, question.text), body, Face::Regular);
        writer.text(&format!("Response: {}", question.answer), body - 1.0, Face::Italic);
    }
    writer.finish_page();

    doc.save_to_bytes().map_err(|e| ExportError::Pdf(e.to_string()))
}

fn builtin(doc: &PdfDocumentReference, font: BuiltinFont) -> Result<IndirectFontRef, ExportError> {
    doc.add_builtin_font(font).map_err(|e| ExportError::Pdf(e.to_string()))
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

#[derive(Clone, Copy)]
enum Face {
    Regular,
    Bold,
    Italic,
}

/// Cursor over the current page. `y` is the next baseline, measured from the
/// bottom edge as PDF coordinates are.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    fonts: &'a Fonts,
    y: f32,
    footer: &'a str,
    footnote_size: f32,
}

impl PageWriter<'_> {
    fn gap(&mut self, points: f32) {
        self.y -= points;
    }

    /// Write wrapped text, starting a new page when the content floor is reached.
    fn text(&mut self, text: &str, size: f32, face: Face) {
        let font = match face {
            Face::Regular => &self.fonts.regular,
            Face::Bold => &self.fonts.bold,
            Face::Italic => &self.fonts.italic,
        };
        let line_height = size * 1.4;
        for line in wrap(text, max_chars(size)) {
            if self.y - line_height < CONTENT_FLOOR {
                self.new_page();
            }
            self.y -= line_height;
            self.layer.use_text(line, size, mm(MARGIN), mm(self.y), font);
        }
    }

    fn new_page(&mut self) {
        self.finish_page();
        let (page, layer) = self.doc.add_page(mm(PAGE_WIDTH), mm(PAGE_HEIGHT), "Report");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT - MARGIN;
    }

    /// Every page carries the disclaimer as its footer.
    fn finish_page(&self) {
        let mut y = FOOTER_BASELINE;
        for line in wrap(self.footer, max_chars(self.footnote_size)) {
            self.layer.use_text(
                line,
                self.footnote_size,
                mm(MARGIN),
                mm(y),
                &self.fonts.italic,
            );
            y -= self.footnote_size * 1.3;
        }
    }
}

fn mm(points: f32) -> Mm {
    Mm(points * 25.4 / 72.0)
}

fn max_chars(size: f32) -> usize {
    (((PAGE_WIDTH - 2.0 * MARGIN) / (size * GLYPH_WIDTH)) as usize).max(1)
}

/// Greedy word wrap on character count. Words longer than a line are split.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for source_line in text.lines() {
        let mut current = String::new();
        for word in source_line.split_whitespace() {
            let mut word = word;
            while word.chars().count() > max_chars {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let split = word
                    .char_indices()
                    .nth(max_chars)
                    .map_or(word.len(), |(i, _)| i);
                lines.push(word[..split].to_string());
                word = &word[split..];
            }
            if word.is_empty() {
                continue;
            }
            let needed = current.chars().count() + usize::from(!current.is_empty()) + word.chars().count();
            if needed > max_chars && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }
    lines
}
