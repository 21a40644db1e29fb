use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// Convert the Markdown produced by the report template into a DOCX package.
///
/// Only the line shapes that template emits are recognised:
/// - `# Heading` → DOCX Heading 1
/// - `## Heading` → DOCX Heading 2
/// - `- item` → bullet list item (prefixed with bullet character)
/// - `**bold**` → bold run
/// - `_whole line_` → italic paragraph (transcript responses)
/// - `> note` → small italic paragraph (disclaimer footer)
/// - Everything else → normal paragraph
pub fn generate_docx(rendered: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size, styles))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size, styles));

    for line in rendered.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            docx = docx.add_paragraph(Paragraph::new());
            continue;
        }

        if let Some(text) = trimmed.strip_prefix("## ") {
            docx = docx.add_paragraph(heading_paragraph(text, "Heading2"));
        } else if let Some(text) = trimmed.strip_prefix("# ") {
            docx = docx.add_paragraph(heading_paragraph(text, "Heading1"));
        } else if let Some(text) = trimmed.strip_prefix("- ") {
            docx = docx.add_paragraph(bullet_paragraph(text, styles));
        } else if let Some(text) = trimmed.strip_prefix("> ") {
            docx = docx.add_paragraph(italic_paragraph(text, styles.footnote_size, styles));
        } else if let Some(text) = italic_line(trimmed) {
            docx = docx.add_paragraph(italic_paragraph(text, styles.body_size, styles));
        } else {
            docx = docx.add_paragraph(body_paragraph(trimmed, styles));
        }
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

fn italic_line(text: &str) -> Option<&str> {
    text.strip_prefix('_')?
        .strip_suffix('_')
        .filter(|inner| !inner.is_empty())
}

fn heading_style(style_id: &str, name: &str, size_pt: usize, styles: &DocumentStyles) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
        .bold()
        .fonts(RunFonts::new().ascii(&styles.heading_font))
}

fn heading_paragraph(text: &str, style_id: &str) -> Paragraph {
    Paragraph::new()
        .style(style_id)
        .add_run(Run::new().add_text(text))
}

fn bullet_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let bullet_run = body_run("\u{2022} ", styles);

    let mut para = Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(bullet_run);

    for run in parse_inline(text, styles) {
        para = para.add_run(run);
    }

    para
}

fn italic_paragraph(text: &str, size_pt: usize, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().align(AlignmentType::Left).add_run(
        Run::new()
            .add_text(text)
            .italic()
            .size(size_pt * 2)
            .fonts(RunFonts::new().ascii(&styles.body_font)),
    )
}

fn body_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let mut para = Paragraph::new().align(AlignmentType::Left);
    for run in parse_inline(text, styles) {
        para = para.add_run(run);
    }
    para
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

/// Parse simple inline formatting: **bold** segments.
fn parse_inline(text: &str, styles: &DocumentStyles) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut remaining = text;

    while let Some(start) = remaining.find("**") {
        let before = &remaining[..start];
        if !before.is_empty() {
            runs.push(body_run(before, styles));
        }

        let after_start = &remaining[start + 2..];
        if let Some(end) = after_start.find("**") {
            runs.push(body_run(&after_start[..end], styles).bold());
            remaining = &after_start[end + 2..];
        } else {
            // Unclosed marker: the rest stays plain.
            runs.push(body_run(remaining, styles));
            return runs;
        }
    }

    if !remaining.is_empty() {
        runs.push(body_run(remaining, styles));
    }

    runs
}
