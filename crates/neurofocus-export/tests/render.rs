use neurofocus_core::models::report::{DISCLAIMER, ReportDocument, ReportQuestion};
use neurofocus_export::docx::generate_docx;
use neurofocus_export::render::{render_markdown, render_template};
use neurofocus_export::pdf::generate_pdf;
use neurofocus_export::renderer::{DocxRenderer, MarkdownRenderer, PdfRenderer, ReportRenderer};
use neurofocus_export::styles::DocumentStyles;

fn sample_report() -> ReportDocument {
    ReportDocument {
        title: "NHS Adult Screener".to_string(),
        subtitle: "ASRS v1.1 Part A".to_string(),
        result_category: "High Likelihood".to_string(),
        result_description: format!(
            "Your responses suggest a strong alignment with ADHD traits. Discuss with a clinician.\n\n{DISCLAIMER}"
        ),
        insights: vec![
            "Hyperactivity: 8/8 - Significant difficulty reported.".to_string(),
            "Working Memory: 3/4 - Significant difficulty reported.".to_string(),
        ],
        questions: vec![
            ReportQuestion {
                index: 1,
                text: "How often do you fidget?".to_string(),
                answer: "Very Often".to_string(),
            },
            ReportQuestion {
                index: 2,
                text: "How often do you forget appointments?".to_string(),
                answer: "Often".to_string(),
            },
        ],
        disclaimer: DISCLAIMER.to_string(),
    }
}

#[test]
fn markdown_contains_every_section() {
    let md = render_markdown(&sample_report()).unwrap();

    assert!(md.starts_with("# NHS Adult Screener\n"));
    assert!(md.contains("**Screener Used:** NHS Adult Screener (ASRS v1.1 Part A)"));
    assert!(md.contains("**Result Category:** High Likelihood"));
    assert!(md.contains("## Domain Breakdown"));
    assert!(md.contains("- Hyperactivity: 8/8 - Significant difficulty reported.\n"));
    assert!(md.contains("## Response Transcript"));
    assert!(md.contains("1. How often do you fidget?\n_Response: Very Often_"));
    assert!(md.contains("2. How often do you forget appointments?\n_Response: Often_"));
    assert!(md.trim_end().ends_with(&format!("> {DISCLAIMER}")));
}

#[test]
fn transcript_follows_domain_breakdown() {
    let md = render_markdown(&sample_report()).unwrap();
    let breakdown = md.find("## Domain Breakdown").unwrap();
    let transcript = md.find("## Response Transcript").unwrap();
    assert!(breakdown < transcript);
}

#[test]
fn custom_template_sees_report_fields() {
    let out = render_template(
        "summary.txt",
        "{{ result_category }} ({{ questions | length }} answers)",
        &sample_report(),
    )
    .unwrap();
    assert_eq!(out, "High Likelihood (2 answers)");
}

#[test]
fn malformed_template_is_a_parse_error() {
    let err = render_template("bad.txt", "{% for x in %}", &sample_report()).unwrap_err();
    assert!(matches!(err, neurofocus_export::error::ExportError::TemplateParse(_)));
}

#[test]
fn markdown_renderer_returns_utf8_bytes() {
    let renderer = MarkdownRenderer;
    let bytes = renderer.render(&sample_report()).unwrap();
    assert_eq!(renderer.file_extension(), "md");
    assert!(String::from_utf8(bytes).unwrap().contains("High Likelihood"));
}

#[test]
fn docx_renderer_produces_a_zip_package() {
    let renderer = DocxRenderer::default();
    let bytes = renderer.render(&sample_report()).unwrap();
    assert_eq!(renderer.file_extension(), "docx");
    // DOCX is a ZIP archive: local file header magic "PK\x03\x04".
    assert_eq!(&bytes[..4], b"PK\x03\x04");
}

#[test]
fn generate_docx_accepts_every_supported_line_kind() {
    let rendered = "# Title\n## Section\n- **bold** item\n_italic line_\n> footer\n\nplain **half bold";
    let bytes = generate_docx(rendered, &DocumentStyles::default()).unwrap();
    assert!(!bytes.is_empty());
}

#[test]
fn pdf_renderer_produces_a_pdf_document() {
    let renderer = PdfRenderer::default();
    let bytes = renderer.render(&sample_report()).unwrap();
    assert_eq!(renderer.file_extension(), "pdf");
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn long_transcripts_flow_onto_further_pages() {
    let mut report = sample_report();
    report.questions = (1..=60)
        .map(|index| ReportQuestion {
            index,
            text: "When you have a task that requires a lot of thought, how often do you avoid or delay getting started on it?"
                .to_string(),
            answer: "Sometimes".to_string(),
        })
        .collect();

    let short = generate_pdf(&sample_report(), &DocumentStyles::default()).unwrap();
    let long = generate_pdf(&report, &DocumentStyles::default()).unwrap();
    assert!(long.starts_with(b"%PDF-"));
    assert!(long.len() > short.len());
}

#[test]
fn unbreakable_words_do_not_stall_layout() {
    let mut report = sample_report();
    report.result_description = "x".repeat(2_000);
    let bytes = generate_pdf(&report, &DocumentStyles::default()).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}
