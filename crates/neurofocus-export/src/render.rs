use tera::{Context, Tera};

use neurofocus_core::models::report::ReportDocument;

use crate::error::ExportError;

/// Built-in report layout: header, result, domain breakdown, transcript,
/// footer disclaimer. Uses the Markdown subset understood by
/// [`crate::docx::generate_docx`].
pub const DEFAULT_TEMPLATE: &str = r#"# {{ title }}

**Screener Used:** {{ title }} ({{ subtitle }})

**Result Category:** {{ result_category }}

{{ result_description }}

## Domain Breakdown

{% for line in insights -%}
- {{ line }}
{% endfor %}
## Response Transcript

{% for q in questions -%}
{{ q.index }}. {{ q.text }}
_Response: {{ q.answer }}_

{% endfor -%}
> {{ disclaimer }}
"#;

const DEFAULT_TEMPLATE_NAME: &str = "report.md";

/// Render a report with the built-in layout.
pub fn render_markdown(report: &ReportDocument) -> Result<String, ExportError> {
    render_template(DEFAULT_TEMPLATE_NAME, DEFAULT_TEMPLATE, report)
}

/// Render a Tera template with a ReportDocument.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
/// The report fields become the template context variables.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    report: &ReportDocument,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    // Convert the report to a Tera context via serde_json
    let value = serde_json::to_value(report)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}
