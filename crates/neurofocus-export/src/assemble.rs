use neurofocus_core::models::diagnosis::{CategoryInsight, DiagnosisResult};
use neurofocus_core::models::ledger::ResponseLedger;
use neurofocus_core::models::profile::AssessmentProfile;
use neurofocus_core::models::report::{DISCLAIMER, ReportDocument, ReportQuestion};

/// Build the report for a finished run.
///
/// The transcript follows profile order with 1-based positions; unanswered
/// questions show as "Never", matching how they were scored.
pub fn assemble(
    profile: &AssessmentProfile,
    ledger: &ResponseLedger,
    diagnosis: &DiagnosisResult,
) -> ReportDocument {
    ReportDocument {
        title: profile.title.clone(),
        subtitle: profile.subtitle.clone(),
        result_category: diagnosis.category.label().to_string(),
        result_description: format!("{}\n\n{DISCLAIMER}", diagnosis.description),
        insights: diagnosis.insights.iter().map(format_insight_line).collect(),
        questions: transcript(profile, ledger),
        disclaimer: DISCLAIMER.to_string(),
    }
}

/// `"<category>: <score>/<max> - <insight>"`
pub fn format_insight_line(insight: &CategoryInsight) -> String {
    format!(
        "{}: {}/{} - {}",
        insight.category.label(),
        insight.score,
        insight.max_score,
        insight.insight_text
    )
}

pub fn transcript(profile: &AssessmentProfile, ledger: &ResponseLedger) -> Vec<ReportQuestion> {
    profile
        .questions
        .iter()
        .enumerate()
        .map(|(i, q)| ReportQuestion {
            index: i as u32 + 1,
            text: q.text.clone(),
            answer: ledger.answer_or_never(&q.id).label().to_string(),
        })
        .collect()
}
