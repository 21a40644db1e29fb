//! Linear-sum scoring over a profile and a (possibly partial) ledger.
//!
//! Unanswered questions count as "Never" (0). Thresholds are compared with
//! integer cross-multiplication, so a band boundary is hit exactly.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use ts_rs::TS;

use neurofocus_core::models::answer::MAX_ANSWER_VALUE;
use neurofocus_core::models::category::Category;
use neurofocus_core::models::diagnosis::{
    CategoryInsight, DiagnosisResult, InsightLevel, LikelihoodBand,
};
use neurofocus_core::models::ledger::ResponseLedger;
use neurofocus_core::models::profile::AssessmentProfile;
use neurofocus_core::models::question::Question;

use crate::error::InstrumentError;

/// Overall percentage at or above which the result is "High Likelihood".
pub const HIGH_LIKELIHOOD_PERCENT: u32 = 60;
/// Overall percentage at or above which the result is "Possible Indications".
pub const POSSIBLE_INDICATIONS_PERCENT: u32 = 35;
/// Category percentage at or above which difficulty is "significant".
pub const SIGNIFICANT_PERCENT: u32 = 75;
/// Category percentage at or above which difficulty is "moderate".
pub const MODERATE_PERCENT: u32 = 50;

/// A ledger entry that does not belong to the profile being scored.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct LedgerIssue {
    pub question_id: String,
    pub message: String,
}

/// Score a ledger against a profile.
///
/// Fails with [`InstrumentError::InvalidProfile`] when the profile has no
/// questions; never produces a partial result.
pub fn compute(
    profile: &AssessmentProfile,
    ledger: &ResponseLedger,
) -> Result<DiagnosisResult, InstrumentError> {
    if profile.questions.is_empty() {
        return Err(InstrumentError::InvalidProfile {
            profile_id: profile.id.clone(),
        });
    }

    let score = sum_answers(profile.questions.iter(), ledger);
    let max_score = max_score_for(profile.questions.len());
    let band = classify(score, max_score);
    let insights = category_insights(profile, ledger);

    debug!(
        profile_id = %profile.id,
        score,
        max_score,
        band = %band,
        "scored assessment"
    );

    Ok(DiagnosisResult {
        score,
        max_score,
        category: band,
        description: band.description().to_string(),
        accent: band.accent(),
        insights,
    })
}

/// Overall band for `score` out of `max_score`.
pub fn classify(score: u32, max_score: u32) -> LikelihoodBand {
    if at_least(score, max_score, HIGH_LIKELIHOOD_PERCENT) {
        LikelihoodBand::HighLikelihood
    } else if at_least(score, max_score, POSSIBLE_INDICATIONS_PERCENT) {
        LikelihoodBand::PossibleIndications
    } else {
        LikelihoodBand::Unlikely
    }
}

/// Per-category level for `score` out of `max_score`.
pub fn insight_level(score: u32, max_score: u32) -> InsightLevel {
    if at_least(score, max_score, SIGNIFICANT_PERCENT) {
        InsightLevel::Significant
    } else if at_least(score, max_score, MODERATE_PERCENT) {
        InsightLevel::Moderate
    } else {
        InsightLevel::Well
    }
}

/// One insight per category present in the profile, sorted by label.
pub fn category_insights(profile: &AssessmentProfile, ledger: &ResponseLedger) -> Vec<CategoryInsight> {
    let mut insights: Vec<CategoryInsight> = profile
        .categories()
        .into_iter()
        .map(|category| insight_for(category, profile, ledger))
        .collect();

    insights.sort_by(|a, b| a.category.label().cmp(b.category.label()));
    insights
}

fn insight_for(
    category: Category,
    profile: &AssessmentProfile,
    ledger: &ResponseLedger,
) -> CategoryInsight {
    let questions: Vec<&Question> = profile
        .questions
        .iter()
        .filter(|q| q.category == category)
        .collect();

    let score = sum_answers(questions.iter().copied(), ledger);
    let max_score = max_score_for(questions.len());
    CategoryInsight::new(category, score, max_score, insight_level(score, max_score))
}

fn sum_answers<'a>(questions: impl Iterator<Item = &'a Question>, ledger: &ResponseLedger) -> u32 {
    questions
        .map(|q| u32::from(ledger.answer_or_never(&q.id).value()))
        .sum()
}

fn max_score_for(question_count: usize) -> u32 {
    question_count as u32 * u32::from(MAX_ANSWER_VALUE)
}

/// `score / max_score >= percent / 100`, without floating point.
fn at_least(score: u32, max_score: u32, percent: u32) -> bool {
    u64::from(score) * 100 >= u64::from(max_score) * u64::from(percent)
}
