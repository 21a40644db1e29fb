use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::category::Category;
use super::profile::Accent;

/// Overall classification of a completed screener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum LikelihoodBand {
    #[serde(rename = "High Likelihood")]
    HighLikelihood,
    #[serde(rename = "Possible Indications")]
    PossibleIndications,
    #[serde(rename = "Unlikely")]
    Unlikely,
}

impl LikelihoodBand {
    pub fn label(self) -> &'static str {
        match self {
            LikelihoodBand::HighLikelihood => "High Likelihood",
            LikelihoodBand::PossibleIndications => "Possible Indications",
            LikelihoodBand::Unlikely => "Unlikely",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            LikelihoodBand::HighLikelihood => {
                "Your responses suggest a strong alignment with ADHD traits. Discuss with a clinician."
            }
            LikelihoodBand::PossibleIndications => {
                "You show some signs that may be related to attention deficits. Consider discussing with a clinician."
            }
            LikelihoodBand::Unlikely => {
                "Your responses do not currently suggest significant ADHD symptoms."
            }
        }
    }

    pub fn accent(self) -> Accent {
        match self {
            LikelihoodBand::HighLikelihood => Accent::Orange,
            LikelihoodBand::PossibleIndications => Accent::Yellow,
            LikelihoodBand::Unlikely => Accent::Green,
        }
    }

    pub fn from_label(label: &str) -> Option<LikelihoodBand> {
        [
            LikelihoodBand::HighLikelihood,
            LikelihoodBand::PossibleIndications,
            LikelihoodBand::Unlikely,
        ]
        .into_iter()
        .find(|b| b.label() == label)
    }
}

impl fmt::Display for LikelihoodBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Qualitative level of difficulty within one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InsightLevel {
    Significant,
    Moderate,
    Well,
}

impl InsightLevel {
    pub fn text(self) -> &'static str {
        match self {
            InsightLevel::Significant => "Significant difficulty reported.",
            InsightLevel::Moderate => "Moderate difficulty.",
            InsightLevel::Well => "Functioning well.",
        }
    }

    pub fn clinician_note(self, category: Category) -> String {
        let domain = category.label().to_lowercase();
        match self {
            InsightLevel::Significant => {
                format!("Clinician Note: Frequent impairment in {domain}.")
            }
            InsightLevel::Moderate => {
                format!("Clinician Note: Intermittent challenges with {domain}.")
            }
            InsightLevel::Well => "Clinician Note: No significant impairment reported.".to_string(),
        }
    }
}

/// Sub-score and commentary for one category present in a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryInsight {
    pub category: Category,
    pub score: u32,
    pub max_score: u32,
    pub insight_text: String,
    pub clinician_note: String,
}

impl CategoryInsight {
    pub fn new(category: Category, score: u32, max_score: u32, level: InsightLevel) -> Self {
        Self {
            category,
            score,
            max_score,
            insight_text: level.text().to_string(),
            clinician_note: level.clinician_note(category),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosisResult {
    pub score: u32,
    pub max_score: u32,
    pub category: LikelihoodBand,
    pub description: String,
    pub accent: Accent,
    /// Sorted by category label, ascending.
    pub insights: Vec<CategoryInsight>,
}

impl DiagnosisResult {
    /// Fraction of the maximum possible score, in `[0, 1]`.
    pub fn percentage(&self) -> f64 {
        if self.max_score == 0 {
            return 0.0;
        }
        f64::from(self.score) / f64::from(self.max_score)
    }

    pub fn insight(&self, category: Category) -> Option<&CategoryInsight> {
        self.insights.iter().find(|i| i.category == category)
    }
}
