use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A symptom domain that questions are tagged with.
///
/// Serialized as its human-readable label (e.g. `"Working Memory"`), which is
/// also the sort key for category insights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    #[serde(rename = "Executive Function")]
    ExecutiveFunction,
    #[serde(rename = "Working Memory")]
    WorkingMemory,
    #[serde(rename = "Impulsivity")]
    Impulsivity,
    #[serde(rename = "Emotional Regulation")]
    EmotionalRegulation,
    #[serde(rename = "Organization Skills")]
    Organization,
    #[serde(rename = "Inattention")]
    Inattention,
    #[serde(rename = "Hyperactivity")]
    Hyperactivity,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::ExecutiveFunction,
        Category::WorkingMemory,
        Category::Impulsivity,
        Category::EmotionalRegulation,
        Category::Organization,
        Category::Inattention,
        Category::Hyperactivity,
    ];

    /// Substituted when a persisted label no longer names a known category.
    pub const DEFAULT: Category = Category::Inattention;

    pub fn label(self) -> &'static str {
        match self {
            Category::ExecutiveFunction => "Executive Function",
            Category::WorkingMemory => "Working Memory",
            Category::Impulsivity => "Impulsivity",
            Category::EmotionalRegulation => "Emotional Regulation",
            Category::Organization => "Organization Skills",
            Category::Inattention => "Inattention",
            Category::Hyperactivity => "Hyperactivity",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::ExecutiveFunction => "Ability to plan, focus, and initiate tasks.",
            Category::WorkingMemory => "Holding information in mind to complete tasks.",
            Category::Impulsivity => "Acting without thinking or interrupting.",
            Category::EmotionalRegulation => "Managing frustration and mood stability.",
            Category::Organization => "Keeping track of time and physical items.",
            Category::Inattention => "Sustaining focus on tasks.",
            Category::Hyperactivity => "Physical restlessness and need for movement.",
        }
    }

    /// Exact label lookup.
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Label lookup for persisted data: unknown labels map to [`Category::DEFAULT`].
    pub fn from_stored_label(label: &str) -> Category {
        Category::from_label(label).unwrap_or(Category::DEFAULT)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_label(s).ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}
