use std::sync::LazyLock;

use neurofocus_core::models::category::Category;
use neurofocus_core::models::profile::{Accent, AssessmentProfile};
use neurofocus_core::models::question::Question;

use crate::Screener;

/// NHS adult screener: the six ASRS v1.1 Part A items used by GPs in the UK
/// as a first step towards referral.
pub struct NhsAdultScreener;

static PROFILE: LazyLock<AssessmentProfile> = LazyLock::new(|| AssessmentProfile {
    id: "nhs_adult".to_string(),
    title: "NHS Adult Screener".to_string(),
    subtitle: "ASRS v1.1 Part A".to_string(),
    description: "The standard 6-question screener used by GPs in the UK as an initial step for referral."
        .to_string(),
    badge: Some("Recommended Start".to_string()),
    accent: Accent::Blue,
    questions: vec![
        Question::new(
            "asrs_a1",
            "How often do you have trouble wrapping up the final details of a project, once the challenging parts have been done?",
            Category::Inattention,
        ),
        Question::new(
            "asrs_a2",
            "How often do you have difficulty getting things in order when you have to do a task that requires organization?",
            Category::Organization,
        ),
        Question::new(
            "asrs_a3",
            "How often do you have problems remembering appointments or obligations?",
            Category::WorkingMemory,
        ),
        Question::new(
            "asrs_a4",
            "When you have a task that requires a lot of thought, how often do you avoid or delay getting started?",
            Category::ExecutiveFunction,
        ),
        Question::new(
            "asrs_a5",
            "How often do you fidget or squirm with your hands or feet when you have to sit down for a long time?",
            Category::Hyperactivity,
        ),
        Question::new(
            "asrs_a6",
            "How often do you feel overly active and compelled to do things, like you were driven by a motor?",
            Category::Hyperactivity,
        ),
    ],
});

impl Screener for NhsAdultScreener {
    fn profile(&self) -> &AssessmentProfile {
        &PROFILE
    }
}
