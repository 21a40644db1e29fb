use std::sync::LazyLock;

use neurofocus_core::models::category::Category;
use neurofocus_core::models::profile::{Accent, AssessmentProfile};
use neurofocus_core::models::question::Question;

use crate::Screener;

/// Deep Dive: ten questions, two per domain, across executive function,
/// organization, working memory, impulsivity and emotional regulation.
pub struct DeepDiveAssessment;

static PROFILE: LazyLock<AssessmentProfile> = LazyLock::new(|| {
    let q = |id: &str, text: &str, category: Category| Question::new(id, text, category);

    AssessmentProfile {
        id: "deep_dive".to_string(),
        title: "Deep Dive Assessment".to_string(),
        subtitle: "Multi-Domain Analysis".to_string(),
        description: "A detailed 10-question breakdown covering emotional regulation, memory, and executive function."
            .to_string(),
        badge: Some("Detailed Insights".to_string()),
        accent: Accent::Purple,
        questions: vec![
            q(
                "deep_01",
                "When you have a task that requires a lot of thought, how often do you avoid or delay getting started?",
                Category::ExecutiveFunction,
            ),
            q(
                "deep_02",
                "How often do you have trouble keeping your attention on repetitive work?",
                Category::ExecutiveFunction,
            ),
            q(
                "deep_03",
                "How often do you have difficulty getting things in order when you have to do a task that requires organization?",
                Category::Organization,
            ),
            q(
                "deep_04",
                "How often do you have trouble wrapping up the final details of a project, once the challenging parts have been done?",
                Category::Organization,
            ),
            q(
                "deep_05",
                "How often do you have problems remembering appointments or obligations?",
                Category::WorkingMemory,
            ),
            q(
                "deep_06",
                "Do you often find yourself entering a room and forgetting why you went there?",
                Category::WorkingMemory,
            ),
            q(
                "deep_07",
                "How often do you fidget or squirm with your hands or feet when you have to sit down for a long time?",
                Category::Impulsivity,
            ),
            q(
                "deep_08",
                "How often do you feel overly active and compelled to do things, like you were driven by a motor?",
                Category::Impulsivity,
            ),
            q(
                "deep_09",
                "How often do you feel easily frustrated by small annoyances?",
                Category::EmotionalRegulation,
            ),
            q(
                "deep_10",
                "Do you experience rapid shifts in mood that seem out of proportion to events?",
                Category::EmotionalRegulation,
            ),
        ],
    }
});

impl Screener for DeepDiveAssessment {
    fn profile(&self) -> &AssessmentProfile {
        &PROFILE
    }
}
