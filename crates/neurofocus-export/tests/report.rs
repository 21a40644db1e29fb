use neurofocus_core::models::answer::AnswerValue;
use neurofocus_core::models::category::Category;
use neurofocus_core::models::diagnosis::{CategoryInsight, InsightLevel};
use neurofocus_core::models::ledger::ResponseLedger;
use neurofocus_core::models::profile::AssessmentProfile;
use neurofocus_core::models::report::DISCLAIMER;
use neurofocus_export::assemble::{assemble, format_insight_line};
use neurofocus_instruments::Screener;
use neurofocus_instruments::instruments::nhs_adult::NhsAdultScreener;
use neurofocus_instruments::scoring::compute;

fn ledger_for(profile: &AssessmentProfile, answers: &[u8]) -> ResponseLedger {
    profile
        .questions
        .iter()
        .zip(answers)
        .map(|(q, &v)| (q.id.clone(), AnswerValue::new(v).unwrap()))
        .collect()
}

#[test]
fn transcript_follows_profile_order_with_answer_labels() {
    let profile = NhsAdultScreener.profile();
    let answers = [3, 2, 1, 0, 4, 2];
    let ledger = ledger_for(profile, &answers);
    let diagnosis = compute(profile, &ledger).unwrap();

    let report = assemble(profile, &ledger, &diagnosis);

    assert_eq!(report.questions.len(), 6);
    for (i, entry) in report.questions.iter().enumerate() {
        assert_eq!(entry.index as usize, i + 1);
        assert_eq!(entry.text, profile.questions[i].text);
        assert_eq!(entry.answer, AnswerValue::new(answers[i]).unwrap().label());
    }
    assert_eq!(report.questions[4].index, 5);
    assert_eq!(report.questions[4].answer, "Very Often");
    assert_eq!(report.questions[3].answer, "Never");
}

#[test]
fn unanswered_questions_appear_as_never() {
    let profile = NhsAdultScreener.profile();
    let ledger = ResponseLedger::new();
    let diagnosis = compute(profile, &ledger).unwrap();

    let report = assemble(profile, &ledger, &diagnosis);
    assert!(report.questions.iter().all(|q| q.answer == "Never"));
}

#[test]
fn insight_line_format_is_exact() {
    let insight = CategoryInsight {
        category: Category::WorkingMemory,
        score: 3,
        max_score: 4,
        insight_text: "Moderate difficulty.".to_string(),
        clinician_note: InsightLevel::Moderate.clinician_note(Category::WorkingMemory),
    };
    assert_eq!(format_insight_line(&insight), "Working Memory: 3/4 - Moderate difficulty.");
}

#[test]
fn header_narrative_and_disclaimer() {
    let profile = NhsAdultScreener.profile();
    let ledger = ledger_for(profile, &[3, 2, 1, 0, 4, 2]);
    let diagnosis = compute(profile, &ledger).unwrap();

    let report = assemble(profile, &ledger, &diagnosis);

    assert_eq!(report.title, "NHS Adult Screener");
    assert_eq!(report.subtitle, "ASRS v1.1 Part A");
    // 12 / 24 = 0.5
    assert_eq!(report.result_category, "Possible Indications");
    assert_eq!(
        report.result_description,
        format!("{}\n\n{}", diagnosis.description, DISCLAIMER)
    );
    assert_eq!(
        report.disclaimer,
        "Not a diagnosis. Only a qualified clinician can diagnose ADHD."
    );
}

#[test]
fn insight_lines_keep_diagnosis_order() {
    let profile = NhsAdultScreener.profile();
    let ledger = ledger_for(profile, &[3, 2, 1, 0, 4, 2]);
    let diagnosis = compute(profile, &ledger).unwrap();

    let report = assemble(profile, &ledger, &diagnosis);

    assert_eq!(
        report.insights,
        vec![
            "Executive Function: 0/4 - Functioning well.",
            "Hyperactivity: 6/8 - Significant difficulty reported.",
            "Inattention: 3/4 - Significant difficulty reported.",
            "Organization Skills: 2/4 - Moderate difficulty.",
            "Working Memory: 1/4 - Functioning well.",
        ]
    );
}
