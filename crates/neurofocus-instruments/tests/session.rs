use neurofocus_core::models::answer::AnswerValue;
use neurofocus_core::models::diagnosis::LikelihoodBand;
use neurofocus_core::models::profile::{Accent, AssessmentProfile};
use neurofocus_instruments::error::InstrumentError;
use neurofocus_instruments::instruments::nhs_adult::NhsAdultScreener;
use neurofocus_instruments::session::{AssessmentRun, RunState};
use neurofocus_instruments::Screener;

fn answer(v: u8) -> AnswerValue {
    AnswerValue::new(v).unwrap()
}

#[test]
fn answering_advances_until_completed() {
    let profile = NhsAdultScreener.profile();
    let mut run = AssessmentRun::start(profile).unwrap();

    assert_eq!(run.state(), RunState::InProgress { step: 0 });
    assert_eq!(run.current_question().unwrap().id, "asrs_a1");

    for (i, v) in [3, 2, 1, 0, 4].into_iter().enumerate() {
        assert_eq!(run.answer(answer(v)).unwrap(), RunState::InProgress { step: i + 1 });
    }
    assert_eq!(run.current_question().unwrap().id, "asrs_a6");

    assert_eq!(run.answer(answer(2)).unwrap(), RunState::Completed);
    assert!(run.is_completed());
    assert!(run.current_question().is_none());
    assert_eq!(run.progress(), 1.0);
    assert_eq!(run.ledger().len(), 6);
}

#[test]
fn progress_is_step_over_question_count() {
    let mut run = AssessmentRun::start(NhsAdultScreener.profile()).unwrap();
    assert_eq!(run.progress(), 0.0);
    run.answer(answer(1)).unwrap();
    run.answer(answer(1)).unwrap();
    run.answer(answer(1)).unwrap();
    assert_eq!(run.progress(), 0.5);
}

#[test]
fn answering_after_completion_fails() {
    let mut run = AssessmentRun::start(NhsAdultScreener.profile()).unwrap();
    run.complete();
    let err = run.answer(answer(1)).unwrap_err();
    assert!(matches!(err, InstrumentError::RunCompleted { .. }));
}

#[test]
fn revise_overwrites_without_moving_the_step() {
    let mut run = AssessmentRun::start(NhsAdultScreener.profile()).unwrap();
    run.answer(answer(1)).unwrap();
    run.revise("asrs_a1", answer(4)).unwrap();

    assert_eq!(run.state(), RunState::InProgress { step: 1 });
    assert_eq!(run.ledger().get("asrs_a1"), Some(answer(4)));
    assert_eq!(run.ledger().len(), 1);
}

#[test]
fn revise_rejects_unknown_questions() {
    let mut run = AssessmentRun::start(NhsAdultScreener.profile()).unwrap();
    let err = run.revise("deep_01", answer(4)).unwrap_err();
    assert!(matches!(err, InstrumentError::UnknownQuestion { question_id, .. } if question_id == "deep_01"));
}

#[test]
fn forced_completion_scores_unanswered_as_zero() {
    let mut run = AssessmentRun::start(NhsAdultScreener.profile()).unwrap();
    run.answer(answer(4)).unwrap();
    run.complete();

    let result = run.diagnosis().unwrap();
    assert_eq!(result.score, 4);
    assert_eq!(result.category, LikelihoodBand::Unlikely);
}

#[test]
fn reset_discards_answers_and_returns_to_start() {
    let mut run = AssessmentRun::start(NhsAdultScreener.profile()).unwrap();
    for _ in 0..6 {
        run.answer(answer(4)).unwrap();
    }
    assert!(run.is_completed());

    run.reset();
    assert_eq!(run.state(), RunState::InProgress { step: 0 });
    assert!(run.ledger().is_empty());
    assert_eq!(run.diagnosis().unwrap().score, 0);
}

#[test]
fn empty_profile_cannot_start() {
    let profile = AssessmentProfile {
        id: "empty".to_string(),
        title: "Empty".to_string(),
        subtitle: String::new(),
        description: String::new(),
        badge: None,
        accent: Accent::Gray,
        questions: Vec::new(),
    };
    assert!(matches!(
        AssessmentRun::start(&profile),
        Err(InstrumentError::InvalidProfile { .. })
    ));
}
