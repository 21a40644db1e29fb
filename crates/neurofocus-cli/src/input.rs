//! Answer collection: from a `--answers` list or an interactive prompt.

use std::io::{BufRead, Write};

use neurofocus_core::error::CoreError;
use neurofocus_core::models::answer::{ANSWER_SCALE, AnswerValue};
use neurofocus_instruments::session::{AssessmentRun, RunState};

/// Accepts a severity digit (`0`–`4`) or a scale label (`often`, `Very Often`).
pub fn parse_answer(raw: &str) -> Result<AnswerValue, CoreError> {
    let trimmed = raw.trim();
    match trimmed.parse::<u8>() {
        Ok(value) => AnswerValue::new(value),
        Err(_) => AnswerValue::from_label(trimmed),
    }
}

/// Feed answers in question order. Fewer answers than questions completes the
/// run early; more is an error.
pub fn apply_answers(run: &mut AssessmentRun<'_>, answers: &[u8]) -> eyre::Result<()> {
    let expected = run.profile().questions.len();
    if answers.len() > expected {
        return Err(eyre::eyre!(
            "{} answers given but '{}' has {expected} questions",
            answers.len(),
            run.profile().id
        ));
    }

    for &raw in answers {
        run.answer(AnswerValue::new(raw)?)?;
    }

    if !run.is_completed() {
        tracing::warn!(
            answered = answers.len(),
            expected,
            "fewer answers than questions, unanswered questions count as Never"
        );
        run.complete();
    }
    Ok(())
}

/// Prompt for each question until the run completes. `q` finishes early;
/// end of input does the same.
pub fn prompt_answers<R: BufRead, W: Write>(
    run: &mut AssessmentRun<'_>,
    mut input: R,
    mut out: W,
) -> eyre::Result<()> {
    let total = run.profile().questions.len();
    let mut line = String::new();

    loop {
        let RunState::InProgress { step } = run.state() else {
            break;
        };
        let Some(question) = run.current_question() else {
            break;
        };

        writeln!(out, "\n[{}/{total}] {}", step + 1, question.text)?;
        for (value, label) in ANSWER_SCALE.iter().enumerate() {
            writeln!(out, "  {value}) {label}")?;
        }
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 || line.trim().eq_ignore_ascii_case("q") {
            writeln!(out)?;
            run.complete();
            break;
        }

        match parse_answer(&line) {
            Ok(value) => {
                run.answer(value)?;
            }
            Err(e) => writeln!(out, "{e}; enter 0-4 or a label")?,
        }
    }
    Ok(())
}
