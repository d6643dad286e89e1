use tutor_core::model::{Attempt, AttemptTally};

use crate::vm::time_fmt::format_time_of_day;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttemptRowVm {
    pub question: String,
    pub answer: String,
    pub result_label: &'static str,
    pub is_correct: bool,
    pub scope_label: String,
    pub answered_at_str: String,
}

impl From<&Attempt> for AttemptRowVm {
    fn from(attempt: &Attempt) -> Self {
        Self {
            question: attempt.question_text.clone(),
            answer: attempt.selected_answer.clone(),
            result_label: if attempt.is_correct {
                "Correct"
            } else {
                "Incorrect"
            },
            is_correct: attempt.is_correct,
            scope_label: format!("{} · {}", attempt.topic.label(), attempt.difficulty.label()),
            answered_at_str: format_time_of_day(attempt.answered_at),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub summary_label: String,
    pub rows: Vec<AttemptRowVm>,
}

/// Newest attempt first.
#[must_use]
pub fn map_progress(attempts: &[Attempt]) -> ProgressVm {
    let tally = AttemptTally::from_attempts(attempts);
    let summary_label = if tally.total == 0 {
        "No questions answered yet.".to_string()
    } else {
        format!("{} of {} correct", tally.correct, tally.total)
    };
    ProgressVm {
        summary_label,
        rows: attempts.iter().rev().map(AttemptRowVm::from).collect(),
    }
}
