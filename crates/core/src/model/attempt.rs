use chrono::{DateTime, Utc};

use crate::model::topic::{Difficulty, Topic};

/// One answered question in the current app session. Never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct Attempt {
    pub question_text: String,
    pub selected_answer: String,
    pub is_correct: bool,
    pub topic: Topic,
    pub difficulty: Difficulty,
    pub answered_at: DateTime<Utc>,
}

/// Correct/total tally over a slice of attempts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttemptTally {
    pub correct: usize,
    pub total: usize,
}

impl AttemptTally {
    #[must_use]
    pub fn from_attempts(attempts: &[Attempt]) -> Self {
        Self {
            correct: attempts.iter().filter(|attempt| attempt.is_correct).count(),
            total: attempts.len(),
        }
    }
}
