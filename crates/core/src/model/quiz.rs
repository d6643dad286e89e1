use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::attempt::Attempt;
use crate::model::feedback::Feedback;
use crate::model::question::{AnswerSubmission, Question};
use crate::model::topic::{Difficulty, QuestionRequest, Selection, Topic};

/// Local validation failures. These never reach the network.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizRuleError {
    #[error("Please select both topic and difficulty")]
    MissingSelection,

    #[error("Please select an answer")]
    MissingAnswer,
}

/// State of the interactive quiz form.
///
/// Transitions are synchronous; the async controller calls `begin_*` before
/// a request and one of `apply_question` / `reveal_feedback` / `settle` after.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuizState {
    selection: Selection,
    question: Option<Question>,
    asked_with: Option<QuestionRequest>,
    selected_answer: Option<String>,
    feedback: Option<Feedback>,
    loading: bool,
    history: Vec<Attempt>,
}

impl QuizState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_selection(selection: Selection) -> Self {
        Self {
            selection,
            ..Self::default()
        }
    }

    // ─── Accessors ─────────────────────────────────────────────────────────────

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    #[must_use]
    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn history(&self) -> &[Attempt] {
        &self.history
    }

    // ─── User input ────────────────────────────────────────────────────────────

    pub fn select_topic(&mut self, topic: Topic) {
        self.selection.topic = Some(topic);
    }

    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.selection.difficulty = Some(difficulty);
    }

    /// Picks an option of the active question.
    ///
    /// Ignored while loading, after feedback is shown, or when `text` is not
    /// one of the options. Returns whether the selection changed.
    pub fn select_answer(&mut self, text: &str) -> bool {
        if self.loading || self.feedback.is_some() {
            return false;
        }
        let Some(question) = self.question.as_ref() else {
            return false;
        };
        if !question.has_option(text) {
            return false;
        }
        self.selected_answer = Some(text.to_string());
        true
    }

    // ─── Request lifecycle ─────────────────────────────────────────────────────

    /// Checks the selection and marks a question request as in flight.
    ///
    /// # Errors
    ///
    /// Returns `QuizRuleError::MissingSelection` without touching state when
    /// topic or difficulty is unset.
    pub fn begin_question_request(&mut self) -> Result<QuestionRequest, QuizRuleError> {
        let request = self
            .selection
            .complete()
            .ok_or(QuizRuleError::MissingSelection)?;
        self.loading = true;
        Ok(request)
    }

    /// Replaces the question and clears the previous answer and feedback.
    pub fn apply_question(&mut self, request: QuestionRequest, question: Question) {
        self.question = Some(question);
        self.asked_with = Some(request);
        self.selected_answer = None;
        self.feedback = None;
        self.loading = false;
    }

    /// Checks that a question and an answer are present and marks the
    /// submission as in flight.
    ///
    /// # Errors
    ///
    /// Returns `QuizRuleError::MissingAnswer` without touching state.
    pub fn begin_submission(&mut self) -> Result<AnswerSubmission, QuizRuleError> {
        let (Some(question), Some(answer)) = (self.question.as_ref(), self.selected_answer.as_ref())
        else {
            return Err(QuizRuleError::MissingAnswer);
        };
        let submission = AnswerSubmission {
            question_id: question.id().clone(),
            selected_answer: answer.clone(),
        };
        self.loading = true;
        Ok(submission)
    }

    /// Commits feedback for the active question and records the attempt.
    pub fn reveal_feedback(&mut self, feedback: Feedback, answered_at: DateTime<Utc>) {
        if let (Some(question), Some(answer), Some(asked_with)) = (
            self.question.as_ref(),
            self.selected_answer.as_ref(),
            self.asked_with,
        ) {
            self.history.push(Attempt {
                question_text: question.text().to_string(),
                selected_answer: answer.clone(),
                is_correct: feedback.is_correct(),
                topic: asked_with.topic,
                difficulty: asked_with.difficulty,
                answered_at,
            });
        }
        self.feedback = Some(feedback);
        self.loading = false;
    }

    /// Releases the loading flag after a failed request.
    pub fn settle(&mut self) {
        self.loading = false;
    }
}
