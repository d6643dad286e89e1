use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tutor_core::model::QuizState;

use crate::error::{ApiAction, QuizError};
use crate::notifier::Notifier;
use crate::tutor_api::TutorApi;
use crate::Clock;

/// Somewhere the controller can read and mutate `QuizState`.
///
/// The UI implements this for its reactive signal so every transition
/// re-renders; tests and the terminal quiz use `SharedQuizState`.
pub trait QuizStore {
    fn update<R>(&self, f: impl FnOnce(&mut QuizState) -> R) -> R;

    fn snapshot(&self) -> QuizState {
        self.update(|state| state.clone())
    }

    /// Clears the loading flag of a request that will never settle.
    fn release(&self) {
        self.update(QuizState::settle);
    }
}

/// Mutex-backed store.
#[derive(Clone, Debug, Default)]
pub struct SharedQuizState(Arc<Mutex<QuizState>>);

impl SharedQuizState {
    #[must_use]
    pub fn new(state: QuizState) -> Self {
        Self(Arc::new(Mutex::new(state)))
    }
}

impl QuizStore for SharedQuizState {
    fn update<R>(&self, f: impl FnOnce(&mut QuizState) -> R) -> R {
        let mut guard = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard)
    }
}

/// Marks a request as in flight. Dropping it before `finish` releases the
/// loading flag, so a cancelled task cannot leave the form disabled.
struct InFlight<'a, S: QuizStore> {
    store: &'a S,
    finished: bool,
}

impl<'a, S: QuizStore> InFlight<'a, S> {
    fn new(store: &'a S) -> Self {
        Self {
            store,
            finished: false,
        }
    }

    fn finish(mut self) {
        self.finished = true;
    }
}

impl<S: QuizStore> Drop for InFlight<'_, S> {
    fn drop(&mut self) {
        if !self.finished {
            tracing::debug!("quiz request dropped before settling");
            self.store.release();
        }
    }
}

/// Drives the question/answer round trips against the backend.
///
/// Every failure is reported through the notifier and also returned, and
/// the loading flag is released on every path. After a valid grading
/// response, feedback is held back for `feedback_reveal_delay` while loading
/// stays on.
#[derive(Clone)]
pub struct QuizController<S, N> {
    api: Arc<dyn TutorApi>,
    store: S,
    notifier: N,
    feedback_reveal_delay: Duration,
    clock: Clock,
}

impl<S: QuizStore, N: Notifier> QuizController<S, N> {
    #[must_use]
    pub fn new(api: Arc<dyn TutorApi>, store: S, notifier: N) -> Self {
        Self {
            api,
            store,
            notifier,
            feedback_reveal_delay: crate::config::DEFAULT_FEEDBACK_REVEAL_DELAY,
            clock: Clock::default_clock(),
        }
    }

    #[must_use]
    pub fn with_feedback_reveal_delay(mut self, delay: Duration) -> Self {
        self.feedback_reveal_delay = delay;
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch a question for the current selection.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Rule` when topic or difficulty is missing (no
    /// request is sent) and `QuizError::Api` for transport, status, or shape
    /// failures. Question state is untouched on error.
    pub async fn request_question(&self) -> Result<(), QuizError> {
        let request = match self.store.update(QuizState::begin_question_request) {
            Ok(request) => request,
            Err(rule) => return Err(self.report(rule.into())),
        };
        let in_flight = InFlight::new(&self.store);

        match self.api.fetch_question(request).await {
            Ok(question) => {
                tracing::info!(question_id = %question.id(), topic = %request.topic, "question loaded");
                self.store
                    .update(|state| state.apply_question(request, question));
                in_flight.finish();
                Ok(())
            }
            Err(source) => {
                self.store.update(QuizState::settle);
                in_flight.finish();
                Err(self.report(QuizError::Api {
                    action: ApiAction::FetchQuestion,
                    source,
                }))
            }
        }
    }

    /// Alias used by the "Next question" button.
    ///
    /// # Errors
    ///
    /// Same as `request_question`.
    pub async fn next_question(&self) -> Result<(), QuizError> {
        self.request_question().await
    }

    /// Submit the selected option for grading.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Rule` when no question or answer is selected and
    /// `QuizError::Api` for transport, status, or shape failures. Errors
    /// release loading immediately; only a valid response waits out the
    /// reveal delay. Dropping the future during the delay discards the
    /// feedback and releases loading.
    pub async fn submit_answer(&self) -> Result<(), QuizError> {
        let submission = match self.store.update(QuizState::begin_submission) {
            Ok(submission) => submission,
            Err(rule) => return Err(self.report(rule.into())),
        };
        let in_flight = InFlight::new(&self.store);

        let feedback = match self.api.submit_answer(submission).await {
            Ok(feedback) => feedback,
            Err(source) => {
                self.store.update(QuizState::settle);
                in_flight.finish();
                return Err(self.report(QuizError::Api {
                    action: ApiAction::SubmitAnswer,
                    source,
                }));
            }
        };

        if !self.feedback_reveal_delay.is_zero() {
            tokio::time::sleep(self.feedback_reveal_delay).await;
        }

        let answered_at = self.clock.now();
        tracing::info!(is_correct = feedback.is_correct(), "feedback revealed");
        self.store
            .update(|state| state.reveal_feedback(feedback, answered_at));
        in_flight.finish();
        Ok(())
    }

    fn report(&self, err: QuizError) -> QuizError {
        match &err {
            QuizError::Rule(rule) => tracing::debug!(%rule, "quiz action rejected"),
            QuizError::Api { .. } => tracing::warn!(error = %err, "tutor backend call failed"),
        }
        self.notifier.notify(err.notice());
        err
    }
}
