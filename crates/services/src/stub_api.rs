use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use tutor_core::model::{AnswerSubmission, Feedback, Question, QuestionRequest};

use crate::error::TutorApiError;
use crate::tutor_api::TutorApi;

/// What a stubbed endpoint answers with.
#[derive(Clone, Debug)]
pub enum StubReply {
    /// A 2xx response with this JSON body. Shape validation still applies.
    Json(Value),
    /// A non-success status.
    Status(StatusCode),
}

/// In-memory `TutorApi` that replays fixed replies and counts calls.
#[derive(Debug)]
pub struct StubTutorApi {
    question_reply: Mutex<StubReply>,
    feedback_reply: Mutex<StubReply>,
    question_calls: AtomicUsize,
    submit_calls: AtomicUsize,
    last_request: Mutex<Option<QuestionRequest>>,
    last_submission: Mutex<Option<AnswerSubmission>>,
}

impl StubTutorApi {
    #[must_use]
    pub fn new(question_reply: StubReply, feedback_reply: StubReply) -> Self {
        Self {
            question_reply: Mutex::new(question_reply),
            feedback_reply: Mutex::new(feedback_reply),
            question_calls: AtomicUsize::new(0),
            submit_calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
            last_submission: Mutex::new(None),
        }
    }

    pub fn set_question_reply(&self, reply: StubReply) {
        *self
            .question_reply
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = reply;
    }

    pub fn set_feedback_reply(&self, reply: StubReply) {
        *self
            .feedback_reply
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = reply;
    }

    #[must_use]
    pub fn question_calls(&self) -> usize {
        self.question_calls.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn submit_calls(&self) -> usize {
        self.submit_calls.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn last_request(&self) -> Option<QuestionRequest> {
        *self.last_request.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn last_submission(&self) -> Option<AnswerSubmission> {
        self.last_submission
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn reply_body(reply: &Mutex<StubReply>) -> Result<Value, TutorApiError> {
        match &*reply.lock().unwrap_or_else(PoisonError::into_inner) {
            StubReply::Json(body) => Ok(body.clone()),
            StubReply::Status(status) => Err(TutorApiError::HttpStatus(*status)),
        }
    }
}

#[async_trait]
impl TutorApi for StubTutorApi {
    async fn fetch_question(&self, request: QuestionRequest) -> Result<Question, TutorApiError> {
        self.question_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap_or_else(PoisonError::into_inner) = Some(request);
        let body = Self::reply_body(&self.question_reply)?;
        Ok(Question::from_payload(&body)?)
    }

    async fn submit_answer(&self, submission: AnswerSubmission) -> Result<Feedback, TutorApiError> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        *self
            .last_submission
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(submission);
        let body = Self::reply_body(&self.feedback_reply)?;
        Ok(Feedback::from_payload(&body)?)
    }
}
