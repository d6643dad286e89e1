use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use tutor_core::model::{AnswerSubmission, Feedback, Question, QuestionRequest};

use crate::config::TutorConfig;
use crate::error::TutorApiError;

/// The two backend calls the quiz needs.
#[async_trait]
pub trait TutorApi: Send + Sync {
    /// `POST /questions`
    async fn fetch_question(&self, request: QuestionRequest) -> Result<Question, TutorApiError>;

    /// `POST /submit`
    async fn submit_answer(&self, submission: AnswerSubmission) -> Result<Feedback, TutorApiError>;
}

#[derive(Clone)]
pub struct HttpTutorApi {
    client: Client,
    config: TutorConfig,
}

impl HttpTutorApi {
    #[must_use]
    pub fn new(config: TutorConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &TutorConfig {
        &self.config
    }

    async fn post_json(
        &self,
        path: &str,
        body: &impl serde::Serialize,
    ) -> Result<Value, TutorApiError> {
        let url = self.config.endpoint(path);
        tracing::debug!(%url, "posting to tutor backend");

        let response = self.client.post(url).json(body).send().await?;
        if !response.status().is_success() {
            return Err(TutorApiError::HttpStatus(response.status()));
        }

        Ok(response.json::<Value>().await?)
    }
}

#[async_trait]
impl TutorApi for HttpTutorApi {
    async fn fetch_question(&self, request: QuestionRequest) -> Result<Question, TutorApiError> {
        let body = self.post_json("questions", &request).await?;
        Ok(Question::from_payload(&body)?)
    }

    async fn submit_answer(&self, submission: AnswerSubmission) -> Result<Feedback, TutorApiError> {
        let body = self.post_json("submit", &submission).await?;
        Ok(Feedback::from_payload(&body)?)
    }
}
