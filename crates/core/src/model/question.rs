use serde::Serialize;
use serde_json::Value;

use crate::error::PayloadError;
use crate::model::ids::QuestionId;

/// One multiple-choice option. Only the text is shown and submitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionOption {
    text: String,
}

impl QuestionOption {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A generated multiple-choice question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: String,
    options: Vec<QuestionOption>,
    solution_steps: Vec<String>,
}

impl Question {
    #[must_use]
    pub fn new(id: QuestionId, text: impl Into<String>, options: Vec<QuestionOption>) -> Self {
        Self {
            id,
            text: text.into(),
            options,
            solution_steps: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_solution_steps(mut self, steps: Vec<String>) -> Self {
        self.solution_steps = steps;
        self
    }

    /// Validates a `POST /questions` response body.
    ///
    /// Requires a non-empty `id`, a non-empty `question_text` and an array
    /// `options` whose entries carry a string `text`. `solution_steps` is
    /// optional and read leniently: non-string entries are skipped. Other
    /// fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns `PayloadError` describing the first field that does not match.
    pub fn from_payload(payload: &Value) -> Result<Self, PayloadError> {
        let object = payload.as_object().ok_or(PayloadError::NotAnObject)?;

        let id = object
            .get("id")
            .and_then(QuestionId::from_value)
            .ok_or(PayloadError::MissingField("id"))?;

        let text = match object.get("question_text") {
            Some(Value::String(text)) if !text.trim().is_empty() => text.clone(),
            Some(Value::String(_)) | None | Some(Value::Null) => {
                return Err(PayloadError::MissingField("question_text"));
            }
            Some(_) => {
                return Err(PayloadError::WrongType {
                    field: "question_text",
                    expected: "a string",
                });
            }
        };

        let raw_options = object
            .get("options")
            .and_then(Value::as_array)
            .ok_or(PayloadError::WrongType {
                field: "options",
                expected: "an array",
            })?;

        let options = raw_options
            .iter()
            .map(|option| {
                option
                    .get("text")
                    .and_then(Value::as_str)
                    .map(QuestionOption::new)
                    .ok_or(PayloadError::WrongType {
                        field: "options[].text",
                        expected: "a string",
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let solution_steps = object
            .get("solution_steps")
            .and_then(Value::as_array)
            .map(|steps| {
                steps
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            id,
            text,
            options,
            solution_steps,
        })
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[QuestionOption] {
        &self.options
    }

    #[must_use]
    pub fn solution_steps(&self) -> &[String] {
        &self.solution_steps
    }

    /// First solution step, shown on request before answering.
    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        self.solution_steps.first().map(String::as_str)
    }

    #[must_use]
    pub fn has_option(&self, text: &str) -> bool {
        self.options.iter().any(|option| option.text == text)
    }
}

/// Body of `POST /submit`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnswerSubmission {
    pub question_id: QuestionId,
    pub selected_answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_question_and_ignores_extra_fields() {
        let payload = json!({
            "id": 1,
            "question_text": "2+2=?",
            "options": [{ "text": "3", "is_correct": false }, { "text": "4", "is_correct": true }],
            "solution_steps": ["Add 2 and 2"],
            "explanation": "Addition."
        });
        let question = Question::from_payload(&payload).unwrap();
        assert_eq!(question.id(), &QuestionId::from(1));
        assert_eq!(question.text(), "2+2=?");
        let texts: Vec<_> = question.options().iter().map(QuestionOption::text).collect();
        assert_eq!(texts, vec!["3", "4"]);
        assert!(question.has_option("4"));
        assert!(!question.has_option("5"));
        assert_eq!(question.hint(), Some("Add 2 and 2"));
    }

    #[test]
    fn solution_steps_are_optional_and_lenient() {
        let bare = json!({ "id": 1, "question_text": "2+2=?", "options": [] });
        let question = Question::from_payload(&bare).unwrap();
        assert!(question.solution_steps().is_empty());
        assert_eq!(question.hint(), None);

        let mixed = json!({
            "id": 1,
            "question_text": "2+2=?",
            "options": [],
            "solution_steps": [7, "Count up from 2", null]
        });
        let question = Question::from_payload(&mixed).unwrap();
        assert_eq!(question.solution_steps(), ["Count up from 2".to_string()]);
        assert_eq!(question.hint(), Some("Count up from 2"));

        let scalar = json!({
            "id": 1,
            "question_text": "2+2=?",
            "options": [],
            "solution_steps": "Add"
        });
        assert!(Question::from_payload(&scalar).unwrap().hint().is_none());
    }

    #[test]
    fn zero_id_is_kept_and_blank_text_is_missing() {
        let zero = json!({ "id": 0, "question_text": "1-1=?", "options": [] });
        assert_eq!(
            Question::from_payload(&zero).unwrap().id(),
            &QuestionId::from(0)
        );

        let blank = json!({ "id": 1, "question_text": "   ", "options": [] });
        assert_eq!(
            Question::from_payload(&blank).unwrap_err(),
            PayloadError::MissingField("question_text")
        );
    }

    #[test]
    fn rejects_missing_id() {
        let payload = json!({ "question_text": "2+2=?", "options": [] });
        assert_eq!(
            Question::from_payload(&payload).unwrap_err(),
            PayloadError::MissingField("id")
        );
    }

    #[test]
    fn rejects_empty_question_text() {
        let payload = json!({ "id": 1, "question_text": "", "options": [] });
        assert_eq!(
            Question::from_payload(&payload).unwrap_err(),
            PayloadError::MissingField("question_text")
        );
    }

    #[test]
    fn rejects_non_array_options() {
        let payload = json!({ "id": 1, "question_text": "2+2=?", "options": "3,4" });
        assert!(matches!(
            Question::from_payload(&payload).unwrap_err(),
            PayloadError::WrongType { field: "options", .. }
        ));
    }

    #[test]
    fn rejects_option_without_text() {
        let payload = json!({ "id": 1, "question_text": "2+2=?", "options": [{ "value": 4 }] });
        assert!(Question::from_payload(&payload).is_err());
    }

    #[test]
    fn rejects_non_object_body() {
        assert_eq!(
            Question::from_payload(&json!([1, 2])).unwrap_err(),
            PayloadError::NotAnObject
        );
    }

    #[test]
    fn submission_serializes_option_text() {
        let submission = AnswerSubmission {
            question_id: QuestionId::from(1),
            selected_answer: "4".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&submission).unwrap(),
            json!({ "question_id": 1, "selected_answer": "4" })
        );
    }
}
