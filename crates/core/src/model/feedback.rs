use serde_json::Value;

use crate::error::PayloadError;

/// Aggregate attempt counts the backend reports alongside a grading result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerformanceStats {
    pub total_attempts: u64,
    pub correct_attempts: u64,
    pub success_rate: f64,
}

impl PerformanceStats {
    /// Lenient parse: stats are decoration, so any malformed shape is `None`.
    fn from_value(value: &Value) -> Option<Self> {
        let total_attempts = value.get("total_attempts")?.as_u64()?;
        let correct_attempts = value.get("correct_attempts")?.as_u64()?;
        let success_rate = value
            .get("success_rate")
            .and_then(Value::as_f64)
            .unwrap_or_else(|| {
                if total_attempts == 0 {
                    0.0
                } else {
                    #[allow(clippy::cast_precision_loss)]
                    let rate = correct_attempts as f64 / total_attempts as f64 * 100.0;
                    rate
                }
            });
        Some(Self {
            total_attempts,
            correct_attempts,
            success_rate,
        })
    }
}

/// Grading result for a submitted answer.
#[derive(Clone, Debug, PartialEq)]
pub struct Feedback {
    is_correct: bool,
    explanation: String,
    solution_steps: Vec<String>,
    stats: Option<PerformanceStats>,
}

impl Feedback {
    #[must_use]
    pub fn new(is_correct: bool, explanation: impl Into<String>, solution_steps: Vec<String>) -> Self {
        Self {
            is_correct,
            explanation: explanation.into(),
            solution_steps,
            stats: None,
        }
    }

    #[must_use]
    pub fn with_stats(mut self, stats: PerformanceStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Validates a `POST /submit` response body.
    ///
    /// `is_correct` must be a boolean and `solution_steps` an array of strings.
    /// A missing `explanation` reads as empty.
    ///
    /// # Errors
    ///
    /// Returns `PayloadError` describing the first field that does not match.
    pub fn from_payload(payload: &Value) -> Result<Self, PayloadError> {
        let object = payload.as_object().ok_or(PayloadError::NotAnObject)?;

        let is_correct = object
            .get("is_correct")
            .and_then(Value::as_bool)
            .ok_or(PayloadError::WrongType {
                field: "is_correct",
                expected: "a boolean",
            })?;

        let solution_steps = object
            .get("solution_steps")
            .and_then(Value::as_array)
            .ok_or(PayloadError::WrongType {
                field: "solution_steps",
                expected: "an array",
            })?
            .iter()
            .map(|step| {
                step.as_str().map(str::to_string).ok_or(PayloadError::WrongType {
                    field: "solution_steps[]",
                    expected: "a string",
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let explanation = object
            .get("explanation")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let stats = object
            .get("performance_stats")
            .and_then(PerformanceStats::from_value);

        Ok(Self {
            is_correct,
            explanation,
            solution_steps,
            stats,
        })
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn solution_steps(&self) -> &[String] {
        &self.solution_steps
    }

    #[must_use]
    pub fn stats(&self) -> Option<PerformanceStats> {
        self.stats
    }
}
