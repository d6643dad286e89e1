use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {raw}")]
pub struct ParseChoiceError {
    kind: &'static str,
    raw: String,
}

/// Math subject area offered by the tutor backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Algebra,
    Geometry,
    Trigonometry,
    Calculus,
    Statistics,
}

impl Topic {
    pub const ALL: [Topic; 5] = [
        Topic::Algebra,
        Topic::Geometry,
        Topic::Trigonometry,
        Topic::Calculus,
        Topic::Statistics,
    ];

    /// Wire value sent to the backend.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Topic::Algebra => "algebra",
            Topic::Geometry => "geometry",
            Topic::Trigonometry => "trigonometry",
            Topic::Calculus => "calculus",
            Topic::Statistics => "statistics",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Topic::Algebra => "Algebra",
            Topic::Geometry => "Geometry",
            Topic::Trigonometry => "Trigonometry",
            Topic::Calculus => "Calculus",
            Topic::Statistics => "Statistics",
        }
    }
}

/// Proficiency level for generated questions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

// ─── Display / FromStr ─────────────────────────────────────────────────────────

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Topic::ALL
            .into_iter()
            .find(|topic| topic.as_str() == needle)
            .ok_or_else(|| ParseChoiceError {
                kind: "topic",
                raw: s.to_string(),
            })
    }
}

impl FromStr for Difficulty {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Difficulty::ALL
            .into_iter()
            .find(|level| level.as_str() == needle)
            .ok_or_else(|| ParseChoiceError {
                kind: "difficulty",
                raw: s.to_string(),
            })
    }
}

/// Topic and difficulty picked by the user. Both must be set before a
/// question can be requested.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub topic: Option<Topic>,
    pub difficulty: Option<Difficulty>,
}

impl Selection {
    #[must_use]
    pub fn new(topic: Option<Topic>, difficulty: Option<Difficulty>) -> Self {
        Self { topic, difficulty }
    }

    /// Returns the request body when both halves are present.
    #[must_use]
    pub fn complete(&self) -> Option<QuestionRequest> {
        Some(QuestionRequest {
            topic: self.topic?,
            difficulty: self.difficulty?,
        })
    }
}

/// Body of `POST /questions`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct QuestionRequest {
    pub topic: Topic,
    pub difficulty: Difficulty,
}
