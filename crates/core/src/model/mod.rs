mod attempt;
mod feedback;
mod ids;
mod question;
mod quiz;
mod toast;
mod topic;

pub use ids::{QuestionId, ToastId};

pub use attempt::{Attempt, AttemptTally};
pub use feedback::{Feedback, PerformanceStats};
pub use question::{AnswerSubmission, Question, QuestionOption};
pub use quiz::{QuizRuleError, QuizState};
pub use toast::{Toast, ToastDraft, ToastQueue, ToastVariant};
pub use topic::{Difficulty, ParseChoiceError, QuestionRequest, Selection, Topic};
