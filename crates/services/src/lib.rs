#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod notifier;
pub mod quiz_controller;
pub mod stub_api;
pub mod tutor_api;

pub use reqwest::StatusCode;
pub use tutor_core::Clock;

pub use config::{ConfigError, TutorConfig};
pub use error::{ApiAction, QuizError, TutorApiError};
pub use notifier::{Notifier, RecordingNotifier};
pub use quiz_controller::{QuizController, QuizStore, SharedQuizState};
pub use stub_api::{StubReply, StubTutorApi};
pub use tutor_api::{HttpTutorApi, TutorApi};
