mod feedback_vm;
mod progress_vm;
mod time_fmt;

pub use feedback_vm::{FeedbackVm, map_feedback};
pub use progress_vm::{AttemptRowVm, ProgressVm, map_progress};
