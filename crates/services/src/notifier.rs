use std::sync::{Arc, Mutex, PoisonError};

use tutor_core::model::ToastDraft;

/// Sink for user-visible notices.
///
/// The UI backs this with its toast service; the terminal quiz prints to
/// stderr; tests record.
pub trait Notifier {
    fn notify(&self, draft: ToastDraft);
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify(&self, draft: ToastDraft) {
        (**self).notify(draft);
    }
}

/// Keeps every notice in order. Cloning shares the same list.
#[derive(Clone, Debug, Default)]
pub struct RecordingNotifier {
    drafts: Arc<Mutex<Vec<ToastDraft>>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn drafts(&self) -> Vec<ToastDraft> {
        self.drafts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, draft: ToastDraft) {
        self.drafts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(draft);
    }
}
