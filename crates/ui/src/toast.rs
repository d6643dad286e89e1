use std::time::Duration;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use services::Notifier;
use tutor_core::model::{Toast, ToastDraft, ToastId, ToastQueue, ToastVariant};

/// Scoped toast queue with auto-dismiss.
///
/// Created once by the root component through `use_toast_provider` and
/// dropped with it. Each toast gets its own removal timer; timers are not
/// cancelable and only ever remove the toast they were started for.
#[derive(Clone, Copy)]
pub struct ToastService {
    queue: Signal<ToastQueue>,
    duration: Duration,
}

impl ToastService {
    pub fn push(&self, draft: ToastDraft) -> ToastId {
        let mut queue = self.queue;
        let id = queue.write().push(draft);
        tracing::debug!(toast_id = ?id, "toast shown");
        let duration = self.duration;
        let _ = spawn_forever(async move {
            tokio::time::sleep(duration).await;
            queue.write().dismiss(id);
        });
        id
    }

    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.read().toasts().to_vec()
    }
}

impl Notifier for ToastService {
    fn notify(&self, draft: ToastDraft) {
        self.push(draft);
    }
}

pub fn use_toast_provider(duration: Duration) -> ToastService {
    use_context_provider(|| ToastService {
        queue: Signal::new(ToastQueue::new()),
        duration,
    })
}

#[must_use]
pub fn use_toast() -> ToastService {
    use_context::<ToastService>()
}

/// Renders the visible toasts in insertion order.
#[component]
pub fn Toaster() -> Element {
    let toasts = use_toast().toasts();
    rsx! {
        div { class: "toaster", aria_live: "polite",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: match toast.variant {
                        ToastVariant::Default => "toast",
                        ToastVariant::Destructive => "toast toast--destructive",
                    },
                    if let Some(title) = toast.title.as_ref() {
                        p { class: "toast-title", "{title}" }
                    }
                    if let Some(description) = toast.description.as_ref() {
                        p { class: "toast-description", "{description}" }
                    }
                }
            }
        }
    }
}
