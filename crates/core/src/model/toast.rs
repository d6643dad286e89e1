use crate::model::ids::ToastId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// Toast content before it gets an id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub variant: ToastVariant,
}

impl ToastDraft {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn destructive(mut self) -> Self {
        self.variant = ToastVariant::Destructive;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub variant: ToastVariant,
}

/// Ordered list of visible toasts.
///
/// Unbounded and never deduplicated. Removal timers live with whoever owns
/// the queue; the queue only knows how to add and drop entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a toast with a fresh random id and returns that id.
    pub fn push(&mut self, draft: ToastDraft) -> ToastId {
        let id = ToastId::random();
        self.toasts.push(Toast {
            id,
            title: draft.title,
            description: draft.description,
            variant: draft.variant,
        });
        id
    }

    /// Removes the toast with `id`. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_insertion_order() {
        let mut queue = ToastQueue::new();
        queue.push(ToastDraft::new("first"));
        queue.push(ToastDraft::new("second").destructive());
        let titles: Vec<_> = queue
            .toasts()
            .iter()
            .map(|toast| toast.title.as_deref().unwrap())
            .collect();
        assert_eq!(titles, vec!["first", "second"]);
        assert_eq!(queue.toasts()[1].variant, ToastVariant::Destructive);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut queue = ToastQueue::new();
        let first = queue.push(ToastDraft::new("same"));
        let second = queue.push(ToastDraft::new("same"));
        assert!(queue.dismiss(first));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.toasts()[0].id, second);
        assert!(!queue.dismiss(first));
    }

    #[test]
    fn draft_builder_sets_description() {
        let draft = ToastDraft::new("Error").description("Please try again.");
        assert_eq!(draft.description.as_deref(), Some("Please try again."));
        assert_eq!(draft.variant, ToastVariant::Default);
    }
}
