use dioxus::prelude::*;
use services::QuizStore;
use tutor_core::model::QuizState;

/// Reactive `QuizState` shared by the tutor and progress views.
#[derive(Clone, Copy)]
pub struct QuizSignal(Signal<QuizState>);

impl QuizSignal {
    /// Subscribing read for rendering.
    #[must_use]
    pub fn state(&self) -> QuizState {
        self.0.read().clone()
    }
}

impl QuizStore for QuizSignal {
    fn update<R>(&self, f: impl FnOnce(&mut QuizState) -> R) -> R {
        let mut signal = self.0;
        let mut state = signal.write();
        f(&mut *state)
    }

    fn snapshot(&self) -> QuizState {
        self.0.peek().clone()
    }

    // May run from a task dropped during teardown, after the signal is gone.
    fn release(&self) {
        let mut signal = self.0;
        if let Ok(mut state) = signal.try_write() {
            state.settle();
        }
    }
}

pub fn use_quiz_provider() -> QuizSignal {
    use_context_provider(|| QuizSignal(Signal::new(QuizState::new())))
}

#[must_use]
pub fn use_quiz() -> QuizSignal {
    use_context::<QuizSignal>()
}
