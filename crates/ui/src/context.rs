use std::sync::Arc;

use services::{Clock, TutorApi, TutorConfig};

pub trait UiApp: Send + Sync {
    fn tutor_api(&self) -> Arc<dyn TutorApi>;
    fn config(&self) -> TutorConfig;

    fn clock(&self) -> Clock {
        Clock::default_clock()
    }
}

#[derive(Clone)]
pub struct AppContext {
    tutor_api: Arc<dyn TutorApi>,
    config: TutorConfig,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            tutor_api: app.tutor_api(),
            config: app.config(),
            clock: app.clock(),
        }
    }

    #[must_use]
    pub fn tutor_api(&self) -> Arc<dyn TutorApi> {
        Arc::clone(&self.tutor_api)
    }

    #[must_use]
    pub fn config(&self) -> &TutorConfig {
        &self.config
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
