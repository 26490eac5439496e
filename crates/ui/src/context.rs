use std::sync::Arc;

use services::SessionHandle;

pub trait UiApp: Send + Sync {
    fn session(&self) -> SessionHandle;
    fn question_count(&self) -> u8;
    fn time_limit_secs(&self) -> u32;
}

#[derive(Clone)]
pub struct AppContext {
    session: SessionHandle,
    question_count: u8,
    time_limit_secs: u32,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            session: app.session(),
            question_count: app.question_count(),
            time_limit_secs: app.time_limit_secs(),
        }
    }

    #[must_use]
    pub fn session(&self) -> SessionHandle {
        self.session.clone()
    }

    #[must_use]
    pub fn question_count(&self) -> u8 {
        self.question_count
    }

    #[must_use]
    pub fn time_limit_minutes(&self) -> u32 {
        self.time_limit_secs.div_ceil(60)
    }
}

// Provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
