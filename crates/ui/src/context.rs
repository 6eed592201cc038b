use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::QuizType;
use services::{QuizBackend, RestartPolicy};

/// What the composition root (e.g. `crates/app`) provides to the UI.
pub trait UiApp: Send + Sync {
    fn backend(&self) -> Arc<dyn QuizBackend>;
    fn clock(&self) -> Clock;
    fn restart_policy(&self) -> RestartPolicy;
    fn default_question_count(&self) -> u32;
    fn default_quiz_type(&self) -> Option<QuizType>;
}

#[derive(Clone)]
pub struct AppContext {
    backend: Arc<dyn QuizBackend>,
    clock: Clock,
    restart_policy: RestartPolicy,
    default_question_count: u32,
    default_quiz_type: Option<QuizType>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            backend: app.backend(),
            clock: app.clock(),
            restart_policy: app.restart_policy(),
            default_question_count: app.default_question_count(),
            default_quiz_type: app.default_quiz_type(),
        }
    }

    #[must_use]
    pub fn backend(&self) -> Arc<dyn QuizBackend> {
        Arc::clone(&self.backend)
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn restart_policy(&self) -> RestartPolicy {
        self.restart_policy
    }

    #[must_use]
    pub fn default_question_count(&self) -> u32 {
        self.default_question_count
    }

    #[must_use]
    pub fn default_quiz_type(&self) -> Option<QuizType> {
        self.default_quiz_type
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
