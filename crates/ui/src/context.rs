use std::sync::Arc;

use services::{GenerationService, RelayHandle};

/// What the composition root (`crates/app`) provides to the UI.
pub trait UiApp: Send + Sync {
    fn generation(&self) -> Arc<GenerationService>;
    fn relay(&self) -> RelayHandle;
}

#[derive(Clone)]
pub struct AppContext {
    generation: Arc<GenerationService>,
    relay: RelayHandle,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            generation: app.generation(),
            relay: app.relay(),
        }
    }

    #[must_use]
    pub fn generation(&self) -> Arc<GenerationService> {
        Arc::clone(&self.generation)
    }

    /// Channel to the background relay. Not yet wired to the "fetch by URL"
    /// button, which still only reports its in-development status.
    #[must_use]
    pub fn relay(&self) -> RelayHandle {
        self.relay.clone()
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
