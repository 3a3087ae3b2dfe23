use std::sync::Arc;

use study_core::model::Deck;

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn deck(&self) -> Arc<Deck>;

    /// Zero-based card to open on. Must be inside the deck.
    fn start_index(&self) -> usize;

    /// Window and page title.
    fn title(&self) -> String;
}

#[derive(Clone)]
pub struct AppContext {
    deck: Arc<Deck>,
    start_index: usize,
    title: String,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &dyn UiApp) -> Self {
        Self {
            deck: app.deck(),
            start_index: app.start_index(),
            title: app.title(),
        }
    }

    #[must_use]
    pub fn deck(&self) -> Arc<Deck> {
        Arc::clone(&self.deck)
    }

    #[must_use]
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    #[must_use]
    pub fn title(&self) -> String {
        self.title.clone()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &dyn UiApp) -> AppContext {
    AppContext::new(app)
}
