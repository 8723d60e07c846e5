//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::{RedirectService, ShortenerService};
use crate::domain::generator::CodeGenerator;
use crate::domain::repositories::UrlStore;

pub type DynShortener = ShortenerService<dyn UrlStore, dyn CodeGenerator>;
pub type DynRedirect = RedirectService<dyn UrlStore>;

#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<DynShortener>,
    pub redirect: Arc<DynRedirect>,
    pub store: Arc<dyn UrlStore>,
}

impl AppState {
    /// Wires both services over one store.
    pub fn new(
        store: Arc<dyn UrlStore>,
        generator: Arc<dyn CodeGenerator>,
        short_domain: impl Into<String>,
        max_code_attempts: usize,
    ) -> Self {
        let shortener = ShortenerService::new(
            store.clone(),
            generator,
            short_domain,
            max_code_attempts,
        );
        let redirect = RedirectService::new(store.clone());

        Self {
            shortener: Arc::new(shortener),
            redirect: Arc::new(redirect),
            store,
        }
    }
}
