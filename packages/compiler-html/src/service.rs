//! The collaborator boundary around the pure compiler: where pages come from
//! and where view events go. Transport (HTTP, caching headers) stays with the
//! caller.

use crate::compiler::{compile_page, CompileError, CompileOptions};
use pagesmith_model::Page;
use pagesmith_renderer::Registry;
use std::collections::HashMap;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("page \"{id}\" not found")]
    NotFound { id: String },

    #[error("page store error: {0}")]
    Store(String),

    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// Persistence collaborator: resolves a page record by its external id.
/// The compiler never fetches pages itself.
pub trait PageStore {
    fn page(&self, id: &str) -> Result<Option<Page>, String>;
}

/// Analytics collaborator. Calls are one-way sends, fire-and-forget: the
/// service never blocks on them and never depends on their completion or
/// success.
pub trait ViewLog {
    fn page_view(&self, page_id: &str);
    fn form_submission(&self, page_id: &str, form_id: &str);
}

/// Discards every event.
pub struct NoopViewLog;

impl ViewLog for NoopViewLog {
    fn page_view(&self, _page_id: &str) {}
    fn form_submission(&self, _page_id: &str, _form_id: &str) {}
}

/// Emits events to the tracing subscriber.
pub struct TracingViewLog;

impl ViewLog for TracingViewLog {
    fn page_view(&self, page_id: &str) {
        info!(page = page_id, "page view");
    }

    fn form_submission(&self, page_id: &str, form_id: &str) {
        info!(page = page_id, form = form_id, "form submission");
    }
}

/// In-memory page store for tests and tooling.
#[derive(Default)]
pub struct MemoryPageStore {
    pages: HashMap<String, Page>,
}

impl MemoryPageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, page: Page) {
        self.pages.insert(page.page_id.clone(), page);
    }
}

impl PageStore for MemoryPageStore {
    fn page(&self, id: &str) -> Result<Option<Page>, String> {
        Ok(self.pages.get(id).cloned())
    }
}

/// The caller-facing renderer: resolve a page by id, compile it, and notify
/// the view log on live renders. This is what an HTTP handler or the editor
/// preview sits on top of.
pub struct CompileService<S: PageStore, L: ViewLog> {
    store: S,
    log: L,
    registry: Registry,
    options: CompileOptions,
}

impl<S: PageStore, L: ViewLog> CompileService<S, L> {
    pub fn new(store: S, log: L) -> Self {
        Self {
            store,
            log,
            registry: Registry::standard(),
            options: CompileOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    /// Render a page for publication. Embeds tracking and reports the view.
    pub fn render_live(&self, page_id: &str) -> Result<String, ServiceError> {
        let html = self.render(page_id, false)?;
        self.log.page_view(page_id);
        Ok(html)
    }

    /// Render a page for the editor preview. No tracking, no view event.
    pub fn render_preview(&self, page_id: &str) -> Result<String, ServiceError> {
        self.render(page_id, true)
    }

    fn render(&self, page_id: &str, preview: bool) -> Result<String, ServiceError> {
        let page = self
            .store
            .page(page_id)
            .map_err(ServiceError::Store)?
            .ok_or_else(|| ServiceError::NotFound {
                id: page_id.to_string(),
            })?;
        let options = CompileOptions {
            preview,
            ..self.options.clone()
        };
        Ok(compile_page(&self.registry, &page, &options)?)
    }
}
