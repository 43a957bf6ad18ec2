use crate::document::{emit_document, Context};
use pagesmith_model::{Page, PageComponent};
use pagesmith_renderer::{Registry, RenderInput, RenderedFragment};
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during page compilation.
///
/// Per-component failures never surface here; they degrade to placeholder
/// comments inside the document. This enum is for document-level failures
/// only, where the caller should report an error instead of returning
/// partial HTML.
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("invalid page record: {0}")]
    Model(#[from] pagesmith_model::ModelError),

    #[error("compilation error: {0}")]
    Generic(String),
}

impl From<String> for CompileError {
    fn from(s: String) -> Self {
        CompileError::Generic(s)
    }
}

impl From<&str> for CompileError {
    fn from(s: &str) -> Self {
        CompileError::Generic(s.to_string())
    }
}

/// Options for page compilation.
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Preview renders suppress tracking so editor activity never pollutes
    /// analytics. This is the one flag beyond the page itself that affects
    /// output.
    pub preview: bool,
    /// Pretty print the document scaffolding
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            preview: false,
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

/// Compile a page with the standard component palette and default formatting.
pub fn compile(page: &Page, preview: bool) -> Result<String, CompileError> {
    let options = CompileOptions {
        preview,
        ..Default::default()
    };
    compile_page(&Registry::standard(), page, &options)
}

/// Compile a page to a complete HTML document.
///
/// Walks the top-level components in page order (order defines visual
/// stacking and assistive-technology reading order), renders each one with
/// failure containment, unions the runtime requirements across all fragments,
/// and emits the document around them.
pub fn compile_page(
    registry: &Registry,
    page: &Page,
    options: &CompileOptions,
) -> Result<String, CompileError> {
    if let Err(error) = page.validate() {
        warn!(page = %page.page_id, %error, "page failed validation, compiling anyway");
    }

    let mut fragments = Vec::with_capacity(page.components.len());
    let mut requirements = BTreeSet::new();
    for component in &page.components {
        let fragment = render_component(registry, &page.page_id, component);
        requirements.extend(fragment.requirements.iter().copied());
        fragments.push(fragment);
    }
    debug!(
        page = %page.page_id,
        components = page.components.len(),
        requirements = requirements.len(),
        "rendered fragments"
    );

    let mut ctx = Context::new(options.clone());
    emit_document(&mut ctx, page, &fragments, &requirements);
    Ok(ctx.get_output())
}

/// Render one component and its subtree. Children render first, in order;
/// the parent rule wraps their concatenated fragments.
fn render_component(
    registry: &Registry,
    page_id: &str,
    component: &PageComponent,
) -> RenderedFragment {
    let is_container = registry
        .rule(&component.kind)
        .map(|rule| rule.is_container())
        .unwrap_or(false);

    let mut children_html = String::new();
    let mut child_requirements = BTreeSet::new();
    if is_container {
        for child in &component.children {
            let fragment = render_component(registry, page_id, child);
            child_requirements.extend(fragment.requirements.iter().copied());
            children_html.push_str(&fragment.html);
        }
    } else if !component.children.is_empty() {
        warn!(
            component = %component.id,
            kind = %component.kind,
            "children on a non-container kind are ignored"
        );
    }

    let input = RenderInput {
        page_id,
        id: &component.id,
        props: &component.props,
        children_html: &children_html,
    };
    let mut fragment = registry.render(&component.kind, &input);
    fragment.requirements.extend(child_requirements);
    fragment
}
