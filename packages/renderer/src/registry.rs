use crate::fragment::RenderedFragment;
use crate::kinds;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("unknown component kind \"{kind}\"")]
    UnknownKind { kind: String },

    #[error("invalid props for \"{kind}\" component: {source}")]
    InvalidProps {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize behavior options for \"{kind}\" component: {source}")]
    Options {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Everything a rendering rule may read. Rules are pure functions of this
/// input; children arrive already rendered, in their visual order.
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    /// The page being compiled; used for page-scoped defaults such as the
    /// form submission endpoint.
    pub page_id: &'a str,
    /// The component id; used to derive the DOM id.
    pub id: &'a str,
    /// The raw prop bag, decoded per kind via [`crate::normalize`].
    pub props: &'a Value,
    /// Concatenated child fragments. Empty for non-container kinds.
    pub children_html: &'a str,
}

/// One rendering rule: kind tag in, HTML fragment out.
pub trait RenderRule: Send + Sync {
    /// The kind tag this rule is registered under.
    fn kind(&self) -> &'static str;

    /// Container kinds consume nested children; for every other kind the
    /// compiler skips child rendering.
    fn is_container(&self) -> bool {
        false
    }

    fn render(&self, input: &RenderInput) -> Result<RenderedFragment, RenderError>;
}

/// The component registry: one rule per kind, registered once at startup.
///
/// Adding a kind is a closed, auditable change: implement [`RenderRule`] and
/// add one line to [`Registry::standard`].
pub struct Registry {
    rules: BTreeMap<&'static str, Box<dyn RenderRule>>,
}

impl Registry {
    pub fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// The standard palette.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(kinds::basic::SectionRule));
        registry.register(Box::new(kinds::basic::HeadingRule));
        registry.register(Box::new(kinds::basic::TextRule));
        registry.register(Box::new(kinds::basic::ImageRule));
        registry.register(Box::new(kinds::basic::ButtonRule));
        registry.register(Box::new(kinds::basic::DividerRule));
        registry.register(Box::new(kinds::basic::SpacerRule));
        registry.register(Box::new(kinds::basic::VideoRule));
        registry.register(Box::new(kinds::basic::HtmlRule));
        registry.register(Box::new(kinds::form::FormRule));
        registry.register(Box::new(kinds::carousel::CarouselRule));
        registry.register(Box::new(kinds::floating_image::FloatingImageRule));
        registry.register(Box::new(kinds::popup::PopupRule));
        registry
    }

    pub fn register(&mut self, rule: Box<dyn RenderRule>) {
        self.rules.insert(rule.kind(), rule);
    }

    pub fn rule(&self, kind: &str) -> Option<&dyn RenderRule> {
        self.rules.get(kind).map(|rule| rule.as_ref())
    }

    /// Render one component, surfacing rule errors to the caller.
    pub fn try_render(
        &self,
        kind: &str,
        input: &RenderInput,
    ) -> Result<RenderedFragment, RenderError> {
        let rule = self.rule(kind).ok_or_else(|| RenderError::UnknownKind {
            kind: kind.to_string(),
        })?;
        rule.render(input)
    }

    /// Render one component, degrading any failure to a diagnostic comment so
    /// a single bad component never blocks the rest of the page.
    pub fn render(&self, kind: &str, input: &RenderInput) -> RenderedFragment {
        match self.try_render(kind, input) {
            Ok(fragment) => fragment,
            Err(RenderError::UnknownKind { kind }) => {
                warn!(component = input.id, kind = %kind, "unknown component kind");
                RenderedFragment::comment(&format!(
                    "unknown component kind \"{}\" (id \"{}\")",
                    kind, input.id
                ))
            }
            Err(error) => {
                warn!(component = input.id, kind = %kind, %error, "component failed to render");
                RenderedFragment::comment(&format!(
                    "component \"{}\" ({}) failed: {}",
                    input.id, kind, error
                ))
            }
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}
