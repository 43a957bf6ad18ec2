use pagesmith_common::escape;
use std::collections::BTreeSet;

/// A client-side runtime script that a compiled document must include because
/// some component in it needs post-load behavior.
///
/// The enum order is the order script tags are emitted in; `Requirement`
/// values are collected into a `BTreeSet`, so each script appears exactly
/// once no matter how many components demand it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Requirement {
    /// Slide behavior for `carousel` components.
    Carousel,
    /// Submit handling for `form` components.
    Form,
    /// Show/dismiss behavior for `popup` components.
    Overlay,
}

impl Requirement {
    pub fn script_src(&self) -> &'static str {
        match self {
            Requirement::Carousel => "/static/js/carousel.js",
            Requirement::Form => "/static/js/forms.js",
            Requirement::Overlay => "/static/js/overlay.js",
        }
    }
}

/// The intermediate output of rendering one component: an HTML string plus
/// the runtime requirements it carries. Produced and consumed within a single
/// compilation pass; never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedFragment {
    pub html: String,
    pub requirements: BTreeSet<Requirement>,
}

impl RenderedFragment {
    pub fn html(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            requirements: BTreeSet::new(),
        }
    }

    /// Build a visible-in-source diagnostic comment fragment.
    pub fn comment(text: &str) -> Self {
        Self::html(format!("<!-- pagesmith: {} -->", escape::comment(text)))
    }

    pub fn with_requirement(mut self, requirement: Requirement) -> Self {
        self.requirements.insert(requirement);
        self
    }
}
