//! Per-kind rendering rules, one small pure struct per kind.

pub mod basic;
pub mod carousel;
pub mod floating_image;
pub mod form;
pub mod popup;

use crate::registry::RenderInput;
use crate::style::StyleMap;
use pagesmith_common::{dom, escape};

/// Open the root tag of a component fragment: derived DOM id, class,
/// `data-kind` scoping attribute, and the assembled style when non-empty.
/// The tag is left open so rules can append kind-specific attributes.
pub(crate) fn root_open(
    tag: &str,
    input: &RenderInput,
    kind: &str,
    class: &str,
    style: &StyleMap,
) -> String {
    let mut html = format!(
        "<{} id=\"{}\" class=\"{}\" data-kind=\"{}\"",
        tag,
        dom::dom_id(input.id),
        class,
        kind
    );
    if let Some(style) = style.attr() {
        html.push_str(&format!(" style=\"{}\"", escape::attr(&style)));
    }
    html
}
