use crate::fragment::{RenderedFragment, Requirement};
use crate::kinds::root_open;
use crate::normalize::normalize;
use crate::registry::{RenderError, RenderInput, RenderRule};
use crate::style::StyleMap;
use pagesmith_common::escape;
use pagesmith_model::props::PopupProps;
use serde::Serialize;

/// Behavior options serialized onto the overlay for the overlay runtime.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PopupOptions {
    delay_ms: u64,
    position: &'static str,
    dismissible: bool,
}

pub struct PopupRule;

impl RenderRule for PopupRule {
    fn kind(&self) -> &'static str {
        "popup"
    }

    fn is_container(&self) -> bool {
        true
    }

    fn render(&self, input: &RenderInput) -> Result<RenderedFragment, RenderError> {
        let props: PopupProps = normalize(self.kind(), input.props)?;
        let options = PopupOptions {
            delay_ms: props.delay_ms,
            position: props.position.as_str(),
            dismissible: props.dismissible,
        };
        let options_json = serde_json::to_string(&options).map_err(|source| {
            RenderError::Options {
                kind: self.kind(),
                source,
            }
        })?;

        let class = format!("pgs-popup pgs-popup--{}", props.position.as_str());
        let mut html = root_open("div", input, self.kind(), &class, &StyleMap::new());
        // Hidden until the overlay runtime reveals it after `delayMs`.
        html.push_str(&format!(
            " data-popup-options=\"{}\" hidden>",
            escape::attr(&options_json)
        ));

        let mut panel_style = StyleMap::new();
        panel_style.set_opt("width", props.width);
        html.push_str("<div class=\"pgs-popup__panel\"");
        if let Some(style) = panel_style.attr() {
            html.push_str(&format!(" style=\"{}\"", escape::attr(&style)));
        }
        html.push('>');

        if props.dismissible {
            html.push_str(
                "<button class=\"pgs-popup__close\" type=\"button\" aria-label=\"Close\">&#215;</button>",
            );
        }
        html.push_str(input.children_html);
        html.push_str("</div></div>");
        Ok(RenderedFragment::html(html).with_requirement(Requirement::Overlay))
    }
}
