use crate::fragment::RenderedFragment;
use crate::kinds::root_open;
use crate::normalize::normalize;
use crate::registry::{RenderError, RenderInput, RenderRule};
use crate::style::StyleMap;
use pagesmith_common::escape;
use pagesmith_model::props::FloatingImageProps;

/// Shown when the editor has not picked an image yet.
const PLACEHOLDER_URL: &str = "https://placehold.co/150";

pub struct FloatingImageRule;

impl RenderRule for FloatingImageRule {
    fn kind(&self) -> &'static str {
        "floating-image"
    }

    fn render(&self, input: &RenderInput) -> Result<RenderedFragment, RenderError> {
        let props: FloatingImageProps = normalize(self.kind(), input.props)?;
        let url = props.url.unwrap_or_else(|| PLACEHOLDER_URL.to_string());

        // Offsets the editor did not supply stay out of the style string;
        // the browser resolves the unset sides.
        let mut style = StyleMap::new();
        style.set("position", "absolute");
        style.set_opt("top", props.top);
        style.set_opt("right", props.right);
        style.set_opt("bottom", props.bottom);
        style.set_opt("left", props.left);
        style.set("width", props.width);
        style.set("z-index", props.z_index.to_string());

        let mut html = root_open("img", input, self.kind(), "pgs-floating-image", &style);
        html.push_str(&format!(
            " src=\"{}\" alt=\"{}\">",
            escape::attr(&url),
            escape::attr(&props.alt)
        ));
        Ok(RenderedFragment::html(html))
    }
}
