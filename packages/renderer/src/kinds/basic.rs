//! Static kinds: no behavior metadata, no runtime requirements.

use crate::fragment::RenderedFragment;
use crate::kinds::root_open;
use crate::normalize::normalize;
use crate::registry::{RenderError, RenderInput, RenderRule};
use crate::style::StyleMap;
use pagesmith_common::escape;
use pagesmith_model::props::{
    ButtonProps, ButtonVariant, DividerProps, HeadingProps, HtmlProps, ImageProps, SectionProps,
    SpacerProps, TextProps, VideoProps,
};

pub struct SectionRule;

impl RenderRule for SectionRule {
    fn kind(&self) -> &'static str {
        "section"
    }

    fn is_container(&self) -> bool {
        true
    }

    fn render(&self, input: &RenderInput) -> Result<RenderedFragment, RenderError> {
        let props: SectionProps = normalize(self.kind(), input.props)?;
        let mut style = StyleMap::new();
        style.set_opt("background", props.background);
        style.set_opt("padding", props.padding);
        // Centered when a max width is set.
        style.set_opt(
            "margin",
            props.max_width.as_ref().map(|_| "0 auto".to_string()),
        );
        style.set_opt("max-width", props.max_width);

        let mut html = root_open("section", input, self.kind(), "pgs-section", &style);
        html.push('>');
        html.push_str(input.children_html);
        html.push_str("</section>");
        Ok(RenderedFragment::html(html))
    }
}

pub struct HeadingRule;

impl RenderRule for HeadingRule {
    fn kind(&self) -> &'static str {
        "heading"
    }

    fn render(&self, input: &RenderInput) -> Result<RenderedFragment, RenderError> {
        let props: HeadingProps = normalize(self.kind(), input.props)?;
        let tag = format!("h{}", props.level.clamp(1, 6));
        let mut style = StyleMap::new();
        style.set_opt("text-align", props.align.map(|a| a.css().to_string()));

        let mut html = root_open(&tag, input, self.kind(), "pgs-heading", &style);
        html.push_str(&format!(">{}</{}>", escape::html(&props.text), tag));
        Ok(RenderedFragment::html(html))
    }
}

pub struct TextRule;

impl RenderRule for TextRule {
    fn kind(&self) -> &'static str {
        "text"
    }

    fn render(&self, input: &RenderInput) -> Result<RenderedFragment, RenderError> {
        let props: TextProps = normalize(self.kind(), input.props)?;
        let mut style = StyleMap::new();
        style.set_opt("text-align", props.align.map(|a| a.css().to_string()));
        style.set_opt("color", props.color);

        let mut html = root_open("p", input, self.kind(), "pgs-text", &style);
        html.push_str(&format!(">{}</p>", escape::html(&props.text)));
        Ok(RenderedFragment::html(html))
    }
}

pub struct ImageRule;

impl RenderRule for ImageRule {
    fn kind(&self) -> &'static str {
        "image"
    }

    fn render(&self, input: &RenderInput) -> Result<RenderedFragment, RenderError> {
        let props: ImageProps = normalize(self.kind(), input.props)?;
        let mut style = StyleMap::new();
        style.set_opt("width", props.width);
        style.set_opt("border-radius", props.border_radius);

        let mut html = root_open("img", input, self.kind(), "pgs-image", &style);
        html.push_str(&format!(
            " src=\"{}\" alt=\"{}\" loading=\"lazy\">",
            escape::attr(&props.url),
            escape::attr(&props.alt)
        ));
        Ok(RenderedFragment::html(html))
    }
}

pub struct ButtonRule;

impl RenderRule for ButtonRule {
    fn kind(&self) -> &'static str {
        "button"
    }

    fn render(&self, input: &RenderInput) -> Result<RenderedFragment, RenderError> {
        let props: ButtonProps = normalize(self.kind(), input.props)?;
        let mut wrap_style = StyleMap::new();
        wrap_style.set_opt("text-align", props.align.map(|a| a.css().to_string()));

        let variant = match props.variant {
            ButtonVariant::Solid => "solid",
            ButtonVariant::Outline => "outline",
        };
        let mut button_style = StyleMap::new();
        match props.variant {
            ButtonVariant::Solid => {
                button_style.set_opt("background", props.color);
            }
            ButtonVariant::Outline => {
                button_style.set_opt("color", props.color.clone());
                button_style.set_opt("border-color", props.color);
            }
        }

        let mut html = root_open("div", input, self.kind(), "pgs-button-wrap", &wrap_style);
        html.push_str(&format!(
            "><a class=\"pgs-button pgs-button--{}\" href=\"{}\"",
            variant,
            escape::attr(&props.href)
        ));
        if let Some(style) = button_style.attr() {
            html.push_str(&format!(" style=\"{}\"", escape::attr(&style)));
        }
        html.push_str(&format!(">{}</a></div>", escape::html(&props.label)));
        Ok(RenderedFragment::html(html))
    }
}

pub struct DividerRule;

impl RenderRule for DividerRule {
    fn kind(&self) -> &'static str {
        "divider"
    }

    fn render(&self, input: &RenderInput) -> Result<RenderedFragment, RenderError> {
        let props: DividerProps = normalize(self.kind(), input.props)?;
        let mut style = StyleMap::new();
        style.set("border", "none");
        style.set(
            "border-top",
            format!("{}px solid {}", props.thickness, props.color),
        );

        let mut html = root_open("hr", input, self.kind(), "pgs-divider", &style);
        html.push('>');
        Ok(RenderedFragment::html(html))
    }
}

pub struct SpacerRule;

impl RenderRule for SpacerRule {
    fn kind(&self) -> &'static str {
        "spacer"
    }

    fn render(&self, input: &RenderInput) -> Result<RenderedFragment, RenderError> {
        let props: SpacerProps = normalize(self.kind(), input.props)?;
        let mut style = StyleMap::new();
        style.set("height", format!("{}px", props.height));

        let mut html = root_open("div", input, self.kind(), "pgs-spacer", &style);
        html.push_str(" aria-hidden=\"true\"></div>");
        Ok(RenderedFragment::html(html))
    }
}

pub struct VideoRule;

impl RenderRule for VideoRule {
    fn kind(&self) -> &'static str {
        "video"
    }

    fn render(&self, input: &RenderInput) -> Result<RenderedFragment, RenderError> {
        let props: VideoProps = normalize(self.kind(), input.props)?;
        let mut style = StyleMap::new();
        style.set("aspect-ratio", "16 / 9");

        let mut html = root_open("div", input, self.kind(), "pgs-video", &style);
        html.push_str(&format!(
            "><iframe src=\"{}\" title=\"{}\" loading=\"lazy\" allowfullscreen style=\"width: 100%; height: 100%; border: 0;\"></iframe></div>",
            escape::attr(&props.url),
            escape::attr(&props.title)
        ));
        Ok(RenderedFragment::html(html))
    }
}

pub struct HtmlRule;

impl RenderRule for HtmlRule {
    fn kind(&self) -> &'static str {
        "html"
    }

    fn render(&self, input: &RenderInput) -> Result<RenderedFragment, RenderError> {
        let props: HtmlProps = normalize(self.kind(), input.props)?;
        // Trusted editor surface: emitted verbatim, wrapped in a marker div.
        let mut html = root_open("div", input, self.kind(), "pgs-html", &StyleMap::new());
        html.push('>');
        html.push_str(&props.content);
        html.push_str("</div>");
        Ok(RenderedFragment::html(html))
    }
}
