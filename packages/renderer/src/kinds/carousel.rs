use crate::fragment::{RenderedFragment, Requirement};
use crate::kinds::root_open;
use crate::normalize::normalize;
use crate::registry::{RenderError, RenderInput, RenderRule};
use crate::style::StyleMap;
use pagesmith_common::escape;
use pagesmith_model::props::CarouselProps;
use serde::Serialize;

/// Behavior options serialized onto the container for the carousel runtime.
///
/// The field order is the wire order. `autoplay` is `null` when disabled and
/// `{delay, stopOnInteraction}` when enabled; the runtime never stops on
/// interaction for published pages, so `stopOnInteraction` is always `false`.
#[derive(Debug, Serialize)]
struct CarouselOptions {
    #[serde(rename = "loop")]
    looping: bool,
    align: &'static str,
    autoplay: Option<AutoplayOptions>,
}

#[derive(Debug, Serialize)]
struct AutoplayOptions {
    delay: u64,
    #[serde(rename = "stopOnInteraction")]
    stop_on_interaction: bool,
}

pub struct CarouselRule;

impl RenderRule for CarouselRule {
    fn kind(&self) -> &'static str {
        "carousel"
    }

    fn render(&self, input: &RenderInput) -> Result<RenderedFragment, RenderError> {
        let props: CarouselProps = normalize(self.kind(), input.props)?;
        if props.images.is_empty() {
            return Ok(RenderedFragment::comment(&format!(
                "carousel \"{}\" has no images",
                input.id
            )));
        }

        let options = CarouselOptions {
            looping: props.looping,
            align: props.align.as_str(),
            autoplay: props.autoplay.then_some(AutoplayOptions {
                delay: props.autoplay_delay,
                stop_on_interaction: false,
            }),
        };
        let options_json = serde_json::to_string(&options).map_err(|source| {
            RenderError::Options {
                kind: self.kind(),
                source,
            }
        })?;

        let mut html = root_open("div", input, self.kind(), "pgs-carousel", &StyleMap::new());
        html.push_str(&format!(
            " data-carousel-options=\"{}\">",
            escape::attr(&options_json)
        ));

        html.push_str("<div class=\"pgs-carousel__viewport\"><div class=\"pgs-carousel__container\">");
        for image in &props.images {
            html.push_str(&format!(
                "<div class=\"pgs-carousel__slide\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\"></div>",
                escape::attr(&image.url),
                escape::attr(&image.alt)
            ));
        }
        html.push_str("</div></div>");

        if props.show_arrows {
            html.push_str(
                "<button class=\"pgs-carousel__prev\" type=\"button\" aria-label=\"Previous slide\">&#8249;</button>",
            );
            html.push_str(
                "<button class=\"pgs-carousel__next\" type=\"button\" aria-label=\"Next slide\">&#8250;</button>",
            );
        }

        if props.show_dots {
            html.push_str("<div class=\"pgs-carousel__dots\">");
            for index in 0..props.images.len() {
                html.push_str(&format!(
                    "<button class=\"pgs-carousel__dot\" type=\"button\" data-slide=\"{}\" aria-label=\"Go to slide {}\"></button>",
                    index,
                    index + 1
                ));
            }
            html.push_str("</div>");
        }

        html.push_str("</div>");
        Ok(RenderedFragment::html(html).with_requirement(Requirement::Carousel))
    }
}
