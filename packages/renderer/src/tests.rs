use crate::fragment::{RenderedFragment, Requirement};
use crate::normalize::normalize;
use crate::registry::{Registry, RenderInput};
use crate::style::StyleMap;
use pagesmith_model::props::{CarouselProps, FloatingImageProps};
use serde_json::{json, Value};

fn render_with_children(kind: &str, props: Value, children_html: &str) -> RenderedFragment {
    let registry = Registry::standard();
    let input = RenderInput {
        page_id: "test-page",
        id: "c1",
        props: &props,
        children_html,
    };
    registry.render(kind, &input)
}

fn render(kind: &str, props: Value) -> RenderedFragment {
    render_with_children(kind, props, "")
}

#[test]
fn test_style_map_skips_absent_values() {
    let mut style = StyleMap::new();
    style.set("position", "absolute");
    style.set_opt("top", Some("10px".to_string()));
    style.set_opt("right", None);
    style.set_opt("bottom", None);
    style.set_opt("left", Some("4px".to_string()));

    assert_eq!(style.assemble(), "position: absolute; top: 10px; left: 4px;");
}

#[test]
fn test_style_map_preserves_insertion_order_and_is_idempotent() {
    let mut style = StyleMap::new();
    style.set("z-index", "10");
    style.set("width", "150px");

    assert_eq!(style.assemble(), "z-index: 10; width: 150px;");
    assert_eq!(style.assemble(), style.assemble());
}

#[test]
fn test_style_map_empty_has_no_attr() {
    let mut style = StyleMap::new();
    style.set_opt("top", None);
    assert_eq!(style.attr(), None);
}

#[test]
fn test_normalizer_defaults_match_explicit_defaults() {
    let implicit: CarouselProps = normalize("carousel", &json!({})).unwrap();
    let explicit: CarouselProps = normalize(
        "carousel",
        &json!({
            "images": [],
            "showArrows": true,
            "showDots": true,
            "loop": false,
            "align": "start",
            "autoplay": false,
            "autoplayDelay": 4000
        }),
    )
    .unwrap();
    assert_eq!(implicit, explicit);
}

#[test]
fn test_normalizer_accepts_null_props_bag() {
    let props: FloatingImageProps = normalize("floating-image", &Value::Null).unwrap();
    assert_eq!(props.width, "150px");
}

#[test]
fn test_normalizer_reports_missing_required_prop() {
    let result: Result<pagesmith_model::props::HeadingProps, _> =
        normalize("heading", &json!({ "level": 2 }));
    let error = result.expect_err("missing text must fail");
    assert!(error.to_string().contains("heading"));
}

#[test]
fn test_unknown_kind_renders_placeholder_comment() {
    let fragment = render("hologram", json!({}));
    assert!(fragment.html.contains("<!--"));
    assert!(fragment.html.contains("unknown component kind \"hologram\""));
    assert!(fragment.requirements.is_empty());
}

#[test]
fn test_malformed_props_render_placeholder_comment() {
    let fragment = render("heading", json!({ "level": "not-a-number", "text": "hi" }));
    assert!(fragment.html.contains("<!--"));
    assert!(fragment.html.contains("failed"));
}

#[test]
fn test_heading_renders_escaped_text_and_dom_id() {
    let fragment = render("heading", json!({ "text": "Launch <week> & more", "level": 1 }));
    assert!(fragment.html.starts_with("<h1 id=\"pgs-c1\""));
    assert!(fragment.html.contains("Launch &lt;week&gt; &amp; more"));
    assert!(fragment.html.contains("data-kind=\"heading\""));
}

#[test]
fn test_heading_level_is_clamped() {
    let fragment = render("heading", json!({ "text": "t", "level": 9 }));
    assert!(fragment.html.starts_with("<h6"));
    assert!(fragment.html.ends_with("</h6>"));
}

#[test]
fn test_section_wraps_children() {
    let fragment = render_with_children("section", json!({ "maxWidth": "640px" }), "<p>inner</p>");
    assert!(fragment.html.contains("<p>inner</p>"));
    assert!(fragment.html.contains("margin: 0 auto; max-width: 640px;"));
}

#[test]
fn test_empty_carousel_renders_placeholder_only() {
    let fragment = render("carousel", json!({ "images": [] }));
    assert!(fragment.html.contains("has no images"));
    assert!(!fragment.html.contains("pgs-carousel__slide"));
    assert!(fragment.requirements.is_empty());
}

#[test]
fn test_carousel_renders_slides_in_order_with_runtime_requirement() {
    let fragment = render(
        "carousel",
        json!({
            "images": [
                { "url": "https://cdn.test/1.jpg", "alt": "one" },
                { "url": "https://cdn.test/2.jpg", "alt": "two" }
            ]
        }),
    );
    let first = fragment.html.find("1.jpg").unwrap();
    let second = fragment.html.find("2.jpg").unwrap();
    assert!(first < second);
    assert!(fragment.requirements.contains(&Requirement::Carousel));
    assert!(fragment.html.contains("pgs-carousel__prev"));
    assert!(fragment.html.contains("pgs-carousel__dots"));
}

#[test]
fn test_carousel_flags_disable_controls() {
    let fragment = render(
        "carousel",
        json!({
            "images": [{ "url": "https://cdn.test/1.jpg" }],
            "showArrows": false,
            "showDots": false
        }),
    );
    assert!(!fragment.html.contains("pgs-carousel__prev"));
    assert!(!fragment.html.contains("pgs-carousel__dots"));
}

#[test]
fn test_carousel_options_disabled_autoplay_is_null() {
    let fragment = render(
        "carousel",
        json!({ "images": [{ "url": "https://cdn.test/1.jpg" }] }),
    );
    assert!(fragment
        .html
        .contains("data-carousel-options=\"{&quot;loop&quot;:false,&quot;align&quot;:&quot;start&quot;,&quot;autoplay&quot;:null}\""));
}

#[test]
fn test_floating_image_emits_only_supplied_offsets() {
    let fragment = render(
        "floating-image",
        json!({ "url": "https://cdn.test/f.png", "top": "12px", "left": "8px" }),
    );
    assert!(fragment.html.contains(
        "position: absolute; top: 12px; left: 8px; width: 150px; z-index: 10;"
    ));
    assert!(!fragment.html.contains("right:"));
    assert!(!fragment.html.contains("bottom:"));
    assert!(!fragment.html.contains("undefined"));
}

#[test]
fn test_floating_image_falls_back_to_placeholder_url() {
    let fragment = render("floating-image", json!({}));
    assert!(fragment.html.contains("src=\"https://placehold.co/150\""));
}

#[test]
fn test_form_without_fields_renders_placeholder() {
    let fragment = render("form", json!({}));
    assert!(fragment.html.contains("has no fields"));
    assert!(fragment.requirements.is_empty());
}

#[test]
fn test_form_defaults_to_page_scoped_endpoint() {
    let fragment = render(
        "form",
        json!({ "fields": [{ "name": "email", "type": "email", "required": true }] }),
    );
    assert!(fragment.html.contains("action=\"/api/pages/test-page/submissions\""));
    assert!(fragment.html.contains("<input type=\"email\" name=\"email\" required>"));
    assert!(fragment.html.contains(">Submit</button>"));
    assert!(fragment.requirements.contains(&Requirement::Form));
}

#[test]
fn test_popup_serializes_behavior_options() {
    let fragment = render_with_children(
        "popup",
        json!({ "delayMs": 1500, "position": "bottom-right", "dismissible": false }),
        "<p>offer</p>",
    );
    assert!(fragment.html.contains(
        "data-popup-options=\"{&quot;delayMs&quot;:1500,&quot;position&quot;:&quot;bottom-right&quot;,&quot;dismissible&quot;:false}\""
    ));
    assert!(fragment.html.contains(" hidden>"));
    assert!(!fragment.html.contains("pgs-popup__close"));
    assert!(fragment.html.contains("<p>offer</p>"));
    assert!(fragment.requirements.contains(&Requirement::Overlay));
}

#[test]
fn test_rendering_is_deterministic() {
    let props = json!({
        "images": [{ "url": "https://cdn.test/1.jpg", "alt": "one" }],
        "autoplay": true
    });
    let first = render("carousel", props.clone());
    let second = render("carousel", props);
    assert_eq!(first.html, second.html);
}
