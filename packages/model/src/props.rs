//! Typed per-kind prop records.
//!
//! Each component kind declares the properties it understands as an explicit
//! record with documented defaults, decoded from the untyped `props` bag of a
//! [`crate::PageComponent`]. Optional properties default through serde, which
//! only fills fields that are absent from the bag: an explicit falsy value
//! (`"showArrows": false`) is preserved, never overwritten by a default.
//! Fields without a default are required; their absence is a decode error,
//! not a default.

use serde::{Deserialize, Serialize};

/// Horizontal text alignment shared by several kinds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// `section`: wrapper container for nested components.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionProps {
    pub background: Option<String>,
    pub padding: Option<String>,
    /// When set, the section is centered at this width.
    pub max_width: Option<String>,
}

/// `heading`: `<h1>`–`<h6>` with escaped text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingProps {
    pub text: String,
    /// Heading level 1–6; values outside the range are clamped.
    #[serde(default = "default_heading_level")]
    pub level: u8,
    #[serde(default)]
    pub align: Option<TextAlign>,
}

fn default_heading_level() -> u8 {
    2
}

/// `text`: a paragraph of escaped text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextProps {
    pub text: String,
    #[serde(default)]
    pub align: Option<TextAlign>,
    #[serde(default)]
    pub color: Option<String>,
}

/// `image`: a flowed image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageProps {
    pub url: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub width: Option<String>,
    #[serde(default)]
    pub border_radius: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    Solid,
    Outline,
}

/// `button`: a link styled as a call-to-action button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonProps {
    pub label: String,
    #[serde(default = "default_button_href")]
    pub href: String,
    #[serde(default = "default_button_variant")]
    pub variant: ButtonVariant,
    #[serde(default)]
    pub align: Option<TextAlign>,
    /// Accent color; the stylesheet default applies when absent.
    #[serde(default)]
    pub color: Option<String>,
}

fn default_button_href() -> String {
    "#".to_string()
}

fn default_button_variant() -> ButtonVariant {
    ButtonVariant::Solid
}

/// `divider`: a horizontal rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DividerProps {
    pub color: String,
    /// Rule thickness in pixels.
    pub thickness: u32,
}

impl Default for DividerProps {
    fn default() -> Self {
        Self {
            color: "#e2e2e2".to_string(),
            thickness: 1,
        }
    }
}

/// `spacer`: fixed vertical whitespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpacerProps {
    /// Height in pixels.
    pub height: u32,
}

impl Default for SpacerProps {
    fn default() -> Self {
        Self { height: 32 }
    }
}

/// `video`: an embedded player in a 16:9 frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoProps {
    pub url: String,
    #[serde(default)]
    pub title: String,
}

/// `html`: raw markup passthrough (trusted editor surface).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlProps {
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormFieldType {
    Text,
    Email,
    Phone,
    Number,
    Textarea,
    Checkbox,
}

/// One field of a `form` component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    /// Submission key; also the fallback label.
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(rename = "type", default = "default_field_type")]
    pub field_type: FormFieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub placeholder: Option<String>,
}

fn default_field_type() -> FormFieldType {
    FormFieldType::Text
}

/// `form`: a lead-capture form wired to the form-submit runtime.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormProps {
    pub fields: Vec<FormField>,
    pub submit_label: Option<String>,
    /// Submission endpoint override; defaults to the page-scoped endpoint.
    pub action: Option<String>,
    /// URL to navigate to after a successful submission.
    pub redirect: Option<String>,
}

/// One slide of a `carousel` component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselImage {
    pub url: String,
    #[serde(default)]
    pub alt: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarouselAlign {
    Start,
    Center,
    End,
}

impl CarouselAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            CarouselAlign::Start => "start",
            CarouselAlign::Center => "center",
            CarouselAlign::End => "end",
        }
    }
}

/// `carousel`: an image slider driven by the carousel runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CarouselProps {
    pub images: Vec<CarouselImage>,
    pub show_arrows: bool,
    pub show_dots: bool,
    #[serde(rename = "loop")]
    pub looping: bool,
    pub align: CarouselAlign,
    pub autoplay: bool,
    /// Delay between automatic slide advances, in milliseconds. Only
    /// meaningful when `autoplay` is true.
    pub autoplay_delay: u64,
}

impl Default for CarouselProps {
    fn default() -> Self {
        Self {
            images: Vec::new(),
            show_arrows: true,
            show_dots: true,
            looping: false,
            align: CarouselAlign::Start,
            autoplay: false,
            autoplay_delay: 4000,
        }
    }
}

/// `floating-image`: an absolutely positioned decorative image.
///
/// Only the offsets that are actually supplied end up in the style string;
/// omitted offsets are left out entirely rather than defaulted to `0` or
/// `auto`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FloatingImageProps {
    /// Image URL; a placeholder image is used when absent.
    pub url: Option<String>,
    pub alt: String,
    pub top: Option<String>,
    pub right: Option<String>,
    pub bottom: Option<String>,
    pub left: Option<String>,
    pub width: String,
    pub z_index: i32,
}

impl Default for FloatingImageProps {
    fn default() -> Self {
        Self {
            url: None,
            alt: String::new(),
            top: None,
            right: None,
            bottom: None,
            left: None,
            width: "150px".to_string(),
            z_index: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PopupPosition {
    Center,
    BottomLeft,
    BottomRight,
}

impl PopupPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            PopupPosition::Center => "center",
            PopupPosition::BottomLeft => "bottom-left",
            PopupPosition::BottomRight => "bottom-right",
        }
    }
}

/// `popup`: a floating overlay shown by the overlay runtime after a delay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PopupProps {
    /// Milliseconds after page load before the overlay is shown.
    pub delay_ms: u64,
    pub position: PopupPosition,
    /// Dismissible overlays render a close control.
    pub dismissible: bool,
    pub width: Option<String>,
}

impl Default for PopupProps {
    fn default() -> Self {
        Self {
            delay_ms: 3000,
            position: PopupPosition::Center,
            dismissible: true,
            width: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_carousel_defaults() {
        let props: CarouselProps = serde_json::from_value(json!({})).unwrap();
        assert_eq!(props, CarouselProps::default());
        assert_eq!(props.autoplay_delay, 4000);
        assert!(props.show_arrows);
        assert!(!props.autoplay);
    }

    #[test]
    fn test_explicit_false_survives_defaulting() {
        let props: CarouselProps =
            serde_json::from_value(json!({ "showArrows": false })).unwrap();
        assert!(!props.show_arrows);
        assert!(props.show_dots);
    }

    #[test]
    fn test_required_prop_missing_is_an_error() {
        let result: Result<HeadingProps, _> = serde_json::from_value(json!({ "level": 3 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_floating_image_defaults() {
        let props: FloatingImageProps = serde_json::from_value(json!({})).unwrap();
        assert_eq!(props.width, "150px");
        assert_eq!(props.z_index, 10);
        assert!(props.top.is_none() && props.bottom.is_none());
    }

    #[test]
    fn test_form_field_type_keyword() {
        let field: FormField =
            serde_json::from_value(json!({ "name": "email", "type": "email" })).unwrap();
        assert_eq!(field.field_type, FormFieldType::Email);
    }
}
