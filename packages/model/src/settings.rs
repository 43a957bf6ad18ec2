use serde::{Deserialize, Serialize};

/// Page-level settings: head metadata, tracking, access gating, custom tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageSettings {
    /// Document title.
    pub title: String,

    /// Meta description, omitted from the head when absent.
    pub description: Option<String>,

    /// Document language attribute.
    pub lang: String,

    /// Additional named meta tags, emitted in order.
    pub meta_tags: Vec<MetaTag>,

    /// Raw head markup supplied through the editor (trusted surface).
    pub custom_head: Option<String>,

    /// Script URLs appended at the end of the body, in order.
    pub custom_scripts: Vec<String>,

    /// Visitor tracking configuration; tracking is only embedded on live
    /// (non-preview) renders, and only when this is present.
    pub tracking: Option<TrackingConfig>,

    /// Access-gated pages are served behind an external gate and are marked
    /// `noindex` so gated content never reaches crawlers.
    pub access_gated: bool,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            title: "Untitled page".to_string(),
            description: None,
            lang: "en".to_string(),
            meta_tags: Vec::new(),
            custom_head: None,
            custom_scripts: Vec::new(),
            tracking: None,
            access_gated: false,
        }
    }
}

/// A named `<meta>` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaTag {
    pub name: String,
    pub content: String,
}

/// Visitor tracking configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingConfig {
    /// Site identifier assigned by the analytics collaborator.
    pub site_id: String,

    /// Beacon endpoint for the `<noscript>` pixel.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    "/collect".to_string()
}
