use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One visual element of a page.
///
/// `kind` selects the rendering rule; `props` is the kind-specific property
/// bag, decoded into a typed record (see [`crate::props`]) when the component
/// is rendered. `children` is only consumed by container kinds and defines
/// visual nesting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageComponent {
    /// Opaque identifier, unique within a page and stable across edits.
    pub id: String,

    /// Tag selecting the rendering rule (e.g. "carousel", "floating-image").
    pub kind: String,

    /// Kind-specific property bag; absent entries mean "use the kind default".
    #[serde(default = "empty_props")]
    pub props: Value,

    /// Nested components, in visual order. Only container kinds render these.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<PageComponent>,
}

fn empty_props() -> Value {
    Value::Object(serde_json::Map::new())
}

impl PageComponent {
    pub fn new(id: impl Into<String>, kind: impl Into<String>, props: Value) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            props,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<PageComponent>) -> Self {
        self.children = children;
        self
    }
}
