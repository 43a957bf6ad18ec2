use crate::component::PageComponent;
use crate::error::{ModelError, ModelResult};
use crate::settings::PageSettings;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The compilation unit: page metadata plus the ordered component tree.
///
/// Top-level order is render order is visual order, top to bottom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// External identifier, used as the routing key by callers.
    pub page_id: String,

    #[serde(default)]
    pub settings: PageSettings,

    #[serde(default)]
    pub components: Vec<PageComponent>,
}

impl Page {
    pub fn new(page_id: impl Into<String>) -> Self {
        Self {
            page_id: page_id.into(),
            settings: PageSettings::default(),
            components: Vec::new(),
        }
    }

    /// Decode a page record from its persisted JSON form.
    pub fn from_json(json: &str) -> ModelResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the id-uniqueness invariant across the whole component tree.
    ///
    /// A duplicate id degrades DOM-id scoping but not the visual result, so
    /// callers typically log the error and render anyway.
    pub fn validate(&self) -> ModelResult<()> {
        let mut seen = HashSet::new();
        for component in &self.components {
            check_ids(component, &mut seen)?;
        }
        Ok(())
    }
}

fn check_ids<'a>(component: &'a PageComponent, seen: &mut HashSet<&'a str>) -> ModelResult<()> {
    if !seen.insert(component.id.as_str()) {
        return Err(ModelError::DuplicateComponentId {
            id: component.id.clone(),
        });
    }
    for child in &component.children {
        check_ids(child, seen)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_page_record() {
        let json = r#"{
            "pageId": "spring-launch",
            "settings": { "title": "Spring launch", "accessGated": true },
            "components": [
                { "id": "hero", "kind": "heading", "props": { "text": "Hello" } },
                { "id": "body", "kind": "text", "props": { "text": "World" } }
            ]
        }"#;

        let page = Page::from_json(json).expect("record should decode");
        assert_eq!(page.page_id, "spring-launch");
        assert_eq!(page.settings.title, "Spring launch");
        assert!(page.settings.access_gated);
        assert_eq!(page.components.len(), 2);
        assert_eq!(page.components[1].kind, "text");
    }

    #[test]
    fn test_missing_props_defaults_to_empty_bag() {
        let json = r#"{
            "pageId": "p",
            "components": [{ "id": "d", "kind": "divider" }]
        }"#;

        let page = Page::from_json(json).expect("record should decode");
        assert!(page.components[0].props.is_object());
        assert!(page.components[0].children.is_empty());
    }

    #[test]
    fn test_validate_rejects_duplicate_ids_in_nested_tree() {
        let mut page = Page::new("p");
        page.components = vec![
            PageComponent::new("a", "text", json!({"text": "x"})),
            PageComponent::new("wrap", "section", json!({})).with_children(vec![
                PageComponent::new("a", "text", json!({"text": "y"})),
            ]),
        ];

        match page.validate() {
            Err(ModelError::DuplicateComponentId { id }) => assert_eq!(id, "a"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_accepts_unique_ids() {
        let mut page = Page::new("p");
        page.components = vec![
            PageComponent::new("a", "text", json!({"text": "x"})),
            PageComponent::new("b", "text", json!({"text": "y"})),
        ];
        assert!(page.validate().is_ok());
    }
}
