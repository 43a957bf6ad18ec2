use crate::registry::RenderError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode a component's raw prop bag into its typed per-kind record,
/// filling kind-specific defaults for every recognized optional property.
///
/// Defaulting is non-destructive: serde only fills fields that are absent
/// from the bag, so an explicit falsy value survives. Required fields stay
/// required; their absence surfaces as [`RenderError::InvalidProps`].
pub fn normalize<T: DeserializeOwned>(kind: &'static str, props: &Value) -> Result<T, RenderError> {
    // Editors occasionally persist `props: null` instead of an empty bag.
    let value = match props {
        Value::Null => Value::Object(serde_json::Map::new()),
        other => other.clone(),
    };
    serde_json::from_value(value).map_err(|source| RenderError::InvalidProps { kind, source })
}
