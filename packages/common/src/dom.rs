/// Prefix for all DOM ids derived from component ids.
pub const DOM_ID_PREFIX: &str = "pgs-";

/// Derive a stable DOM id from an opaque component id.
///
/// Component ids come from the editor and may contain characters that are not
/// safe in `id` attributes or CSS selectors. Every character outside
/// `[A-Za-z0-9_-]` maps to `-`, so the same component id always yields the
/// same DOM id.
pub fn dom_id(component_id: &str) -> String {
    let sanitized: String = component_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();
    format!("{}{}", DOM_ID_PREFIX, sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_id_passthrough() {
        assert_eq!(dom_id("hero-1"), "pgs-hero-1");
    }

    #[test]
    fn test_dom_id_sanitizes() {
        assert_eq!(dom_id("a b.c\"d"), "pgs-a-b-c-d");
    }

    #[test]
    fn test_dom_id_is_stable() {
        assert_eq!(dom_id("gallery"), dom_id("gallery"));
    }
}
