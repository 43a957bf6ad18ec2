/// Inline-style assembler.
///
/// Declarations are kept in insertion order, which is the canonical order for
/// the emitted style string: each rule declares its properties in one fixed
/// sequence, so the same input always assembles to the same bytes. Entries
/// whose value is absent are skipped entirely; an omitted property never
/// shows up as `prop: undefined` or similar.
#[derive(Debug, Clone, Default)]
pub struct StyleMap {
    decls: Vec<(&'static str, Option<String>)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a property with a present value.
    pub fn set(&mut self, property: &'static str, value: impl Into<String>) -> &mut Self {
        self.decls.push((property, Some(value.into())));
        self
    }

    /// Declare a property whose value may be absent; absent values are
    /// omitted from the assembled string.
    pub fn set_opt(&mut self, property: &'static str, value: Option<String>) -> &mut Self {
        self.decls.push((property, value));
        self
    }

    /// Assemble the declarations into `"prop: value; prop2: value2;"`.
    pub fn assemble(&self) -> String {
        self.decls
            .iter()
            .filter_map(|(property, value)| {
                value
                    .as_ref()
                    .map(|value| format!("{}: {};", property, value))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The assembled string, or `None` when no declaration has a value, so
    /// callers can skip the `style` attribute entirely.
    pub fn attr(&self) -> Option<String> {
        let assembled = self.assemble();
        if assembled.is_empty() {
            None
        } else {
            Some(assembled)
        }
    }
}
