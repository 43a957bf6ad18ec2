//! # Pagesmith Renderer
//!
//! Renders one page component at a time: the component registry, the prop
//! normalizer, the style assembler, and the per-kind rendering rules.
//!
//! ## Determinism Contract
//!
//! **INVARIANT: Rendering is fully deterministic.**
//!
//! For any `(kind, props, children_html)`, a rule MUST produce identical
//! output on every invocation:
//!
//! - No randomness and no current-time dependence (timestamps, if a kind ever
//!   needs them, are injected as props by the caller)
//! - No map-iteration-order leaks: behavior options are serialized from
//!   structs with a fixed field order, requirements live in a `BTreeSet`,
//!   style declarations keep insertion order
//! - No I/O: everything a rule needs arrives through [`RenderInput`]
//!
//! Published documents are diffed and cached externally by fingerprint, so
//! byte-for-byte reproducibility is load-bearing, not cosmetic.
//!
//! ## Failure Containment
//!
//! A rule failure (unknown kind, malformed props) degrades to an HTML comment
//! placeholder via [`Registry::render`] and is logged as a warning. One bad
//! component never takes down the rest of the page.

pub mod fragment;
pub mod kinds;
pub mod normalize;
pub mod registry;
pub mod style;

#[cfg(test)]
mod tests;

pub use fragment::{RenderedFragment, Requirement};
pub use normalize::normalize;
pub use registry::{Registry, RenderError, RenderInput, RenderRule};
pub use style::StyleMap;
