//! # Pagesmith Model
//!
//! The page data model: the shape of a page record as the editor persists it
//! and as the compiler consumes it.
//!
//! A page record is a JSON document with camelCase keys (written by the
//! editor, stored by the persistence collaborator):
//!
//! ```json
//! {
//!   "pageId": "spring-launch",
//!   "settings": { "title": "Spring launch" },
//!   "components": [
//!     { "id": "hero", "kind": "heading", "props": { "text": "Hello" } }
//!   ]
//! }
//! ```
//!
//! `props` stays an untyped JSON value at this layer; each component kind
//! declares its own typed prop record in [`props`], and the renderer decodes
//! into it when the component is rendered. A `Page` is read-only input to
//! compilation and is never mutated by it.

pub mod component;
pub mod error;
pub mod page;
pub mod props;
pub mod settings;

pub use component::PageComponent;
pub use error::{ModelError, ModelResult};
pub use page::Page;
pub use settings::{MetaTag, PageSettings, TrackingConfig};
