//! # Pagesmith HTML Compiler
//!
//! Compiles a [`pagesmith_model::Page`] into a complete, standalone HTML
//! document: fragments in page order, head metadata from the page settings,
//! runtime scripts deduplicated across components, and tracking embedded only
//! on live (non-preview) renders.
//!
//! Compilation is a pure function of `(Page, CompileOptions)`: synchronous,
//! no I/O, no shared state, nothing cached between calls. Every call
//! recompiles from the page snapshot it is given, so output always reflects
//! the latest edits, and concurrent compilations need no coordination.

pub mod compiler;
mod document;
pub mod service;


pub use compiler::{compile, compile_page, CompileError, CompileOptions};
pub use service::{
    CompileService, MemoryPageStore, NoopViewLog, PageStore, ServiceError, TracingViewLog, ViewLog,
};
