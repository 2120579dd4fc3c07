//! Client code for linkseeker.
//!
//! This crate provides headless page rendering, hyperlink extraction, and the
//! line-per-link writer used by the CLI.

pub mod extract;
pub mod output;
pub mod render;
pub mod url;

pub use extract::{extract_from_document, extract_links};
pub use output::{OutputError, write_links};
pub use render::{HeadlessRenderer, RenderError, RenderOptions, RenderedPage, Renderer};
pub use url::{UrlError, canonicalize};
