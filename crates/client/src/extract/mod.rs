//! Hyperlink extraction from rendered HTML.
//!
//! The normalization policy branches on the document's `<base>` declaration:
//!
//! ### Rebase mode
//! - A `<base href>` exists: relative hrefs are prefixed with its value
//!   (single leading `/` stripped first); absolute http(s) hrefs pass through.
//!
//! ### Filter mode
//! - No usable `<base href>`: only absolute http(s) hrefs are kept; relative
//!   links, `mailto:`, `javascript:` and fragment-only hrefs are discarded.
//!
//! Either way the result is deduplicated by exact string equality.

pub mod links;

pub use links::{extract_from_document, extract_links};
