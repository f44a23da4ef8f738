//! Small shared helpers.
//!
//! - CSS selector parsing for static selectors
//! - Char-safe body previews for debug logging

mod preview;
mod selector;

pub use preview::html_preview;
pub use selector::parse_selector_unsafe;
