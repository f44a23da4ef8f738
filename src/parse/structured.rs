//! JSON-LD structured data detection and parsing.
//!
//! Only the first `<script type="application/ld+json">` block of a page is
//! parsed. A block that is not valid JSON is reported as a
//! `StructuredDataError` and never aborts extraction.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use crate::config::{JSON_LD_GRAPH_KEY, JSON_LD_TYPE_KEY, PRODUCT_SCHEMA_TYPE};
use crate::error_handling::StructuredDataError;

// Matches: <script ... type="application/ld+json" ...>...</script>
// Either quote style, case-insensitive, lazy body so several blocks on one
// page are matched separately. `type` must follow whitespace so attributes
// such as `data-type` do not count.
const JSON_LD_SCRIPT_PATTERN: &str =
    r#"(?is)<script\b[^>]*?\stype\s*=\s*["']application/ld\+json["'][^>]*>(.*?)</script>"#;

static JSON_LD_SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(JSON_LD_SCRIPT_PATTERN).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in JSON_LD_SCRIPT_RE: {}. This is a programming error.",
            JSON_LD_SCRIPT_PATTERN, e
        )
    })
});

/// Returns the content of the first JSON-LD script block, if any.
pub fn first_json_ld_block(html: &str) -> Option<&str> {
    JSON_LD_SCRIPT_RE
        .captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}

/// Parses the content of a JSON-LD block.
pub fn parse_json_ld(block: &str) -> Result<Value, StructuredDataError> {
    let trimmed = block.trim();
    if trimmed.is_empty() {
        return Err(StructuredDataError::Empty);
    }
    Ok(serde_json::from_str(trimmed)?)
}

/// Returns true if the document describes a `Product`.
///
/// Either the top-level `@type` is `"Product"`, or the document carries an
/// `@graph` array with at least one entry typed `"Product"`.
pub fn is_product_document(document: &Value) -> bool {
    if has_product_type(document) {
        return true;
    }
    document
        .get(JSON_LD_GRAPH_KEY)
        .and_then(Value::as_array)
        .is_some_and(|graph| graph.iter().any(has_product_type))
}

fn has_product_type(node: &Value) -> bool {
    node.get(JSON_LD_TYPE_KEY).and_then(Value::as_str) == Some(PRODUCT_SCHEMA_TYPE)
}
