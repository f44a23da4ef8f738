//! Open Graph meta tag extraction.

use scraper::{Html, Selector};
use std::collections::HashMap;
use std::sync::LazyLock;

const OG_META_SELECTOR_STR: &str = r#"meta[property^="og:"]"#;

static OG_META_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(OG_META_SELECTOR_STR, "OG_META_SELECTOR")
});

/// Open Graph properties found in a document.
///
/// A property can appear more than once (several `og:image` tags are
/// common), so every content value is kept in document order. A tag without
/// a `content` attribute still counts as present, with an empty value.
#[derive(Debug, Clone, Default)]
pub struct OpenGraphTags {
    tags: HashMap<String, Vec<String>>,
}

impl OpenGraphTags {
    /// Returns true if at least one tag declares `property`.
    pub fn has(&self, property: &str) -> bool {
        self.tags.contains_key(property)
    }

    /// Returns true if some tag declares `property` with exactly `content`.
    pub fn has_value(&self, property: &str, content: &str) -> bool {
        self.tags
            .get(property)
            .is_some_and(|values| values.iter().any(|v| v == content))
    }

    /// First content value for `property`.
    pub fn first(&self, property: &str) -> Option<&str> {
        self.tags
            .get(property)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Number of distinct properties.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns true if the document has no Open Graph tags.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Extracts `<meta property="og:*">` tags from a parsed document.
pub fn extract_open_graph(document: &Html) -> OpenGraphTags {
    let mut tags: HashMap<String, Vec<String>> = HashMap::new();

    for element in document.select(&OG_META_SELECTOR) {
        if let Some(property) = element.value().attr("property") {
            let content = element.value().attr("content").unwrap_or_default();
            tags.entry(property.to_string())
                .or_default()
                .push(content.to_string());
        }
    }

    OpenGraphTags { tags }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_open_graph_basic() {
        let html = r#"
            <html>
                <head>
                    <meta property="og:type" content="product" />
                    <meta property="og:title" content="Linen Shirt" />
                </head>
            </html>
        "#;
        let tags = extract_open_graph(&Html::parse_document(html));
        assert_eq!(tags.len(), 2);
        assert!(tags.has_value("og:type", "product"));
        assert_eq!(tags.first("og:title"), Some("Linen Shirt"));
    }

    #[test]
    fn test_extract_open_graph_repeated_property() {
        let html = r#"<head>
            <meta property="og:image" content="https://cdn.example/1.jpg">
            <meta property="og:image" content="https://cdn.example/2.jpg">
        </head>"#;
        let tags = extract_open_graph(&Html::parse_document(html));
        assert_eq!(tags.len(), 1);
        assert!(tags.has_value("og:image", "https://cdn.example/2.jpg"));
        assert_eq!(tags.first("og:image"), Some("https://cdn.example/1.jpg"));
    }

    #[test]
    fn test_extract_open_graph_missing_content_counts_as_present() {
        let html = r#"<head><meta property="og:title"></head>"#;
        let tags = extract_open_graph(&Html::parse_document(html));
        assert!(tags.has("og:title"));
        assert_eq!(tags.first("og:title"), Some(""));
    }

    #[test]
    fn test_extract_open_graph_ignores_name_attribute() {
        // og tags must use `property`, not `name`
        let html = r#"<head><meta name="og:title" content="x"></head>"#;
        let tags = extract_open_graph(&Html::parse_document(html));
        assert!(tags.is_empty());
    }

    #[test]
    fn test_extract_open_graph_attribute_order_irrelevant() {
        let html = r#"<head><meta content="product" property="og:type"></head>"#;
        let tags = extract_open_graph(&Html::parse_document(html));
        assert!(tags.has_value("og:type", "product"));
    }
}
