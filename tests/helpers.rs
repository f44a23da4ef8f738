// Shared test helpers for product page fixtures and input files.

use std::io::Write;

use product_crawl_check::{Config, LogFormat, LogLevel};
use tempfile::NamedTempFile;

/// A page carrying every signal a product listing needs.
pub const VALID_PRODUCT_PAGE: &str = r#"<!doctype html>
<html>
<head>
  <title>Linen Shirt</title>
  <meta property="og:type" content="product">
  <meta property="og:title" content="Linen Shirt">
  <meta property="og:image" content="https://cdn.shop.example/linen-shirt.jpg">
  <meta property="og:price:amount" content="49.00">
  <meta property="og:price:currency" content="USD">
  <script type="application/ld+json">
    {"@context": "https://schema.org", "@type": "Product", "name": "Linen Shirt"}
  </script>
</head>
<body><h1>Linen Shirt</h1></body>
</html>"#;

/// The valid page with the `og:image` tag removed.
#[allow(dead_code)] // Used by other test files
pub fn page_without_image() -> String {
    VALID_PRODUCT_PAGE.replace(
        r#"<meta property="og:image" content="https://cdn.shop.example/linen-shirt.jpg">"#,
        "",
    )
}

/// Config tuned for tests: quiet logs and a short timeout.
#[allow(dead_code)] // Used by other test files
pub fn test_config(max_concurrency: usize) -> Config {
    Config {
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
        max_concurrency,
        timeout_seconds: 5,
        user_agent: "product_crawl_check_test/1.0".to_string(),
        include_trace: false,
    }
}

/// Writes one entry per line to a temporary file.
#[allow(dead_code)] // Used by other test files
pub fn write_lines_to_file(lines: &[String]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write line");
    }
    file.flush().expect("Failed to flush file");
    file
}

/// A localhost URL on a port nothing is listening on.
#[allow(dead_code)] // Used by other test files
pub fn closed_port_url(path: &str) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("Failed to read address").port();
    drop(listener);
    format!("http://127.0.0.1:{port}{path}")
}
