//! Integration tests for the product_crawl_check library.
//!
//! These tests run whole crawls against a mock HTTP server via `httptest`.
//! They do not make real network requests, so they are fast and reliable.

mod helpers;

use helpers::{
    closed_port_url, page_without_image, test_config, write_lines_to_file, VALID_PRODUCT_PAGE,
};
use httptest::{matchers::*, responders::*, Expectation, Server};
use product_crawl_check::{
    run_crawl, Config, CrawlReport, Crawler, UrlSource, ValidationOutcome,
};
use std::path::PathBuf;

fn html(body: &str) -> impl httptest::responders::Responder {
    status_code(200)
        .append_header("Content-Type", "text/html; charset=utf-8")
        .body(body.to_string())
}

#[tokio::test]
async fn test_crawl_mixed_outcomes_end_to_end() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/products/b"))
            .respond_with(html(VALID_PRODUCT_PAGE)),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/products/c"))
            .respond_with(html(&page_without_image())),
    );

    let a = closed_port_url("/products/a");
    let b = server.url_str("/products/b");
    let c = server.url_str("/products/c");

    let report = run_crawl(
        &test_config(4),
        &UrlSource::List(vec![a.clone(), b.clone(), c.clone()]),
    )
    .await
    .expect("crawl should run");

    assert_eq!(report.total(), 3);
    assert_eq!(report.results[0].url, a);
    assert!(!report.results[0].success);
    assert!(report.results[0].error_message.is_some());
    assert_eq!(report.results[1], ValidationOutcome::validated(b, true));
    assert_eq!(report.results[2], ValidationOutcome::validated(c, false));
    assert_eq!(format!("{:.2}", report.success_rate), "33.33");
}

#[tokio::test]
async fn test_crawl_all_valid_pages() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", matches("^/products/")))
            .times(5)
            .respond_with(html(VALID_PRODUCT_PAGE)),
    );
    let urls: Vec<String> = (0..5)
        .map(|i| server.url_str(&format!("/products/item-{i}")))
        .collect();

    let report = run_crawl(&test_config(2), &UrlSource::List(urls.clone()))
        .await
        .expect("crawl should run");

    assert_eq!(report.success_rate, 100.0);
    let crawled: Vec<&str> = report.results.iter().map(|o| o.url.as_str()).collect();
    assert_eq!(crawled, urls.iter().map(String::as_str).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_crawl_non_2xx_page_fails_without_message() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/products/gone"))
            .respond_with(status_code(404).body(VALID_PRODUCT_PAGE)),
    );
    let url = server.url_str("/products/gone");

    let report = run_crawl(&test_config(1), &UrlSource::List(vec![url.clone()]))
        .await
        .expect("crawl should run");

    assert_eq!(report.results, vec![ValidationOutcome::validated(url, false)]);
    assert_eq!(report.success_rate, 0.0);
}

#[tokio::test]
async fn test_crawl_shop_handles_source() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/products/linen-shirt"))
            .respond_with(html(VALID_PRODUCT_PAGE)),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/products/mug"))
            .respond_with(html("<html><head><title>Mug</title></head></html>")),
    );
    let handles = write_lines_to_file(&["linen-shirt".to_string(), "mug".to_string()]);

    // Shop URLs are always https, so point the crawler at the mock server directly
    let shop = server.addr().to_string();
    let urls = UrlSource::ShopHandles {
        shop: shop.clone(),
        handles: handles.path().to_path_buf(),
    }
    .load()
    .await
    .expect("handles should load");
    assert_eq!(
        urls,
        vec![
            format!("https://{shop}/products/linen-shirt"),
            format!("https://{shop}/products/mug"),
        ]
    );

    let plain: Vec<String> = urls.iter().map(|u| u.replacen("https://", "http://", 1)).collect();
    let crawler: Crawler = Crawler::from_config(&test_config(2)).expect("client should build");
    let report = crawler.crawl(&plain).await;

    assert_eq!(report.success_rate, 50.0);
    assert!(report.results[0].success);
    assert!(!report.results[1].success);
}

#[tokio::test]
async fn test_crawl_file_source() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/products/a"))
            .respond_with(html(VALID_PRODUCT_PAGE)),
    );
    let file = write_lines_to_file(&[
        "# products to check".to_string(),
        server.url_str("/products/a"),
        String::new(),
    ]);

    let report = run_crawl(&test_config(1), &UrlSource::File(file.path().to_path_buf()))
        .await
        .expect("crawl should run");

    assert_eq!(report.total(), 1);
    assert_eq!(report.success_rate, 100.0);
}

#[tokio::test]
async fn test_empty_source_gives_empty_report() {
    let report = run_crawl(&test_config(4), &UrlSource::List(Vec::new()))
        .await
        .expect("crawl should run");
    assert_eq!(report, CrawlReport::empty());
    assert_eq!(report.success_rate, 0.0);
}

#[tokio::test]
async fn test_unreadable_source_gives_empty_report() {
    let source = UrlSource::File(PathBuf::from("/nonexistent/product_urls.txt"));
    let report = run_crawl(&test_config(4), &source)
        .await
        .expect("a missing input file is not a fatal error");
    assert!(report.results.is_empty());
    assert_eq!(report.success_rate, 0.0);
}

#[tokio::test]
async fn test_trace_reports_missing_signals() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/products/c"))
            .respond_with(html(&page_without_image())),
    );
    let config = Config {
        include_trace: true,
        ..test_config(1)
    };

    let report = run_crawl(
        &config,
        &UrlSource::List(vec![server.url_str("/products/c")]),
    )
    .await
    .expect("crawl should run");

    let trace = report.results[0].trace.as_ref().expect("trace requested");
    assert_eq!(trace.status, 200);
    assert!(trace.has_og_type);
    assert!(!trace.has_og_image);
    assert!(trace.has_product_schema);
    assert_eq!(trace.missing.len(), 1);
}

#[tokio::test]
async fn test_report_json_shape() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/products/b"))
            .respond_with(html(VALID_PRODUCT_PAGE)),
    );
    let a = closed_port_url("/products/a");
    let b = server.url_str("/products/b");

    let report = run_crawl(&test_config(2), &UrlSource::List(vec![a, b]))
        .await
        .expect("crawl should run");
    let json: serde_json::Value =
        serde_json::from_str(&report.to_json_pretty().expect("serializes")).expect("valid json");

    assert_eq!(json["successRate"], 50.0);
    assert_eq!(json["results"][0]["success"], false);
    assert!(json["results"][0]["errorMessage"].is_string());
    assert_eq!(json["results"][1]["success"], true);
    assert!(json["results"][1].get("errorMessage").is_none());
}
