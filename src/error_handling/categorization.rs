//! Error categorization.
//!
//! Maps `reqwest` failures onto `ErrorType` and turns them into the
//! `FetchError` that ends up in a failed outcome.

use std::error::Error as StdError;

use super::types::{ErrorType, FetchError};

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// Status errors never reach this point because the fetcher does not call
/// `error_for_status`; a non-2xx response is a page, not an error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_redirect() {
        ErrorType::HttpRequestRedirectError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_request() {
        ErrorType::HttpRequestRequestError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

/// Renders an error and all of its sources as `outer: inner: root`.
///
/// `reqwest` puts the useful detail (DNS failure, connection refused) in the
/// source chain, so the top-level message alone is not enough for a report.
pub fn error_chain_message(error: &(dyn StdError + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Builds the `FetchError` for a failed request to `url`.
pub fn fetch_error_from_reqwest(url: &str, error: &reqwest::Error) -> FetchError {
    FetchError {
        url: url.to_string(),
        kind: categorize_reqwest_error(error),
        cause: error_chain_message(error),
    }
}
