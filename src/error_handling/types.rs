//! Error type definitions.
//!
//! This module defines the typed errors raised by the crawler and the
//! error/warning categories counted during a run.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Transport-level failure while fetching one page.
///
/// Non-2xx responses are not fetch errors; they come back as a `RawPage`
/// with `ok == false`.
#[derive(Error, Debug, Clone)]
#[error("{cause}")]
pub struct FetchError {
    /// The URL that was requested
    pub url: String,
    /// Category of the failure
    pub kind: ErrorType,
    /// Human-readable message, including the underlying error chain
    pub cause: String,
}

/// Failure to parse an embedded JSON-LD block.
///
/// Never surfaced to callers: the extractor folds it into
/// `has_product_schema == false`.
#[derive(Error, Debug)]
pub enum StructuredDataError {
    /// The block contained nothing but whitespace.
    #[error("JSON-LD block is empty")]
    Empty,

    /// The block is not valid JSON.
    #[error("JSON-LD block is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Types of errors that can occur while fetching a page.
///
/// These are transport failures; they produce a failed outcome carrying the
/// error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// The request could not be built (usually an unparseable URL)
    HttpRequestBuilderError,
    /// Redirect loop or too many redirects
    HttpRequestRedirectError,
    /// The client timeout elapsed
    HttpRequestTimeoutError,
    /// The request failed to send
    HttpRequestRequestError,
    /// Connection refused, DNS failure or TLS handshake failure
    HttpRequestConnectError,
    /// The response body could not be read
    HttpRequestBodyError,
    /// The response body could not be decoded as text
    HttpRequestDecodeError,
    /// Any other reqwest failure
    HttpRequestOtherError,
    /// The pipeline task for a URL panicked or was cancelled
    TaskFailure,
}

/// Reasons a successfully fetched page fails validation.
///
/// One page can count towards several of these at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    /// Response status outside 2xx
    NonSuccessStatus,
    /// No `og:type` tag with content `product`
    MissingOgType,
    /// No `og:title` tag
    MissingOgTitle,
    /// No `og:image` tag
    MissingOgImage,
    /// No `og:price:amount` tag
    MissingOgPrice,
    /// No JSON-LD script block
    MissingStructuredData,
    /// The JSON-LD block does not describe a `Product`
    MissingProductSchema,
    /// The JSON-LD block is not valid JSON
    MalformedStructuredData,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for WarningType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Returns a human-readable string representation of the error type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::TaskFailure => "Crawl task failure",
        }
    }
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::NonSuccessStatus => "Non-2xx response status",
            WarningType::MissingOgType => "Missing og:type=product",
            WarningType::MissingOgTitle => "Missing og:title",
            WarningType::MissingOgImage => "Missing og:image",
            WarningType::MissingOgPrice => "Missing og:price:amount",
            WarningType::MissingStructuredData => "Missing JSON-LD block",
            WarningType::MissingProductSchema => "Missing JSON-LD Product",
            WarningType::MalformedStructuredData => "Malformed JSON-LD block",
        }
    }
}
