//! Request headers sent with every page fetch.

/// Browser-like request headers.
///
/// Storefronts may serve a stripped page or a bot challenge to clients that
/// do not ask for HTML, which would make every product look invalid.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    const ACCEPT: &'static str =
        "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
    const ACCEPT_LANGUAGE: &'static str = "en-US,en;q=0.9";

    /// Applies the standard request headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        builder
            .header(reqwest::header::ACCEPT, Self::ACCEPT)
            .header(reqwest::header::ACCEPT_LANGUAGE, Self::ACCEPT_LANGUAGE)
            .header(reqwest::header::CACHE_CONTROL, "max-age=0")
    }
}
