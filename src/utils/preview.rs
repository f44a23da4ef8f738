//! Body previews for logging.

/// Returns at most `max_chars` characters of `body`, cut on a char boundary.
///
/// Appends `...` when the body was shortened.
pub fn html_preview(body: &str, max_chars: usize) -> String {
    match body.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
