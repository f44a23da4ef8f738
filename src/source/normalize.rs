//! URL validation and normalization utilities.

use log::warn;

use crate::config::MAX_URL_LENGTH;

/// Validates and normalizes a URL.
///
/// Adds an `https://` prefix if no scheme is present, then checks that the
/// result parses and uses http or https. Logs a warning and returns `None`
/// if the URL is invalid, too long, or uses another scheme.
pub fn validate_and_normalize_url(url: &str) -> Option<String> {
    if url.len() > MAX_URL_LENGTH {
        warn!(
            "Skipping URL exceeding maximum length ({} > {}): {}...",
            url.len(),
            MAX_URL_LENGTH,
            url.chars().take(50).collect::<String>()
        );
        return None;
    }

    let normalized = match url.find("://").filter(|&end| is_scheme(&url[..end])) {
        Some(scheme_end) => {
            let Ok(parsed) = url::Url::parse(url) else {
                warn!("Skipping invalid URL: {url}");
                return None;
            };
            if !matches!(parsed.scheme(), "http" | "https") {
                warn!("Skipping unsupported scheme for URL: {url}");
                return None;
            }
            // Url::parse lowercases the scheme; keep the rest as written
            format!("{}{}", parsed.scheme(), &url[scheme_end..])
        }
        None => format!("https://{url}"),
    };

    if normalized.len() > MAX_URL_LENGTH {
        warn!(
            "Skipping normalized URL exceeding maximum length ({} > {})",
            normalized.len(),
            MAX_URL_LENGTH
        );
        return None;
    }

    match url::Url::parse(&normalized) {
        Ok(parsed) if parsed.host_str().is_some_and(|h| !h.is_empty()) => Some(normalized),
        Ok(_) => {
            warn!("Skipping URL without a host: {url}");
            None
        }
        Err(_) => {
            warn!("Skipping invalid URL: {url}");
            None
        }
    }
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
