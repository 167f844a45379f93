//! URL and input validation utilities

use url::Url;

use crate::core::models::{AppError, AppResult};

/// Parse a URL and require an http/https scheme
pub fn validate_url(url: &str) -> AppResult<Url> {
    let parsed = Url::parse(url).map_err(|e| AppError::InvalidUrl(format!("{}: {}", url, e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(AppError::InvalidUrl(format!(
            "unsupported scheme '{}' in {}",
            scheme, url
        ))),
    }
}
