pub mod admin;
pub mod chat;
pub mod health;

use axum::http::HeaderMap;

/// Token from an `Authorization: Bearer ...` header, if present.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}
