//! Request origin extraction for rendering image URLs.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use crate::state::AppState;

/// The `scheme://host` a request was addressed to.
///
/// Uses `ServerConfig::public_url` when configured; otherwise honours
/// `X-Forwarded-Proto` / `X-Forwarded-Host`, then `Host`, then the request
/// URI authority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOrigin(pub String);

impl RequestOrigin {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromRequestParts<AppState> for RequestOrigin {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(url) = &state.config.public_url {
            return Ok(Self(url.clone()));
        }
        let fallback = format!("localhost:{}", state.config.port);
        Ok(Self(origin_from_headers(
            &parts.headers,
            parts.uri.authority().map(|a| a.as_str()),
            &fallback,
        )))
    }
}

/// First comma-separated value of a header, trimmed.
fn first_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)?
        .to_str()
        .ok()?
        .split(',')
        .next()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

pub(crate) fn origin_from_headers(
    headers: &HeaderMap,
    authority: Option<&str>,
    fallback_host: &str,
) -> String {
    let scheme = first_value(headers, "x-forwarded-proto").unwrap_or("http");
    let host = first_value(headers, "x-forwarded-host")
        .or_else(|| first_value(headers, "host"))
        .or(authority)
        .unwrap_or(fallback_host);
    format!("{scheme}://{host}")
}
