// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Access token extraction middleware.

use crate::error::AppError;
use axum::{extract::Request, http::header, middleware::Next, response::Response};
use axum_extra::extract::cookie::CookieJar;

/// Cookie set by the OAuth callback relay.
pub const TOKEN_COOKIE: &str = "token";

/// Strava access token of the current request.
#[derive(Debug, Clone)]
pub struct AccessToken(pub String);

/// Middleware that requires a Strava access token.
///
/// The `token` cookie wins over an `Authorization: Bearer` header.
pub async fn require_token(
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = if let Some(cookie) = jar.get(TOKEN_COOKIE) {
        cookie.value().to_string()
    } else {
        let auth_header = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        match auth_header.and_then(|h| h.strip_prefix("Bearer ")) {
            Some(token) => token.to_string(),
            None => return Err(AppError::Unauthorized),
        }
    };

    if token.trim().is_empty() {
        return Err(AppError::Unauthorized);
    }

    request.extensions_mut().insert(AccessToken(token));

    Ok(next.run(request).await)
}
