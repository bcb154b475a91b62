// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use strava_stats::error::{AppError, ErrorKind};
use strava_stats::services::cache::CacheError;

mod common;

#[test]
fn test_access_errors() {
    assert_eq!(AppError::Unauthorized.kind(), ErrorKind::Access);
    assert_eq!(AppError::InvalidToken.kind(), ErrorKind::Access);
}

#[test]
fn test_parsing_error() {
    let err = AppError::Parsing("invalid type: string".to_string());
    assert_eq!(err.kind(), ErrorKind::Parsing);
    assert!(err.to_string().starts_with("Response data is not valid"));
}

#[test]
fn test_everything_else_is_default() {
    assert_eq!(
        AppError::StravaApi(AppError::STRAVA_RATE_LIMIT.to_string()).kind(),
        ErrorKind::Default
    );
    assert_eq!(
        AppError::BadRequest("bad".to_string()).kind(),
        ErrorKind::Default
    );
    assert_eq!(
        AppError::NotFound("gone".to_string()).kind(),
        ErrorKind::Default
    );
    assert_eq!(
        AppError::Storage(CacheError::Io(std::io::Error::other("disk full"))).kind(),
        ErrorKind::Default
    );
}

#[tokio::test]
async fn test_response_body_carries_kind() {
    let response = AppError::InvalidToken.into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = common::body_json(response).await;
    assert_eq!(json["error"], "invalid_token");
    assert_eq!(json["kind"], "access");
    assert_eq!(json["details"], "Access denied, please login again");
}

#[tokio::test]
async fn test_parsing_response() {
    let response = AppError::Parsing("missing field `id`".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let json = common::body_json(response).await;
    assert_eq!(json["kind"], "parsing");
}

#[tokio::test]
async fn test_storage_error_hides_details() {
    let response =
        AppError::Storage(CacheError::Io(std::io::Error::other("/secret/path"))).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = common::body_json(response).await;
    assert_eq!(json["kind"], "default");
    assert!(json.get("details").is_none());
}
