use crate::error::{AppError, Result};
use crate::extract::JsonOrForm;
use crate::model::{ShortenRequest, ShortenResponse};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use kiosk_core::{ShortCode, ShortenParams};
use tracing::debug;
use url::Url;

pub async fn shorten_handler(
    State(state): State<AppState>,
    JsonOrForm(request): JsonOrForm<ShortenRequest>,
) -> Result<Response> {
    let url = request
        .url
        .ok_or_else(|| AppError::invalid("invalid url"))?;

    let link = state.shortener().shorten(ShortenParams::new(url)).await?;
    let public_link = link.code.to_url(&format!(
        "{}/api/shorturl",
        state.base_url().trim_end_matches('/')
    ));
    debug!(link = %public_link, "short link ready");

    let mut response = Json(ShortenResponse {
        original_url: link.original_url,
        short_url: link.code,
    })
    .into_response();
    if let Ok(location) = HeaderValue::from_str(&public_link) {
        response.headers_mut().insert(LOCATION, location);
    }
    Ok(response)
}

pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Response> {
    let code = ShortCode::parse(&raw)?;
    let record = state
        .shortener()
        .lookup(&code)
        .await?
        .ok_or(AppError::NotFound)?;

    let location = location_header(&record.original_url)?;
    Ok((StatusCode::FOUND, [(LOCATION, location)]).into_response())
}

/// Stored URLs are kept verbatim, so non-ASCII input is re-serialized in
/// its percent-encoded form before it goes into a header.
fn location_header(original_url: &str) -> Result<HeaderValue> {
    if let Ok(value) = HeaderValue::from_str(original_url) {
        return Ok(value);
    }

    Url::parse(original_url)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| AppError::Internal(format!("stored url is not a valid header: {original_url}")))
}
