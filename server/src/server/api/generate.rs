//! QR generation API.

use axum::Json;
use axum::body::Body;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::Response;
use serde_json::Value;

use super::err_json;

type ImageResult = Result<Response, (StatusCode, Json<Value>)>;

pub const INVALID_INPUT_MESSAGE: &str = "Invalid input data.";
pub const EMPTY_CONTENT_MESSAGE: &str = "QR content cannot be empty after sanitization.";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error while generating the QR code.";

const NO_CACHE: &str = "no-cache, no-store, must-revalidate";

/// POST /api/generate – render `{ "data": string }` as a PNG QR code
pub async fn generate_qr(payload: Result<Json<Value>, JsonRejection>) -> ImageResult {
    let raw = extract_data(payload)?;

    let sanitized = input_sanitizer::sanitize(&raw);
    if input_sanitizer::is_blank(&sanitized) {
        return Err(err_json(400, EMPTY_CONTENT_MESSAGE));
    }

    let chars = sanitized.chars().count();
    let png = tokio::task::spawn_blocking(move || qr_engine::render_png(&sanitized))
        .await
        .map_err(|e| {
            tracing::error!("QR worker failed: {e}");
            err_json(500, INTERNAL_ERROR_MESSAGE)
        })?
        .map_err(|e| {
            tracing::error!(chars, "Failed to generate QR: {e}");
            err_json(500, INTERNAL_ERROR_MESSAGE)
        })?;

    tracing::info!(chars, bytes = png.len(), "QR generated");
    png_response(png)
}

/// Pull the `data` string out of the request body.
fn extract_data(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<String, (StatusCode, Json<Value>)> {
    let Json(body) = payload.map_err(|e| {
        tracing::debug!("Rejected request body: {e}");
        err_json(400, INVALID_INPUT_MESSAGE)
    })?;

    match body.get("data") {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        _ => Err(err_json(400, INVALID_INPUT_MESSAGE)),
    }
}

fn png_response(png: Vec<u8>) -> ImageResult {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "image/png")
        .header(header::CONTENT_LENGTH, png.len())
        .header(header::CACHE_CONTROL, NO_CACHE)
        .body(Body::from(png))
        .map_err(|e| {
            tracing::error!("Failed to build QR response: {e}");
            err_json(500, INTERNAL_ERROR_MESSAGE)
        })
}
