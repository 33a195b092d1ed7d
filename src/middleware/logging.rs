use crate::app_state::AppState;
use axum::{
    body::{to_bytes, Body, Bytes},
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tower_http::request_id::RequestId;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

const BODY_LIMIT_BYTES: usize = 1024 * 1024;
const LOGGED_BODY_BYTES: usize = 2000;

/// Middleware that logs each request and its response.
///
/// The request body is passed through unread; only its declared length is
/// logged. Response bodies are captured when `log.log_bodies` is set.
pub async fn logging_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let request_id = request_id(&request);
    let service = state.service.name();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let content_length = request
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());
    let start = Instant::now();

    tracing::info!(
        request_id = %request_id,
        service,
        method = %method,
        uri = %uri,
        content_length,
        "→ Request"
    );

    let response = next.run(request).await;
    let status = response.status();

    if !state.config.log.log_bodies {
        tracing::info!(
            request_id = %request_id,
            service,
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            latency_ms = %start.elapsed().as_millis(),
            "← Response"
        );
        return response;
    }

    let (parts, body) = response.into_parts();

    let bytes = match to_bytes(body, BODY_LIMIT_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(request_id = %request_id, service, "Failed to read response body: {}", e);
            Bytes::new()
        }
    };

    tracing::info!(
        request_id = %request_id,
        service,
        method = %method,
        uri = %uri,
        status = %status.as_u16(),
        latency_ms = %start.elapsed().as_millis(),
        body = %truncate_body(&String::from_utf8_lossy(&bytes), LOGGED_BODY_BYTES),
        "← Response"
    );

    Response::from_parts(parts, Body::from(bytes))
}

/// Id set by `SetRequestIdLayer`, the same value echoed on the response
fn request_id(request: &Request) -> String {
    request
        .extensions()
        .get::<RequestId>()
        .map(|id| String::from_utf8_lossy(id.header_value().as_bytes()).into_owned())
        .unwrap_or_default()
}

/// Truncate body for logging, adding a marker if truncated.
/// Never splits a multi-byte character.
fn truncate_body(body: &str, max_len: usize) -> String {
    let body = body.trim();
    if body.len() <= max_len {
        return body.to_string();
    }

    let mut end = max_len;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!(
        "{}...[truncated, {} bytes total]",
        &body[..end],
        body.len()
    )
}
