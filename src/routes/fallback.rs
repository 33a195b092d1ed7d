use crate::error::ApiError;
use axum::http::{Method, Uri};

/// Answers every request that no route matched, which is all of them
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::NotFound(format!("{} {}", method, uri.path()))
}
