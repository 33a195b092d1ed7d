// Route modules
pub mod fallback;

use crate::{
    app_state::AppState,
    middleware::{logging_middleware, REQUEST_ID_HEADER},
};
use axum::{http::HeaderName, middleware, Router};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

/// Create the service router.
///
/// No application routes are registered. Every request falls through to
/// [`fallback::not_found`], wrapped in request-id and logging layers.
pub fn create_router(state: AppState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .fallback(fallback::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            logging_middleware,
        ))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .with_state(state)
}
