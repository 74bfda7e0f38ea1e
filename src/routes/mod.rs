//! Router assembly.

mod author;
mod common;

pub use author::author_routes;
pub use common::common_routes;

use crate::response::ErrorBody;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
    Json, Router,
};
use tower_http::trace::TraceLayer;

/// Unknown path, or a known path with an unsupported method.
pub(crate) async fn no_route(method: Method, uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::no_route(method.as_str(), uri.path())),
    )
}

/// Full application: operational routes, author routes, body limit and request tracing.
/// The limit is enforced when the body is read, so an oversized body is a JSON 413
/// with or without a Content-Length header.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(author_routes(state))
        .fallback(no_route)
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .layer(TraceLayer::new_for_http())
}
