//! API routes configuration module

use crate::api::handlers::{not_found, root};
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// Creates the Request Router
///
/// `GET /` answers with the fixed greeting; every other path falls through
/// to a JSON 404. Other methods on `/` get axum's default 405.
pub fn app() -> Router {
    Router::new()
        .route("/", get(root))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}
