//! Root greeting handler.

use axum::{routing::get, Router};

use crate::state::AppState;

/// Plain-text greeting served at `/`
pub const GREETING: &str = "Hello, World!";

/// Create root routes.
pub fn root_routes() -> Router<AppState> {
    Router::new().route("/", get(hello))
}

/// Greeting endpoint
#[utoipa::path(
    get,
    path = "/",
    tag = "Root",
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/plain")
    )
)]
pub async fn hello() -> &'static str {
    GREETING
}
