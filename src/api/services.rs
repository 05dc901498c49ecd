use axum::{Router, routing::get};

/// Innermost fallback of the redirect chain
///
/// Answers `/` with a greeting; any other path gets axum's default 404.
pub fn router() -> Router {
    Router::new().route("/", get(hello))
}

pub async fn hello() -> &'static str {
    "Hello, world!\n"
}
