use std::future::ready;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::http::{HeaderValue, Request, StatusCode, header};
use axum::response::{IntoResponse, Response};
use tower::{Service, ServiceExt};

use super::entry::{Format, parse, parse_json, parse_yaml};
use super::error::ParseError;
use super::table::RedirectTable;

pub type ResponseFuture<E> = Pin<Box<dyn Future<Output = Result<Response, E>> + Send>>;

/// Redirects requests whose path is in the table, delegates the rest
///
/// Wraps any `tower::Service` as its fallback, so handlers nest: a handler
/// built from a config file can fall back to one built from an inline map,
/// which falls back to the application router. The table sits behind an
/// `Arc` and is never mutated, so clones share it across requests.
#[derive(Debug, Clone)]
pub struct RedirectHandler<F> {
    table: Arc<RedirectTable>,
    fallback: F,
}

impl<F> RedirectHandler<F> {
    pub fn new(table: RedirectTable, fallback: F) -> Self {
        Self {
            table: Arc::new(table),
            fallback,
        }
    }

    pub fn table(&self) -> &RedirectTable {
        &self.table
    }

    pub fn fallback(&self) -> &F {
        &self.fallback
    }
}

impl<F, B> Service<Request<B>> for RedirectHandler<F>
where
    F: Service<Request<B>, Response = Response> + Clone + Send + 'static,
    F::Future: Send + 'static,
    F::Error: Send + 'static,
    B: Send + 'static,
{
    type Response = Response;
    type Error = F::Error;
    type Future = ResponseFuture<F::Error>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        // Readiness of the fallback is awaited per call, only on a miss.
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        if let Some(url) = self.table.lookup(req.uri().path()) {
            tracing::debug!(path = req.uri().path(), location = url, "Redirecting");
            return Box::pin(ready(Ok(found(url))));
        }

        let fallback = self.fallback.clone();
        Box::pin(fallback.oneshot(req))
    }
}

/// `302 Found` pointing at `location`
fn found(location: &str) -> Response {
    match HeaderValue::from_bytes(location.as_bytes()) {
        Ok(value) => (StatusCode::FOUND, [(header::LOCATION, value)]).into_response(),
        Err(_) => {
            tracing::error!(location, "Redirect target is not a valid Location header");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Wrap `fallback` with a lookup in `table`
pub fn map_handler<F>(table: RedirectTable, fallback: F) -> RedirectHandler<F> {
    RedirectHandler::new(table, fallback)
}

/// Parse a YAML redirect list and wrap `fallback` with it
///
/// YAML is expected to be in the format:
///
/// ```yaml
/// - path: /some-path
///   url: https://www.some-url.com/demo
/// ```
///
/// The only error is malformed YAML, returned as-is.
pub fn yaml_handler<F>(yml: &[u8], fallback: F) -> Result<RedirectHandler<F>, ParseError> {
    let entries = parse_yaml(yml)?;
    Ok(map_handler(RedirectTable::build(entries), fallback))
}

/// Parse a JSON redirect list and wrap `fallback` with it
///
/// JSON is expected to be in the format:
///
/// ```json
/// [{"path": "/some-path", "url": "https://www.some-url.com/demo"}]
/// ```
///
/// The only error is malformed JSON, returned as-is.
pub fn json_handler<F>(json: &[u8], fallback: F) -> Result<RedirectHandler<F>, ParseError> {
    let entries = parse_json(json)?;
    Ok(map_handler(RedirectTable::build(entries), fallback))
}

/// Parse a redirect list in the given `format` and wrap `fallback` with it
pub fn format_handler<F>(
    buf: &[u8],
    format: Format,
    fallback: F,
) -> Result<RedirectHandler<F>, ParseError> {
    let entries = parse(buf, format)?;
    Ok(map_handler(RedirectTable::build(entries), fallback))
}
