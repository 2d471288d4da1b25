use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::shared::format::format_size;

/// One line per request: status, method, path, duration and body size.
/// The body is buffered to measure it, then handed on unchanged.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::error!(
                "{} {} {} | {}ms | body error: {}",
                parts.status.as_u16(),
                method,
                path,
                start.elapsed().as_millis(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let elapsed = start.elapsed().as_millis();
    if parts.status.is_success() {
        tracing::info!(
            "{} {:>6} {} | {:>5}ms | {:>10}",
            parts.status.as_u16(),
            method,
            path,
            elapsed,
            format_size(bytes.len())
        );
    } else {
        tracing::warn!(
            "{} {:>6} {} | {:>5}ms | {:>10}",
            parts.status.as_u16(),
            method,
            path,
            elapsed,
            format_size(bytes.len())
        );
    }

    Response::from_parts(parts, Body::from(bytes))
}
