use std::time::Instant;

use axum::{
    body::Body,
    http::{Request, Response},
    middleware::Next,
};

/// Logs wall-clock time spent in the inner service.
/// Emitted inside the request span when layered beneath `TraceLayer`.
pub async fn latency_ms(request: Request<Body>, next: Next) -> Response<Body> {
    let start = Instant::now();
    let response = next.run(request).await;
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

    tracing::info!(latency_ms, status = response.status().as_u16());
    response
}
