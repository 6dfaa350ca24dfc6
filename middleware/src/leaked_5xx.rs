use axum::{
    body::{Body, to_bytes},
    http::{Request, Response},
    middleware::Next,
    response::IntoResponse,
};

/// Handlers are expected to turn internal failures into bare 5xx responses themselves.
/// Anything that still carries a body past this point is logged and stripped.
pub async fn mw_handle_leaked_5xx(request: Request<Body>, next: Next) -> Response<Body> {
    let response = next.run(request).await;
    let status = response.status();

    if !status.is_server_error() {
        return response;
    }

    match to_bytes(response.into_body(), usize::MAX).await {
        Ok(content) if !content.is_empty() => tracing::error!(%status, "{:?}", content),
        Ok(_) => {}
        Err(e) => tracing::error!(
            %status,
            "unable to read 5xx response body :: {:?}",
            e
        ),
    }

    status.into_response()
}
