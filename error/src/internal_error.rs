/// Failure the caller cannot act on: startup, I/O, anything outside the request contract.
///
/// `Display` prints the whole context chain so that a single log line is enough.
#[derive(thiserror::Error, Debug)]
#[error("{0:?}")]
pub struct InternalError(#[from] pub anyhow::Error);

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for InternalError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!("{:?}", self.0);
        axum::http::StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
