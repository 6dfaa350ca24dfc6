use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use time::{OffsetDateTime, format_description::well_known::Iso8601};

pub const HELP: &str = "Please check the response headers for `x-request-id`, include the datetime and raise a support ticket.";

/// JSON body shared by every client-visible error:
/// `{"error": "...", "help": "...", "datetime": "..."}`
pub fn axum_error_response(status: StatusCode, err: impl std::error::Error) -> Response {
    let now_iso8601 = OffsetDateTime::now_utc()
        .format(&Iso8601::DATE_TIME_OFFSET)
        .inspect_err(|e| {
            tracing::warn!(
                "unable to format OffsetDateTime::now_utc() as Iso8601 :: {:?}",
                e
            )
        })
        .ok();

    tracing::info!(%status, "{:?}", err);
    (
        status,
        Json(serde_json::json!({
            "error": err.to_string(),
            "help": HELP,
            "datetime": now_iso8601
        })),
    )
        .into_response()
}
