use axum::{
    Json,
    response::{IntoResponse, Response},
};
use axum_macros::debug_handler;
use serde::Serialize;

pub const PATH: &str = "/health";

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", schema(as = health::ResponseBody))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResponseBody {
    pub status: Status,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
}

impl Default for ResponseBody {
    fn default() -> Self {
        Self { status: Status::Ok }
    }
}

/// Liveness probe. Takes no input; query strings and bodies are never read.
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = PATH,
    responses(
        (status = 200, description = "Process is up", body = ResponseBody, content_type = "application/json"),
    ),
    tag = "probe"
))]
#[debug_handler]
#[tracing::instrument(ret)]
pub async fn handler() -> ResponseBody {
    ResponseBody::default()
}

impl IntoResponse for ResponseBody {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
