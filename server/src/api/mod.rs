pub mod fallback;
pub mod health;

#[cfg(feature = "openapi")]
pub const OPEN_API_DOCS_PATH: &str = "/openapi.json";

#[cfg(feature = "scalar")]
pub const DOCS_PATH: &str = "/docs";

#[cfg(feature = "openapi")]
#[derive(utoipa::OpenApi)]
#[openapi(
    info(title = "Leave Planner API"),
    paths(health::handler),
    components(schemas(health::ResponseBody, health::Status))
)]
pub struct OpenApiDoc;

#[cfg(feature = "openapi")]
pub fn openapi() -> utoipa::openapi::OpenApi {
    use utoipa::OpenApi;

    OpenApiDoc::openapi()
}
