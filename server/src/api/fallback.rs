use axum::{
    http::{Method, StatusCode, Uri},
    response::Response,
};

#[derive(thiserror::Error, Debug)]
#[error("no route for {method} {path}")]
pub struct RouteNotFound {
    method: Method,
    path: String,
}

#[derive(thiserror::Error, Debug)]
#[error("method {method} not allowed on {path}")]
pub struct MethodNotAllowed {
    method: Method,
    path: String,
}

pub async fn method_not_allowed(method: Method, uri: Uri) -> Response {
    error::axum_error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        MethodNotAllowed {
            method,
            path: uri.path().to_owned(),
        },
    )
}

pub async fn handler(method: Method, uri: Uri) -> Response {
    error::axum_error_response(
        StatusCode::NOT_FOUND,
        RouteNotFound {
            method,
            path: uri.path().to_owned(),
        },
    )
}
