mod context;
mod internal_error;

pub use context::Context;
pub use internal_error::InternalError;

#[cfg(feature = "axum")]
mod axum_error_response;
#[cfg(feature = "axum")]
pub use axum_error_response::{HELP, axum_error_response};
