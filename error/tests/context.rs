use std::num::ParseIntError;

use error::{Context, InternalError};

fn parse_port(raw: &str) -> Result<u16, InternalError> {
    raw.parse::<u16>().with_context(|| format!("parse PORT :: {raw}"))
}

#[test]
fn context_wraps_source_error() {
    let err = parse_port("eighty").unwrap_err();

    let message = err.to_string();
    assert!(message.starts_with("parse PORT :: eighty"), "{message}");
    assert!(message.contains("invalid digit"), "{message}");
    assert!(err.0.downcast_ref::<ParseIntError>().is_some());
}

#[test]
fn context_passes_ok_through() {
    assert_eq!(parse_port("8000").unwrap(), 8000);
}
