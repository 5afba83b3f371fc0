use crate::errors::ServerError;
use crate::responses::with_cors;
use astra::{Body, Response, ResponseBuilder};

/// Convert a ServerError into the JSON error response the caller sees.
/// The body mirrors the upstream tooling's expectations: a single
/// `{"detail": "..."}` object.
pub fn error_to_response(err: ServerError) -> Response {
    let status = err.status();
    let body = serde_json::json!({ "detail": err.to_string() }).to_string();

    with_cors(ResponseBuilder::new().status(status))
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
