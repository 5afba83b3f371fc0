// responses/cors.rs
use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};

/// The upstream caller is a browser-based automation tool, so every
/// response carries wide-open CORS headers.
pub fn with_cors(builder: ResponseBuilder) -> ResponseBuilder {
    builder
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "*")
}

/// Empty 204 answer for CORS preflight requests.
pub fn preflight_response() -> ResultResp {
    let resp = with_cors(ResponseBuilder::new().status(204))
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)?;

    Ok(resp)
}
