use crate::errors::ServerError;
use crate::responses::{with_cors, ResultResp};
use astra::{Body, ResponseBuilder};
use serde::Serialize;

pub fn json_response<T: Serialize>(data: &T) -> ResultResp {
    let body = serde_json::to_string(data).map_err(|_| ServerError::InternalError)?;

    let resp = with_cors(ResponseBuilder::new().status(200))
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)?;

    Ok(resp)
}
