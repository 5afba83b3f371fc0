// envelope.rs
use crate::errors::ServerError;
use serde_json::{Map, Value};

/// Literal prefix Make-style automation callers put on hex-encoded bodies.
const BUFFER_PREFIX: &str = "IMTBuffer";
const BUFFER_SEPARATOR: &str = ": ";

/// The request body classified once by its outer JSON type. Exactly one
/// branch is attempted per request; we never try shapes speculatively.
#[derive(Debug)]
pub enum RawBody {
    Text(String),
    List(Vec<Value>),
    Map(Map<String, Value>),
}

impl RawBody {
    fn classify(body: Value) -> Result<Self, ServerError> {
        match body {
            Value::String(s) => Ok(RawBody::Text(s)),
            Value::Array(items) => Ok(RawBody::List(items)),
            Value::Object(map) => Ok(RawBody::Map(map)),
            Value::Null => Err(ServerError::EmptyInput),
            other => Err(ServerError::UnexpectedShape(format!(
                "expected a string, object, or list body, got {}",
                json_type_name(&other)
            ))),
        }
    }
}

/// Unwrap the request body into the flat list of property records.
///
/// Accepted shapes:
/// - `"IMTBuffer…: <hex>"` string: hex → UTF-8 → JSON, then re-dispatched
/// - any other string: parsed as JSON, then re-dispatched
/// - `{"results": {"properties": [...]}}`
/// - `[{"results": {"properties": [...]}}, ...]` (records under element 0)
/// - a bare list of records
pub fn normalize(body: Value) -> Result<Vec<Value>, ServerError> {
    match RawBody::classify(body)? {
        RawBody::Text(text) => {
            let decoded = decode_text(&text)?;
            match RawBody::classify(decoded)? {
                RawBody::Text(_) => Err(ServerError::UnexpectedShape(
                    "string body decoded to another string".to_string(),
                )),
                RawBody::List(items) => records_from_list(items),
                RawBody::Map(map) => records_from_map(&map),
            }
        }
        RawBody::List(items) => records_from_list(items),
        RawBody::Map(map) => records_from_map(&map),
    }
}

fn decode_text(text: &str) -> Result<Value, ServerError> {
    if text.is_empty() {
        return Err(ServerError::EmptyInput);
    }

    if text.starts_with(BUFFER_PREFIX) {
        decode_buffer(text)
    } else {
        serde_json::from_str(text).map_err(|e| ServerError::MalformedJson(e.to_string()))
    }
}

/// Decode an `IMTBuffer…: <hex>` string down to the JSON value it carries.
/// All three sub-steps collapse into `InvalidEnvelope`; the message keeps
/// track of which one failed.
pub(crate) fn decode_buffer(text: &str) -> Result<Value, ServerError> {
    let (_, payload) = text
        .split_once(BUFFER_SEPARATOR)
        .ok_or_else(|| ServerError::InvalidEnvelope("missing ': ' separator".to_string()))?;

    let bytes = hex::decode(payload.trim_end())
        .map_err(|e| ServerError::InvalidEnvelope(format!("hex decode failed: {e}")))?;

    let json_text = String::from_utf8(bytes)
        .map_err(|e| ServerError::InvalidEnvelope(format!("UTF-8 decode failed: {e}")))?;

    serde_json::from_str(&json_text)
        .map_err(|e| ServerError::InvalidEnvelope(format!("JSON parse failed: {e}")))
}

fn records_from_map(map: &Map<String, Value>) -> Result<Vec<Value>, ServerError> {
    if map.is_empty() {
        return Err(ServerError::EmptyInput);
    }

    let results = map
        .get("results")
        .ok_or_else(|| ServerError::UnexpectedShape("'results' key not found".to_string()))?
        .as_object()
        .ok_or_else(|| ServerError::UnexpectedShape("'results' is not an object".to_string()))?;

    let properties = results
        .get("properties")
        .ok_or_else(|| {
            ServerError::UnexpectedShape("'properties' key not found under 'results'".to_string())
        })?
        .as_array()
        .ok_or_else(|| ServerError::UnexpectedShape("'properties' is not a list".to_string()))?;

    // An explicitly empty properties list is a valid, empty result.
    Ok(properties.clone())
}

fn records_from_list(items: Vec<Value>) -> Result<Vec<Value>, ServerError> {
    if items.is_empty() {
        return Err(ServerError::EmptyInput);
    }

    // A wrapped list carries the records under [0].results.properties;
    // any other list is already the record list.
    match items.first() {
        Some(Value::Object(first)) if first.contains_key("results") => records_from_map(first),
        _ => Ok(items),
    }
}

fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
