use astra::Response;
// errors.rs
use std::fmt;

/// Errors originating from validation of the request body, from the
/// transform pipeline, or from the server layer itself (routing,
/// response building).
#[derive(Debug, PartialEq)]
pub enum ServerError {
    NotFound,
    /// Body absent, empty string, empty object, or empty list.
    EmptyInput,
    /// An `IMTBuffer: <hex>` string failed hex-decode, UTF-8-decode, or
    /// JSON-parse. One kind for all three sub-steps; the message says which.
    InvalidEnvelope(String),
    /// A non-buffer string body failed JSON parsing.
    MalformedJson(String),
    /// Outer type is not string/object/list, or `results`/`properties`
    /// are missing or the wrong container type.
    UnexpectedShape(String),
    XlsxError(String),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    /// HTTP status this error surfaces as.
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::EmptyInput
            | ServerError::InvalidEnvelope(_)
            | ServerError::MalformedJson(_)
            | ServerError::UnexpectedShape(_) => 400,
            ServerError::XlsxError(_) | ServerError::InternalError => 500,
        }
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::EmptyInput => write!(f, "Empty input: expected a non-empty payload"),
            ServerError::InvalidEnvelope(msg) => write!(f, "Invalid buffer envelope: {msg}"),
            ServerError::MalformedJson(msg) => write!(f, "JSON parse error: {msg}"),
            ServerError::UnexpectedShape(msg) => write!(f, "Unexpected data shape: {msg}"),
            ServerError::XlsxError(msg) => write!(f, "Spreadsheet error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
