pub mod cors;
pub mod errors;
pub mod html;
pub mod json;
pub mod xlsx;

pub use cors::{preflight_response, with_cors};
pub use errors::error_to_response;
pub use html::html_response;
pub use json::json_response;
pub use xlsx::xlsx_response;

// Alias lives in crate::errors; re-exported here for route handlers.
pub use crate::errors::ResultResp;
