use crate::errors::ServerError;
use crate::responses::{html_response, json_response, preflight_response, ResultResp};
use crate::spreadsheets::export_flat_records_xlsx;
use crate::templates;
use crate::transform::{transform, TransformOptions};
use astra::Request;
use std::io::Read;

pub fn handle(mut req: Request, opts: &TransformOptions) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        // Preflight for the browser-based automation caller
        ("OPTIONS", _) => preflight_response(),

        ("GET", "/") => html_response(templates::home_page()),

        ("POST", "/transform") => {
            let body = read_body(&mut req)?;
            let records = transform(&body, opts)?;
            json_response(&records)
        }

        ("POST", "/transform/xlsx") => {
            let body = read_body(&mut req)?;
            let records = transform(&body, opts)?;
            export_flat_records_xlsx(&records)
        }

        _ => Err(ServerError::NotFound),
    }
}

fn read_body(req: &mut Request) -> Result<String, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut buf)
        .map_err(|_| ServerError::InternalError)?;

    String::from_utf8(buf)
        .map_err(|e| ServerError::MalformedJson(format!("body is not valid UTF-8: {e}")))
}
