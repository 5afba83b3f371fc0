use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

/// Build a request the way the server would receive it.
pub fn request(method: Method, path: &str, body: Body) -> Request {
    let mut req = Request::new(body);
    *req.method_mut() = method;
    *req.uri_mut() = path.parse().unwrap();
    req
}

pub fn post(path: &str, body: &str) -> Request {
    request(Method::POST, path, Body::from(body.to_string()))
}

/// Drain a response body into a string.
pub fn read_body(resp: &mut Response) -> String {
    let mut buf = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut buf)
        .expect("Failed to read response body");
    String::from_utf8(buf).expect("Response body was not UTF-8")
}
