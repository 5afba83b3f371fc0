use crate::responses::error_to_response;
use crate::router::handle;
use crate::transform::TransformOptions;
use astra::Server;
use std::net::SocketAddr;

mod envelope;
mod errors;
mod responses;
mod router;
mod spreadsheets;
mod templates;
mod transform;

#[cfg(test)]
mod tests;

fn main() {
    // Per-record skip policy is opt-in; see TransformOptions.
    let opts = TransformOptions {
        skip_malformed_records: std::env::var("SKIP_MALFORMED_RECORDS")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false),
    };

    if opts.skip_malformed_records {
        println!("⚠️ Malformed records will be skipped, not rejected");
    }

    let addr: SocketAddr = "0.0.0.0:8000".parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &opts) {
        Ok(resp) => resp,
        Err(err) => {
            if err.status() >= 500 {
                eprintln!("❌ Request failed: {err}");
            }
            error_to_response(err)
        }
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
