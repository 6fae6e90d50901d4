//! HTTP response builders
//!
//! All responses carry the configured `Server` header; CORS headers are added
//! when enabled (all origins, methods GET and POST). Builders never panic: a
//! failed build falls back to a bare response.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use crate::config::HttpConfig;

const CORS_METHODS: &str = "GET, POST";
const CORS_EXPOSE_HEADERS: &str = "Access-Control-Allow-Private-Network";

fn apply_common_headers(
    mut builder: hyper::http::response::Builder,
    http_config: &HttpConfig,
) -> hyper::http::response::Builder {
    builder = builder.header("Server", &http_config.server_name);
    if http_config.enable_cors {
        builder = builder
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", CORS_METHODS)
            .header("Access-Control-Expose-Headers", CORS_EXPOSE_HEADERS);
    }
    builder
}

/// 200 with a JSON body; HEAD requests get the headers without the body.
pub fn build_json_response(
    json: String,
    http_config: &HttpConfig,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let body = if is_head { String::new() } else { json };
    apply_common_headers(Response::builder().status(StatusCode::OK), http_config)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            eprintln!("[Error] Failed to build JSON response: {e}");
            Response::new(Full::new(Bytes::from("{}")))
        })
}

/// 200 with a plain-text body; HEAD requests get the headers without the body.
pub fn build_text_response(
    text: &str,
    http_config: &HttpConfig,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let body = if is_head { "" } else { text };
    apply_common_headers(Response::builder().status(StatusCode::OK), http_config)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap_or_else(|e| {
            eprintln!("[Error] Failed to build text response: {e}");
            Response::new(Full::new(Bytes::from("OK")))
        })
}

/// CORS preflight response.
pub fn build_options_response(http_config: &HttpConfig) -> Response<Full<Bytes>> {
    apply_common_headers(
        Response::builder().status(StatusCode::NO_CONTENT),
        http_config,
    )
    .body(Full::new(Bytes::new()))
    .unwrap_or_else(|_| Response::new(Full::new(Bytes::new())))
}

/// 400 with a JSON error body.
pub fn build_400_response(message: &str, http_config: &HttpConfig) -> Response<Full<Bytes>> {
    let body = serde_json::json!({ "error": message }).to_string();
    apply_common_headers(
        Response::builder().status(StatusCode::BAD_REQUEST),
        http_config,
    )
    .header("Content-Type", "application/json")
    .body(Full::new(Bytes::from(body)))
    .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Bad Request"))))
}

pub fn build_404_response(http_config: &HttpConfig) -> Response<Full<Bytes>> {
    apply_common_headers(
        Response::builder().status(StatusCode::NOT_FOUND),
        http_config,
    )
    .header("Content-Type", "application/json")
    .body(Full::new(Bytes::from(r#"{"error":"Not Found"}"#)))
    .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Not Found"))))
}

pub fn build_405_response(http_config: &HttpConfig) -> Response<Full<Bytes>> {
    apply_common_headers(
        Response::builder().status(StatusCode::METHOD_NOT_ALLOWED),
        http_config,
    )
    .header("Allow", CORS_METHODS)
    .header("Content-Type", "text/plain")
    .body(Full::new(Bytes::from("Method Not Allowed")))
    .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Method Not Allowed"))))
}

pub fn build_413_response(http_config: &HttpConfig) -> Response<Full<Bytes>> {
    apply_common_headers(
        Response::builder().status(StatusCode::PAYLOAD_TOO_LARGE),
        http_config,
    )
    .header("Content-Type", "text/plain")
    .body(Full::new(Bytes::from("Request Entity Too Large")))
    .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Request Entity Too Large"))))
}

pub fn build_500_response(http_config: &HttpConfig) -> Response<Full<Bytes>> {
    apply_common_headers(
        Response::builder().status(StatusCode::INTERNAL_SERVER_ERROR),
        http_config,
    )
    .header("Content-Type", "application/json")
    .body(Full::new(Bytes::from(r#"{"error":"Internal server error"}"#)))
    .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Error"))))
}
