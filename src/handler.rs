//! Request routing and the analyze handler
//!
//! Two routes: `GET /` answers a plain-text liveness string, `POST /analyze`
//! accepts `{"text": "..."}` and returns the full analysis report. Everything
//! else is 404; unsupported methods are 405. The handlers themselves are
//! infallible: every failure mode maps to an error response.

use crate::config::AppState;
use crate::logger;
use crate::response;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use serde::Deserialize;
use std::convert::Infallible;
use std::sync::Arc;

const LIVENESS_BODY: &str = "Server is up and running";

#[derive(Debug, Deserialize)]
struct AnalysisRequest {
    text: Option<String>,
}

/// Check HTTP method and return an early response if it cannot be routed.
/// Returns Some(response) for OPTIONS/405, None to continue processing.
fn check_http_method(method: &Method, state: &AppState) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD | &Method::POST => None,
        &Method::OPTIONS => Some(response::build_options_response(&state.config.http)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(response::build_405_response(&state.config.http))
        }
    }
}

/// Validate Content-Length header against max body size.
/// Returns Some(413 response) if too large, None otherwise.
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    state: &AppState,
) -> Option<Response<Full<Bytes>>> {
    let max_body_size = state.config.http.max_body_size;
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(response::build_413_response(&state.config.http))
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let is_head = method == Method::HEAD;

    if let Some(resp) = check_http_method(&method, &state) {
        logger::log_route(method.as_str(), &path, resp.status().as_u16(), &state);
        return Ok(resp);
    }

    if let Some(resp) = check_body_size(&req, &state) {
        logger::log_route(method.as_str(), &path, resp.status().as_u16(), &state);
        return Ok(resp);
    }

    let resp = match (method.clone(), path.as_str()) {
        (Method::GET | Method::HEAD, "/") => {
            response::build_text_response(LIVENESS_BODY, &state.config.http, is_head)
        }
        (Method::POST, "/analyze") => handle_analyze(req, &state).await,
        _ => response::build_404_response(&state.config.http),
    };

    logger::log_route(method.as_str(), &path, resp.status().as_u16(), &state);
    Ok(resp)
}

async fn handle_analyze(
    req: Request<hyper::body::Incoming>,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    let whole_body = match req.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(_) => {
            return response::build_400_response(
                "Failed to read request body",
                &state.config.http,
            );
        }
    };

    let request: AnalysisRequest = match serde_json::from_slice(&whole_body) {
        Ok(parsed) => parsed,
        Err(e) => {
            return response::build_400_response(
                &format!("Invalid JSON: {e}"),
                &state.config.http,
            );
        }
    };

    // Absent and empty both fail validation; whitespace-only passes.
    let text = match request.text {
        Some(text) if !text.is_empty() => text,
        _ => {
            return response::build_400_response("Text is required", &state.config.http);
        }
    };

    let report = state.analyzer.analyze(&text);

    match serde_json::to_string(&report) {
        Ok(json) => response::build_json_response(json, &state.config.http, false),
        Err(e) => {
            logger::log_error(&format!("Failed to serialize analysis report: {e}"));
            response::build_500_response(&state.config.http)
        }
    }
}
