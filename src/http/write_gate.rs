//! # Write Gate
//!
//! Static shared-secret check ahead of the handlers. Every mutating verb
//! (POST, PUT, DELETE) must present the configured key, either as an
//! `api_key` header or an `api_key` query parameter. Reads pass
//! unconditionally.

use axum::extract::{Request, State};
use axum::http::{Method, Uri};
use axum::middleware::Next;
use axum::response::Response;

use crate::api::ApiError;
use crate::observability::Logger;

use super::routes::AppState;

const API_KEY_PARAM: &str = "api_key";

/// The configured shared secret for mutating requests
#[derive(Debug, Clone)]
pub struct WriteGate {
    key: String,
}

impl WriteGate {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Whether a request with this method and supplied key may proceed
    pub fn allows(&self, method: &Method, supplied: Option<&str>) -> bool {
        let mutating =
            *method == Method::POST || *method == Method::PUT || *method == Method::DELETE;
        !mutating || supplied == Some(self.key.as_str())
    }
}

/// Middleware enforcing the gate ahead of every route
pub async fn require_api_key(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let supplied = supplied_key(&req);
    if state.gate.allows(req.method(), supplied.as_deref()) {
        Ok(next.run(req).await)
    } else {
        Logger::warn(
            "WRITE_GATE_REJECTED",
            &[
                ("method", req.method().as_str()),
                ("path", req.uri().path()),
            ],
        );
        Err(ApiError::Forbidden)
    }
}

/// Key from the `api_key` header, falling back to the query string
fn supplied_key(req: &Request) -> Option<String> {
    if let Some(value) = req
        .headers()
        .get(API_KEY_PARAM)
        .and_then(|v| v.to_str().ok())
    {
        return Some(value.to_string());
    }
    query_param(req.uri(), API_KEY_PARAM)
}

fn query_param(uri: &Uri, name: &str) -> Option<String> {
    uri.query()?.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}
