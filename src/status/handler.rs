//! Status-handler selection and response classification.

use axum::body::{to_bytes, Body, Bytes};
use axum::http::{header, Response};

use crate::config::schema::BackendConfig;
use crate::status::error::{HttpResponseError, StatusError};

/// Key of the extra-config block holding status-policy options.
pub const NAMESPACE: &str = "http/status-policy";

/// Option within the namespace that enables the error-aware handlers.
const RETURN_ERROR_DETAILS: &str = "return_error_details";

/// First status code treated as a backend failure by the error-aware handlers.
const ERROR_THRESHOLD: u16 = 400;

/// Per-backend policy deciding how backend status codes are treated.
///
/// Selected once from the backend configuration and shared read-only across
/// all exchanges with that backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusHandler {
    /// Any status code is passed through as-is; interpreting it is the
    /// caller's business.
    PassThrough,

    /// Codes >= 400 surface as a [`StatusError`] carrying code, body and
    /// encoding.
    ErrorOnStatus,

    /// As [`StatusHandler::ErrorOnStatus`], with errors annotated with the
    /// backend name.
    Detailed(String),
}

impl StatusHandler {
    /// Select the handler for a backend.
    ///
    /// Resolution order: detailed with a backend name, then detailed without
    /// one, then pass-through. A missing namespace, an unset flag, or a flag
    /// of the wrong type all fall back to pass-through rather than failing.
    pub fn from_config(backend: &BackendConfig) -> StatusHandler {
        let details = backend
            .extra_config
            .get(NAMESPACE)
            .and_then(|ns| ns.get(RETURN_ERROR_DETAILS))
            .and_then(|v| v.as_bool())
            .unwrap_or(false);

        let handler = if !details {
            StatusHandler::PassThrough
        } else if backend.name.is_empty() {
            StatusHandler::ErrorOnStatus
        } else {
            StatusHandler::Detailed(backend.name.clone())
        };

        tracing::debug!(
            backend = %backend.name,
            handler = ?handler,
            "Selected status handler"
        );
        handler
    }

    /// Classify a completed backend response.
    ///
    /// Always hands the response back; the error slot is filled only when the
    /// policy treats the status code as a failure. When a body is inspected
    /// to build the error it is restored in full, so the caller reads the
    /// original bytes exactly once either way.
    pub async fn classify(&self, resp: Response<Body>) -> (Response<Body>, Option<StatusError>) {
        match self {
            StatusHandler::PassThrough => (resp, None),
            StatusHandler::ErrorOnStatus => {
                let (resp, error) = classify_error_on_status(resp).await;
                (resp, error.map(StatusError::Plain))
            }
            StatusHandler::Detailed(name) => {
                let (resp, error) = classify_error_on_status(resp).await;
                let error = error.map(|error| StatusError::Named {
                    name: name.clone(),
                    error,
                });
                (resp, error)
            }
        }
    }
}

/// Shared failure path for the error-aware handlers.
async fn classify_error_on_status(
    resp: Response<Body>,
) -> (Response<Body>, Option<HttpResponseError>) {
    if resp.status().as_u16() < ERROR_THRESHOLD {
        return (resp, None);
    }

    let (parts, body) = resp.into_parts();

    // A failed read degrades to an empty message; classification itself must
    // never fail.
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(status = parts.status.as_u16(), error = %e, "Failed to read backend error body");
            Bytes::new()
        }
    };

    let enc = parts
        .headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let error = HttpResponseError {
        code: parts.status.as_u16(),
        msg: String::from_utf8_lossy(&bytes).into_owned(),
        enc,
    };

    (Response::from_parts(parts, Body::from(bytes)), Some(error))
}
