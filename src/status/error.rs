//! Classified-error values produced by status handlers.

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Failure details captured from a backend response.
///
/// The serialized field names are a stable contract with downstream
/// consumers; renaming them breaks clients that parse proxy error bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{msg}")]
pub struct HttpResponseError {
    /// Status code returned by the backend.
    #[serde(rename = "http_status_code")]
    pub code: u16,

    /// Backend response body, as text.
    #[serde(rename = "http_body", default, skip_serializing_if = "String::is_empty")]
    pub msg: String,

    /// Content-Type of the backend response body.
    #[serde(rename = "http_body_encoding", default, skip_serializing_if = "String::is_empty")]
    pub enc: String,
}

impl HttpResponseError {
    /// Status code returned by the backend.
    pub fn status_code(&self) -> u16 {
        self.code
    }
}

/// Error returned by the error-aware status handlers.
///
/// `Named` carries the same payload as `Plain` plus the identifier of the
/// backend that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    #[error(transparent)]
    Plain(HttpResponseError),

    #[error("{error}")]
    Named {
        name: String,
        error: HttpResponseError,
    },
}

impl StatusError {
    /// The captured failure details, regardless of variant.
    pub fn payload(&self) -> &HttpResponseError {
        match self {
            StatusError::Plain(error) => error,
            StatusError::Named { error, .. } => error,
        }
    }

    /// Status code returned by the backend.
    pub fn status_code(&self) -> u16 {
        self.payload().code
    }

    /// Backend response body, as text. Empty when the body could not be read.
    pub fn message(&self) -> &str {
        &self.payload().msg
    }

    /// Content-Type of the backend response body.
    pub fn encoding(&self) -> &str {
        &self.payload().enc
    }

    /// Name of the backend that produced the error, when known.
    pub fn backend_name(&self) -> Option<&str> {
        match self {
            StatusError::Plain(_) => None,
            StatusError::Named { name, .. } => Some(name),
        }
    }
}

// The backend name is internal bookkeeping, not part of the wire shape, so
// both variants serialize as the bare payload.
impl Serialize for StatusError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.payload().serialize(serializer)
    }
}
