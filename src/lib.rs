//! Backend HTTP response classification for proxy pipelines.
//!
//! A status handler is selected once per backend from its configuration and
//! then applied to every completed exchange: responses either pass through
//! untouched or come back paired with a structured error carrying the status
//! code, body text and content encoding (optionally tagged with the backend
//! name). Inspected bodies are always restored, so downstream consumers read
//! the original bytes exactly once.

pub mod config;
pub mod http;
pub mod observability;
pub mod status;

pub use config::{load_config, BackendConfig, Config, ConfigError};
pub use http::{BackendClient, ClientError};
pub use status::{HttpResponseError, StatusError, StatusHandler, NAMESPACE};
