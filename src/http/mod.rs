//! HTTP transport subsystem.
//!
//! # Data Flow
//! ```text
//! Request<Body>
//!     → client.rs (URI rewrite, hyper roundtrip)
//!     → status handler (classification, body restoration)
//!     → (Response<Body>, Option<StatusError>) back to the caller
//! ```

pub mod client;

pub use client::{BackendClient, ClientError};
