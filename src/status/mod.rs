//! Backend response classification subsystem.
//!
//! # Data Flow
//! ```text
//! BackendConfig (extra_config namespace)
//!     → handler.rs (select StatusHandler once per backend)
//!
//! Completed backend response
//!     → handler.rs (classify: pass through, or capture code/body/encoding)
//!     → error.rs (StatusError value returned alongside the response)
//! ```
//!
//! # Design Decisions
//! - Policy is fixed at configuration-binding time; classification is pure
//!   per-response and holds no cross-call state
//! - Error details are materialized eagerly so the caller never has to
//!   re-read the original stream
//! - Inspected bodies are restored from an owned buffer, keeping the
//!   response readable exactly once downstream

pub mod error;
pub mod handler;

pub use error::{HttpResponseError, StatusError};
pub use handler::{StatusHandler, NAMESPACE};
