//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!
//! Consumers:
//!     → Log aggregation (stdout, file, remote)
//! ```
//!
//! # Design Decisions
//! - Structured logging via tracing; the embedding application picks the
//!   final subscriber if it wants something other than fmt

pub mod logging;

pub use logging::init_logging;
