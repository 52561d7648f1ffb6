//! Logging utilities for errtypes
//!
//! Re-exports tracing macros with log_* naming convention for consistency.

pub(crate) use tracing::{debug as log_debug, error as log_error};
