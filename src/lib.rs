//! # errtypes
//!
//! Semantic error categories that survive wrapping and map to HTTP status codes.
//!
//! ## Key Features
//!
//! - **Closed Categories**: bad input, unauthenticated, forbidden, not found, conflict
//! - **Wrapping-Aware**: predicates look at the root cause, ignoring context layers
//! - **Status Mapping**: one call at the boundary turns an error into a status code
//!
//! ## Example
//!
//! ```rust
//! use anyhow::Context;
//! use errtypes::{http_status_code, is_not_found, CategorizedError};
//!
//! fn find_user(id: u64) -> anyhow::Result<String> {
//!     Err(errtypes::not_found!("user {id}")).context("while handling GET /users")
//! }
//!
//! let err = find_user(7).unwrap_err();
//! assert!(is_not_found(&err));
//! assert_eq!(http_status_code(&err), 404);
//! assert_eq!(CategorizedError::bad_input("").to_string(), "");
//! ```

// Allow missing errors documentation - errors are self-documenting via type signatures
#![allow(clippy::missing_errors_doc)]

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

mod macros;

pub mod category;
pub mod chain;
pub mod classify;
pub mod error;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use category::Category;
pub use chain::ErrorChain;
pub use classify::{
    category_of, http_status, http_status_code, is_bad_input, is_conflict, is_forbidden,
    is_not_found, is_unauthenticated, UNCATEGORIZED_STATUS_CODE,
};
pub use error::{CategorizedError, ClassifyResult, ParseCategoryError};
