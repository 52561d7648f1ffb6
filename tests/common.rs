//! Test helper utilities for errtypes integration tests
//!
//! Wrapper error types shaped like the ones application code builds on top
//! of categorized errors.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use std::error::Error;

use errtypes::chain::{root_of, ErrorChain};
use errtypes::CategorizedError;
use thiserror::Error;

/// Storage-layer error keeping its cause as `#[source]`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("query failed: {query}")]
    Query {
        query: String,
        #[source]
        source: CategorizedError,
    },

    #[error("storage unavailable")]
    Unavailable(#[from] std::io::Error),
}

/// Service-layer error wrapping a storage error.
#[derive(Debug, Error)]
#[error("service call {operation} failed")]
pub struct ServiceError {
    pub operation: &'static str,
    #[source]
    pub source: StoreError,
}

impl ErrorChain for ServiceError {
    fn root_cause(&self) -> Option<&(dyn Error + 'static)> {
        Some(root_of(self))
    }
}

pub fn store_error(source: CategorizedError) -> StoreError {
    StoreError::Query {
        query: "SELECT * FROM users WHERE id = $1".to_string(),
        source,
    }
}

pub fn service_error(source: CategorizedError) -> ServiceError {
    ServiceError {
        operation: "get_user",
        source: store_error(source),
    }
}
