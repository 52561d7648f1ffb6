//! Categorized error values.
//!
//! [`CategorizedError`] is the root error application code creates at the
//! point a failure is detected. It carries exactly one [`Category`] and a
//! message, and renders to nothing but that message.
//!
//! # Creating Errors
//!
//! ```rust
//! use errtypes::{not_found, CategorizedError, Category};
//!
//! let err = CategorizedError::bad_input("missing field 'name'");
//! assert_eq!(err.category(), Category::BadInput);
//! assert_eq!(err.to_string(), "missing field 'name'");
//!
//! let id = 42;
//! let err = not_found!("user {id} does not exist");
//! assert_eq!(err.to_string(), "user 42 does not exist");
//! ```
//!
//! # Wrapping
//!
//! The category survives any number of context layers, as long as each
//! layer keeps the original as its source:
//!
//! ```rust
//! use anyhow::Context;
//! use errtypes::{is_not_found, CategorizedError};
//!
//! fn load() -> anyhow::Result<()> {
//!     Err(CategorizedError::not_found("config.toml")).context("while loading config")
//! }
//!
//! let err = load().unwrap_err();
//! assert!(is_not_found(&err));
//! ```

use std::fmt;

use thiserror::Error;

use crate::category::Category;

/// Convenient result type for operations failing with a [`CategorizedError`].
pub type ClassifyResult<T> = std::result::Result<T, CategorizedError>;

/// An error tagged with exactly one [`Category`].
///
/// Immutable once built. `Display` writes the message verbatim, with no
/// category tag or prefix.
///
/// | Variant | Category | Status |
/// |---------|----------|--------|
/// | `BadInput` | [`Category::BadInput`] | 400 |
/// | `Unauthenticated` | [`Category::Unauthenticated`] | 401 |
/// | `Forbidden` | [`Category::Forbidden`] | 403 |
/// | `NotFound` | [`Category::NotFound`] | 404 |
/// | `Conflict` | [`Category::Conflict`] | 409 |
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CategorizedError {
    /// Caused by a missing or wrong input parameter.
    #[error("{0}")]
    BadInput(String),

    /// Caused by missing authentication.
    #[error("{0}")]
    Unauthenticated(String),

    /// Caused by insufficient permissions.
    #[error("{0}")]
    Forbidden(String),

    /// Caused by a missing resource.
    #[error("{0}")]
    NotFound(String),

    /// Caused by a conflict with the current state of a resource.
    #[error("{0}")]
    Conflict(String),
}

impl CategorizedError {
    /// Create an error of the given category. The message is not validated.
    pub fn new(category: Category, message: impl Into<String>) -> Self {
        let message = message.into();
        match category {
            Category::BadInput => Self::BadInput(message),
            Category::Unauthenticated => Self::Unauthenticated(message),
            Category::Forbidden => Self::Forbidden(message),
            Category::NotFound => Self::NotFound(message),
            Category::Conflict => Self::Conflict(message),
        }
    }

    /// Create an error from pre-formatted arguments.
    ///
    /// This is what the [`bad_input!`](crate::bad_input) family of macros
    /// expands to.
    pub fn from_args(category: Category, args: fmt::Arguments<'_>) -> Self {
        Self::new(category, fmt::format(args))
    }

    pub fn bad_input(message: impl Into<String>) -> Self {
        Self::new(Category::BadInput, message)
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::new(Category::Unauthenticated, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(Category::Forbidden, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(Category::NotFound, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(Category::Conflict, message)
    }

    pub fn category(&self) -> Category {
        match self {
            Self::BadInput(_) => Category::BadInput,
            Self::Unauthenticated(_) => Category::Unauthenticated,
            Self::Forbidden(_) => Category::Forbidden,
            Self::NotFound(_) => Category::NotFound,
            Self::Conflict(_) => Category::Conflict,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadInput(m)
            | Self::Unauthenticated(m)
            | Self::Forbidden(m)
            | Self::NotFound(m)
            | Self::Conflict(m) => m,
        }
    }

    pub fn into_message(self) -> String {
        match self {
            Self::BadInput(m)
            | Self::Unauthenticated(m)
            | Self::Forbidden(m)
            | Self::NotFound(m)
            | Self::Conflict(m) => m,
        }
    }
}

/// Returned when parsing a [`Category`] from an unknown name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown error category: {input}")]
pub struct ParseCategoryError {
    /// The rejected input.
    pub input: String,
}
