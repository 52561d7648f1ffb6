//! Root-cause resolution for error chains.
//!
//! The classifier never wraps errors itself. Wrapping is left to the usual
//! collaborators (`anyhow::Context`, `thiserror` `#[source]` fields, boxed
//! `dyn Error`), and [`ErrorChain`] is the single seam through which the
//! innermost error of such a chain is reached.
//!
//! Custom error types opt in with a one-line impl:
//!
//! ```rust
//! use std::error::Error;
//! use errtypes::chain::{root_of, ErrorChain};
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("request failed")]
//! struct RequestError(#[source] errtypes::CategorizedError);
//!
//! impl ErrorChain for RequestError {
//!     fn root_cause(&self) -> Option<&(dyn Error + 'static)> {
//!         Some(root_of(self))
//!     }
//! }
//! ```

use std::error::Error as StdError;

use crate::error::CategorizedError;

/// An error value, possibly absent, that can be resolved to its root cause.
pub trait ErrorChain {
    /// The innermost error of the chain, or `None` when there is no error.
    fn root_cause(&self) -> Option<&(dyn StdError + 'static)>;
}

/// Follow `source()` links from `err` until an error without a source.
///
/// Chains must be acyclic.
pub fn root_of<'a>(err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    let mut current = err;
    while let Some(next) = current.source() {
        current = next;
    }
    current
}

impl ErrorChain for CategorizedError {
    fn root_cause(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self)
    }
}

impl ErrorChain for anyhow::Error {
    fn root_cause(&self) -> Option<&(dyn StdError + 'static)> {
        Some(anyhow::Error::root_cause(self))
    }
}

impl ErrorChain for dyn StdError + 'static {
    fn root_cause(&self) -> Option<&(dyn StdError + 'static)> {
        Some(root_of(self))
    }
}

impl ErrorChain for dyn StdError + Send + Sync + 'static {
    fn root_cause(&self) -> Option<&(dyn StdError + 'static)> {
        Some(root_of(self))
    }
}

impl<T: ErrorChain + ?Sized> ErrorChain for Box<T> {
    fn root_cause(&self) -> Option<&(dyn StdError + 'static)> {
        (**self).root_cause()
    }
}

impl<T: ErrorChain + ?Sized> ErrorChain for &T {
    fn root_cause(&self) -> Option<&(dyn StdError + 'static)> {
        (**self).root_cause()
    }
}

// Absent errors resolve to no root at all.
impl<T: ErrorChain> ErrorChain for Option<T> {
    fn root_cause(&self) -> Option<&(dyn StdError + 'static)> {
        self.as_ref().and_then(|err| err.root_cause())
    }
}
