// Unit Tests for Root-Cause Resolution
//
// UNIT UNDER TEST: ErrorChain, root_of
//
// BUSINESS RESPONSIBILITY:
//   - Resolves any supported error value to the innermost error of its chain
//   - Treats an absent error as having no root at all
//
// TEST COVERAGE:
//   - source() walking over hand-built chains of several levels
//   - Absent errors through Option
//   - Boxed and borrowed error values

use std::error::Error as StdError;
use std::fmt;

use crate::chain::{root_of, ErrorChain};
use crate::error::CategorizedError;

/// Minimal context layer that keeps its cause as `source()`.
#[derive(Debug)]
struct Layer {
    context: &'static str,
    cause: Box<dyn StdError + Send + Sync>,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.context)
    }
}

impl StdError for Layer {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.cause.as_ref())
    }
}

fn wrap(cause: impl StdError + Send + Sync + 'static, context: &'static str) -> Layer {
    Layer {
        context,
        cause: Box::new(cause),
    }
}

#[cfg(test)]
mod root_of_tests {
    use super::*;

    #[test]
    fn test_root_of_unwrapped_error_is_itself() {
        // Arrange
        let error = CategorizedError::not_found("missing");

        // Act
        let root = root_of(&error);

        // Assert
        assert_eq!(root.to_string(), "missing");
    }

    #[test]
    fn test_root_of_follows_every_layer() {
        // Test verifies walking continues until an error without a source

        // Arrange
        let error = wrap(
            wrap(CategorizedError::conflict("duplicate key"), "while saving"),
            "while handling request",
        );

        // Act
        let root = root_of(&error);

        // Assert
        assert_eq!(root.to_string(), "duplicate key");
        assert!(root.downcast_ref::<CategorizedError>().is_some());
    }
}

#[cfg(test)]
mod error_chain_impl_tests {
    use super::*;

    #[test]
    fn test_absent_error_has_no_root() {
        // Arrange
        let absent: Option<CategorizedError> = None;
        let absent_dyn: Option<Box<dyn StdError + Send + Sync>> = None;

        // Act & Assert
        assert!(absent.root_cause().is_none());
        assert!(absent_dyn.root_cause().is_none());
    }

    #[test]
    fn test_present_option_resolves_like_inner_error() {
        // Arrange
        let present = Some(CategorizedError::bad_input("x"));

        // Act
        let root = present.root_cause().expect("present error has a root");

        // Assert
        assert_eq!(root.to_string(), "x");
    }

    #[test]
    fn test_boxed_dyn_error_resolves_through_layers() {
        // Arrange
        let boxed: Box<dyn StdError + Send + Sync> =
            Box::new(wrap(CategorizedError::forbidden("no access"), "while reading"));

        // Act
        let root = boxed.root_cause().expect("boxed error has a root");

        // Assert
        assert_eq!(root.to_string(), "no access");
    }

    #[test]
    fn test_borrowed_dyn_error_resolves_through_layers() {
        // Arrange
        let layer = wrap(CategorizedError::unauthenticated("no token"), "auth");
        let borrowed: &(dyn StdError + 'static) = &layer;

        // Act
        let root = borrowed.root_cause().expect("borrowed error has a root");

        // Assert
        assert_eq!(root.to_string(), "no token");
    }
}
