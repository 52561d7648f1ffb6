//! Formatting constructors for [`CategorizedError`](crate::CategorizedError).
//!
//! Each macro accepts the same arguments as [`format!`] and builds an error
//! of its category from the formatted message.

/// Build a [`CategorizedError::BadInput`](crate::CategorizedError::BadInput) from format arguments.
///
/// ```rust
/// let err = errtypes::bad_input!("{}-{}", "a", 1);
/// assert_eq!(err.to_string(), "a-1");
/// ```
#[macro_export]
macro_rules! bad_input {
    ($($arg:tt)*) => {
        $crate::CategorizedError::from_args($crate::Category::BadInput, format_args!($($arg)*))
    };
}

/// Build a [`CategorizedError::Unauthenticated`](crate::CategorizedError::Unauthenticated) from format arguments.
#[macro_export]
macro_rules! unauthenticated {
    ($($arg:tt)*) => {
        $crate::CategorizedError::from_args($crate::Category::Unauthenticated, format_args!($($arg)*))
    };
}

/// Build a [`CategorizedError::Forbidden`](crate::CategorizedError::Forbidden) from format arguments.
#[macro_export]
macro_rules! forbidden {
    ($($arg:tt)*) => {
        $crate::CategorizedError::from_args($crate::Category::Forbidden, format_args!($($arg)*))
    };
}

/// Build a [`CategorizedError::NotFound`](crate::CategorizedError::NotFound) from format arguments.
#[macro_export]
macro_rules! not_found {
    ($($arg:tt)*) => {
        $crate::CategorizedError::from_args($crate::Category::NotFound, format_args!($($arg)*))
    };
}

/// Build a [`CategorizedError::Conflict`](crate::CategorizedError::Conflict) from format arguments.
#[macro_export]
macro_rules! conflict {
    ($($arg:tt)*) => {
        $crate::CategorizedError::from_args($crate::Category::Conflict, format_args!($($arg)*))
    };
}
