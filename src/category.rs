//! The closed set of semantic error categories.
//!
//! Every [`Category`] corresponds to exactly one HTTP status code:
//!
//! | Category | Status |
//! |---|---|
//! | `BadInput` | 400 |
//! | `Unauthenticated` | 401 |
//! | `Forbidden` | 403 |
//! | `NotFound` | 404 |
//! | `Conflict` | 409 |
//!
//! Errors without a category map to 500 (see [`crate::http_status_code`]).

use std::fmt;
use std::str::FromStr;

use crate::error::ParseCategoryError;

/// Semantic class of an error, independent of its message text.
///
/// Adding a category means adding a variant here, a constructor and variant on
/// [`crate::CategorizedError`], a predicate in [`crate::classify`] and an entry
/// in [`Category::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Category {
    /// A missing or wrong input parameter.
    BadInput,

    /// Missing authentication.
    Unauthenticated,

    /// Insufficient permissions.
    Forbidden,

    /// A missing resource.
    NotFound,

    /// The request conflicts with the current state of a resource.
    Conflict,
}

impl Category {
    /// All categories, in the priority order used by status mapping.
    pub const ALL: [Category; 5] = [
        Category::BadInput,
        Category::Unauthenticated,
        Category::Forbidden,
        Category::NotFound,
        Category::Conflict,
    ];

    /// HTTP status code for this category.
    pub const fn status_code(self) -> u16 {
        match self {
            Self::BadInput => 400,
            Self::Unauthenticated => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::Conflict => 409,
        }
    }

    pub fn status(self) -> http::StatusCode {
        match self {
            Self::BadInput => http::StatusCode::BAD_REQUEST,
            Self::Unauthenticated => http::StatusCode::UNAUTHORIZED,
            Self::Forbidden => http::StatusCode::FORBIDDEN,
            Self::NotFound => http::StatusCode::NOT_FOUND,
            Self::Conflict => http::StatusCode::CONFLICT,
        }
    }

    /// Category whose status code is `code`, if any.
    ///
    /// ```rust
    /// use errtypes::Category;
    ///
    /// assert_eq!(Category::from_status_code(404), Some(Category::NotFound));
    /// assert_eq!(Category::from_status_code(500), None);
    /// ```
    pub fn from_status_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.status_code() == code)
    }

    /// Stable snake_case name, also used by `Display`, `FromStr` and serde.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadInput => "bad_input",
            Self::Unauthenticated => "unauthenticated",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseCategoryError {
                input: s.to_string(),
            })
    }
}
