//! Category predicates and HTTP status mapping.
//!
//! Every lookup resolves the error to its root cause first (see
//! [`ErrorChain`]), so context layers added on the way up never change the
//! answer. Messages are never inspected.

use std::error::Error as StdError;

use crate::category::Category;
use crate::chain::ErrorChain;
use crate::error::CategorizedError;
use crate::logging::{log_debug, log_error};

/// Status returned for errors whose root carries no category.
pub const UNCATEGORIZED_STATUS_CODE: u16 = 500;

fn root_category(root: &(dyn StdError + 'static)) -> Option<Category> {
    root.downcast_ref::<CategorizedError>()
        .map(CategorizedError::category)
}

/// The category carried by the root cause of `err`, if any.
///
/// Returns `None` for an absent error and for roots that were not built as
/// a [`CategorizedError`].
pub fn category_of<E: ErrorChain + ?Sized>(err: &E) -> Option<Category> {
    err.root_cause().and_then(root_category)
}

fn has_category<E: ErrorChain + ?Sized>(err: &E, category: Category) -> bool {
    category_of(err) == Some(category)
}

/// Whether the root cause of `err` is a missing or wrong input parameter.
pub fn is_bad_input<E: ErrorChain + ?Sized>(err: &E) -> bool {
    has_category(err, Category::BadInput)
}

/// Whether the root cause of `err` is missing authentication.
pub fn is_unauthenticated<E: ErrorChain + ?Sized>(err: &E) -> bool {
    has_category(err, Category::Unauthenticated)
}

/// Whether the root cause of `err` is insufficient permissions.
pub fn is_forbidden<E: ErrorChain + ?Sized>(err: &E) -> bool {
    has_category(err, Category::Forbidden)
}

/// Whether the root cause of `err` is a missing resource.
pub fn is_not_found<E: ErrorChain + ?Sized>(err: &E) -> bool {
    has_category(err, Category::NotFound)
}

/// Whether the root cause of `err` is a conflict with existing state.
pub fn is_conflict<E: ErrorChain + ?Sized>(err: &E) -> bool {
    has_category(err, Category::Conflict)
}

// Categories are tested in `Category::ALL` order; the first match wins.
fn boundary_category<E: ErrorChain + ?Sized>(err: &E) -> Option<Category> {
    let Some(root) = err.root_cause() else {
        log_error!(
            error_type = "missing_error",
            "HTTP status requested for an absent error"
        );
        panic!("http_status_code called without an error");
    };

    let category = Category::ALL
        .into_iter()
        .find(|&candidate| root_category(root) == Some(candidate));

    log_debug!(
        category = category.map(Category::as_str).unwrap_or("uncategorized"),
        root = %root,
        "Classified error at boundary"
    );
    category
}

/// Map `err` to an HTTP status code.
///
/// | Root category | Status |
/// |---|---|
/// | `BadInput` | 400 |
/// | `Unauthenticated` | 401 |
/// | `Forbidden` | 403 |
/// | `NotFound` | 404 |
/// | `Conflict` | 409 |
/// | none | 500 |
///
/// # Panics
///
/// Panics when `err` is absent (`None`). There is no status for "no error
/// occurred", and calling this without an error is a bug in the caller.
///
/// ```rust
/// use errtypes::{http_status_code, CategorizedError};
///
/// assert_eq!(http_status_code(&CategorizedError::conflict("taken")), 409);
/// assert_eq!(http_status_code(&anyhow::anyhow!("boom")), 500);
/// ```
pub fn http_status_code<E: ErrorChain + ?Sized>(err: &E) -> u16 {
    boundary_category(err)
        .map(Category::status_code)
        .unwrap_or(UNCATEGORIZED_STATUS_CODE)
}

/// Typed variant of [`http_status_code`], with the same mapping and panic.
pub fn http_status<E: ErrorChain + ?Sized>(err: &E) -> http::StatusCode {
    boundary_category(err)
        .map(Category::status)
        .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR)
}
