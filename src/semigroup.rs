//! Semigroup trait for merging validation reports
//!
//! A Semigroup is a type with an associative binary operation. Reports from
//! several objects, say an order and each of its lines, are merged with
//! `combine` while each report keeps its own entry order. Passes that
//! succeeded have no report; wrap reports in `Option` to merge those too.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::{FieldError, Semigroup, ValidationErrors};
//!
//! let order = ValidationErrors::singleton(FieldError::unknown("id"));
//! let line = ValidationErrors::singleton(FieldError::invalid("qty", "qty must be positive"));
//!
//! let merged = order.combine(line);
//! assert_eq!(merged.fields(), vec!["id", "qty"]);
//!
//! let passed: Option<ValidationErrors> = None;
//! let failed = Some(ValidationErrors::singleton(FieldError::unknown("sku")));
//! assert_eq!(passed.combine(failed).unwrap().fields(), vec!["sku"]);
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// Implementations must satisfy the associativity law:
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

/// `None` is ignored, so optional reports merge without unwrapping
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(a), Some(b)) => Some(a.combine(b)),
            (a, None) => a,
            (None, b) => b,
        }
    }
}
