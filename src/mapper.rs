//! Field-to-check mappings supplied by the objects being validated
//!
//! A type opts into field-level validation by implementing [`ValidationMapper`]:
//! it hands back a fresh [`ValidationMap`] on every call, associating each field
//! name with a zero-argument check that usually borrows the object itself.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::{ValidationMap, ValidationMapper};
//!
//! struct Product {
//!     name: String,
//!     price: i64,
//! }
//!
//! impl ValidationMapper for Product {
//!     fn validation_map(&self) -> ValidationMap<'_> {
//!         ValidationMap::new()
//!             .field("name", || {
//!                 if self.name.is_empty() {
//!                     Err("name must not be empty")
//!                 } else {
//!                     Ok(())
//!                 }
//!             })
//!             .field("price", || {
//!                 if self.price <= 0 {
//!                     Err("price must be positive")
//!                 } else {
//!                     Ok(())
//!                 }
//!             })
//!     }
//! }
//!
//! let product = Product { name: "tea".into(), price: 3 };
//! let map = product.validation_map();
//! assert_eq!(map.len(), 2);
//! assert!(map.contains("price"));
//! ```

use std::collections::HashMap;
use std::error::Error as StdError;
use std::fmt;

/// The opaque reason a field check failed.
pub type CheckError = Box<dyn StdError + Send + Sync + 'static>;

/// A zero-argument check for a single field.
///
/// The lifetime lets the check borrow the object it validates.
pub type FieldCheck<'a> = Box<dyn Fn() -> Result<(), CheckError> + 'a>;

/// Association from field name to the check validating that field.
///
/// Field names are unique; inserting a name twice replaces the earlier check.
/// Iteration order is unspecified, the dispatcher sorts names itself.
#[derive(Default)]
pub struct ValidationMap<'a> {
    checks: HashMap<String, FieldCheck<'a>>,
}

impl<'a> ValidationMap<'a> {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a check for `name`, builder style
    ///
    /// The check may fail with anything convertible into a [`CheckError`],
    /// such as `&str`, `String` or a concrete error type.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::ValidationMap;
    ///
    /// let limit = 10;
    /// let map = ValidationMap::new()
    ///     .field("limit", || if limit > 0 { Ok(()) } else { Err("limit must be positive") });
    ///
    /// assert!(map.contains("limit"));
    /// ```
    pub fn field<F, E>(mut self, name: impl Into<String>, check: F) -> Self
    where
        F: Fn() -> Result<(), E> + 'a,
        E: Into<CheckError>,
    {
        self.insert(name, check);
        self
    }

    /// Insert a check for `name`, returning the check it replaced if any
    pub fn insert<F, E>(&mut self, name: impl Into<String>, check: F) -> Option<FieldCheck<'a>>
    where
        F: Fn() -> Result<(), E> + 'a,
        E: Into<CheckError>,
    {
        let check: FieldCheck<'a> = Box::new(move || check().map_err(Into::into));
        self.checks.insert(name.into(), check)
    }

    /// Look up the check registered for `name`
    pub fn get(&self, name: &str) -> Option<&FieldCheck<'a>> {
        self.checks.get(name)
    }

    /// Whether a check is registered for `name`
    pub fn contains(&self, name: &str) -> bool {
        self.checks.contains_key(name)
    }

    /// Number of registered fields
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Whether no field is registered
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Registered field names, in unspecified order
    pub fn field_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.checks.keys().map(String::as_str)
    }
}

impl<'a> FromIterator<(String, FieldCheck<'a>)> for ValidationMap<'a> {
    fn from_iter<I: IntoIterator<Item = (String, FieldCheck<'a>)>>(iter: I) -> Self {
        Self {
            checks: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for ValidationMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.field_names().collect();
        names.sort_unstable();
        f.debug_struct("ValidationMap")
            .field("fields", &names)
            .finish()
    }
}

/// Types that can map their fields to validation checks
///
/// This is the only capability the dispatcher needs from a domain object.
/// Implementations build a new mapping per call and must register at least
/// one field; an empty mapping is reported as a misuse, not as a failed
/// validation.
pub trait ValidationMapper {
    /// Build the field-name-to-check mapping for this value
    fn validation_map(&self) -> ValidationMap<'_>;
}

impl<T: ValidationMapper + ?Sized> ValidationMapper for &T {
    fn validation_map(&self) -> ValidationMap<'_> {
        (**self).validation_map()
    }
}

impl<T: ValidationMapper + ?Sized> ValidationMapper for Box<T> {
    fn validation_map(&self) -> ValidationMap<'_> {
        (**self).validation_map()
    }
}
