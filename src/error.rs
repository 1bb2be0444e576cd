//! Error types produced by the dispatcher
//!
//! Validation has two kinds of failure:
//!
//! - **Precondition errors** ([`Error::NilSource`], [`Error::EmptyMapping`]) mean the
//!   collaborator misused the API. They are singular and no field is checked.
//! - **Field errors** ([`FieldError`]) are the expected outcome of validating bad
//!   data. They are always aggregated into a [`ValidationErrors`] report, one
//!   entry per failed or unknown field, in ascending field-name order.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::{FieldError, ValidationErrors};
//!
//! let report = ValidationErrors::new(
//!     FieldError::invalid("name", "name must not be empty"),
//!     vec![FieldError::unknown("id")],
//! );
//!
//! assert_eq!(
//!     report.to_string(),
//!     "1. field name is invalid: name must not be empty\n2. field id is unknown\n"
//! );
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::mapper::CheckError;
use crate::Semigroup;

/// Failure returned by [`validate`](crate::validate)
#[derive(Debug)]
pub enum Error {
    /// No mapper was supplied
    NilSource,
    /// The mapper produced a mapping without any field
    EmptyMapping,
    /// One or more fields were unknown or failed their check
    Fields(ValidationErrors),
}

impl Error {
    /// Whether this error reports API misuse rather than invalid fields
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::Error;
    ///
    /// assert!(Error::NilSource.is_precondition());
    /// assert!(Error::EmptyMapping.is_precondition());
    /// ```
    pub fn is_precondition(&self) -> bool {
        matches!(self, Error::NilSource | Error::EmptyMapping)
    }

    /// The aggregated field report, if this is a field-level failure
    pub fn field_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Error::Fields(errors) => Some(errors),
            _ => None,
        }
    }

    /// Consume the error and return the aggregated field report, if any
    pub fn into_field_errors(self) -> Option<ValidationErrors> {
        match self {
            Error::Fields(errors) => Some(errors),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NilSource => f.write_str("mapper cannot be nil"),
            Error::EmptyMapping => f.write_str("validation map cannot be nil or empty"),
            Error::Fields(errors) => fmt::Display::fmt(errors, f),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Fields(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        Error::Fields(errors)
    }
}

/// Classification of a single [`FieldError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldErrorKind {
    /// The field is not part of the mapping
    Unknown,
    /// The field's check returned an error
    Invalid,
}

impl FieldErrorKind {
    /// Lowercase name used in serialized reports
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldErrorKind::Unknown => "unknown",
            FieldErrorKind::Invalid => "invalid",
        }
    }
}

impl fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one failed field in a validation pass
#[derive(Debug)]
pub enum FieldError {
    /// The requested field has no check in the mapping
    Unknown {
        /// Requested field name
        field: String,
    },
    /// The field's check failed
    Invalid {
        /// Field name
        field: String,
        /// Reason returned by the check
        source: CheckError,
    },
}

impl FieldError {
    /// Entry for a field absent from the mapping
    pub fn unknown(field: impl Into<String>) -> Self {
        FieldError::Unknown {
            field: field.into(),
        }
    }

    /// Entry for a field whose check failed with `source`
    pub fn invalid(field: impl Into<String>, source: impl Into<CheckError>) -> Self {
        FieldError::Invalid {
            field: field.into(),
            source: source.into(),
        }
    }

    /// Name of the field this entry is about
    pub fn field(&self) -> &str {
        match self {
            FieldError::Unknown { field } | FieldError::Invalid { field, .. } => field,
        }
    }

    /// Whether the field was unknown or invalid
    pub fn kind(&self) -> FieldErrorKind {
        match self {
            FieldError::Unknown { .. } => FieldErrorKind::Unknown,
            FieldError::Invalid { .. } => FieldErrorKind::Invalid,
        }
    }

    /// The check's own error, for invalid fields
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::FieldError;
    ///
    /// let err = FieldError::invalid("price", "price must be positive");
    /// assert_eq!(err.cause().unwrap().to_string(), "price must be positive");
    /// assert!(FieldError::unknown("id").cause().is_none());
    /// ```
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match self {
            FieldError::Invalid { source, .. } => Some(&**source),
            FieldError::Unknown { .. } => None,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Unknown { field } => write!(f, "field {} is unknown", field),
            FieldError::Invalid { field, source } => {
                write!(f, "field {} is invalid: {}", field, source)
            }
        }
    }
}

impl StdError for FieldError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            FieldError::Invalid { source, .. } => Some(&**source),
            FieldError::Unknown { .. } => None,
        }
    }
}

/// Ordered report of every field that failed in one validation pass
///
/// Entries keep the order they were recorded in. The dispatcher records them
/// in ascending field-name order, so a report for the same input is always
/// identical.
///
/// A report always holds at least one entry: success is `Ok(())`, never an
/// empty report.
#[derive(Debug)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Build a report from a first entry and the ones following it
    pub fn new(first: FieldError, rest: Vec<FieldError>) -> Self {
        let mut errors = Vec::with_capacity(1 + rest.len());
        errors.push(first);
        errors.extend(rest);
        Self { errors }
    }

    /// Build a report holding a single entry
    pub fn singleton(error: FieldError) -> Self {
        Self::new(error, Vec::new())
    }

    /// Build a report from entries, keeping their order
    ///
    /// Returns `None` if `errors` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::{FieldError, ValidationErrors};
    ///
    /// assert!(ValidationErrors::from_vec(Vec::new()).is_none());
    ///
    /// let report = ValidationErrors::from_vec(vec![FieldError::unknown("id")]).unwrap();
    /// assert_eq!(report.len(), 1);
    /// ```
    pub fn from_vec(errors: Vec<FieldError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    /// Append an entry
    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always `false`, a report holds at least one entry
    ///
    /// This method exists to satisfy clippy's `len_without_is_empty` lint.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Entry at `index`
    pub fn get(&self, index: usize) -> Option<&FieldError> {
        self.errors.get(index)
    }

    /// Iterate over entries in order
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    /// Entries as a slice
    pub fn as_slice(&self) -> &[FieldError] {
        &self.errors
    }

    /// Rendered message of each entry, in order
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::{FieldError, ValidationErrors};
    ///
    /// let report = ValidationErrors::singleton(FieldError::unknown("id"));
    /// assert_eq!(report.messages(), vec!["field id is unknown"]);
    /// ```
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Field name of each entry, in order
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(FieldError::field).collect()
    }

    /// Consume the report and return its entries
    pub fn into_vec(self) -> Vec<FieldError> {
        self.errors
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl StdError for ValidationErrors {}

impl Semigroup for ValidationErrors {
    fn combine(mut self, other: Self) -> Self {
        self.errors.extend(other.errors);
        self
    }
}

impl Extend<FieldError> for ValidationErrors {
    fn extend<I: IntoIterator<Item = FieldError>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
