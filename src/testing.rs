//! Testing utilities for code built on fieldcheck
//!
//! This module provides assertion macros for validation results, a mapper
//! built from fixed outcomes, and a log recording which checks actually ran.
//!
//! # Examples
//!
//! ```rust
//! use fieldcheck::testing::FixtureMapper;
//! use fieldcheck::{assert_field_errors, assert_valid, validate};
//!
//! let ok = FixtureMapper::new().passing("name");
//! assert_valid!(validate(Some(&ok), &[]));
//!
//! let bad = FixtureMapper::new()
//!     .passing("name")
//!     .failing("price", "price must be positive");
//! assert_field_errors!(
//!     validate(Some(&bad), &[]),
//!     ["field price is invalid: price must be positive"]
//! );
//! ```

use std::cell::RefCell;

use crate::mapper::{ValidationMap, ValidationMapper};

/// Mapper whose checks return fixed outcomes
///
/// Useful to exercise the dispatcher, or code that consumes its reports,
/// without writing a domain type.
///
/// # Example
///
/// ```rust
/// use fieldcheck::testing::FixtureMapper;
/// use fieldcheck::ValidationMapper;
///
/// let fixture = FixtureMapper::new()
///     .passing("name")
///     .failing("price", "price must be positive");
///
/// assert_eq!(fixture.validation_map().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixtureMapper<'l> {
    outcomes: Vec<(String, Option<String>)>,
    log: Option<&'l CallLog>,
}

impl<'l> FixtureMapper<'l> {
    /// Create a mapper without fields
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field whose check passes
    pub fn passing(mut self, field: impl Into<String>) -> Self {
        self.outcomes.push((field.into(), None));
        self
    }

    /// Register a field whose check fails with `reason`
    pub fn failing(mut self, field: impl Into<String>, reason: impl Into<String>) -> Self {
        self.outcomes.push((field.into(), Some(reason.into())));
        self
    }

    /// Record every check invocation into `log`
    pub fn with_log<'m>(self, log: &'m CallLog) -> FixtureMapper<'m> {
        FixtureMapper {
            outcomes: self.outcomes,
            log: Some(log),
        }
    }
}

impl ValidationMapper for FixtureMapper<'_> {
    fn validation_map(&self) -> ValidationMap<'_> {
        let mut map = ValidationMap::new();
        for (field, reason) in &self.outcomes {
            let log = self.log;
            map.insert(field.as_str(), move || {
                if let Some(log) = log {
                    log.record(field);
                }
                match reason {
                    Some(reason) => Err(reason.clone()),
                    None => Ok(()),
                }
            });
        }
        map
    }
}

/// Ordered record of the checks that were invoked
///
/// # Example
///
/// ```rust
/// use fieldcheck::testing::CallLog;
/// use fieldcheck::ValidationMap;
///
/// let log = CallLog::new();
/// let map = ValidationMap::new().field("name", log.wrap("name", || Ok::<_, &str>(())));
///
/// assert!(log.is_empty());
/// map.get("name").unwrap()().unwrap();
/// assert_eq!(log.calls(), vec!["name"]);
/// ```
#[derive(Debug, Default)]
pub struct CallLog {
    calls: RefCell<Vec<String>>,
}

impl CallLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one invocation of `field`'s check
    pub fn record(&self, field: &str) {
        self.calls.borrow_mut().push(field.to_string());
    }

    /// Wrap `check` so every call is recorded under `field`
    pub fn wrap<'a, F, E>(&'a self, field: &'a str, check: F) -> impl Fn() -> Result<(), E> + 'a
    where
        F: Fn() -> Result<(), E> + 'a,
    {
        move || {
            self.record(field);
            check()
        }
    }

    /// Recorded field names, in invocation order
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// How many times `field`'s check ran
    pub fn count(&self, field: &str) -> usize {
        self.calls.borrow().iter().filter(|call| *call == field).count()
    }

    /// Whether no check ran
    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }
}

/// Assert that a validation passed.
///
/// # Example
///
/// ```rust
/// use fieldcheck::testing::FixtureMapper;
/// use fieldcheck::{assert_valid, validate};
///
/// assert_valid!(validate(Some(&FixtureMapper::new().passing("name")), &[]));
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($result:expr) => {
        match $result {
            Ok(_) => {}
            Err(e) => {
                panic!("Expected validation to pass, got: {}", e);
            }
        }
    };
}

/// Assert that a validation failed, for any reason.
///
/// # Example
///
/// ```rust
/// use fieldcheck::testing::FixtureMapper;
/// use fieldcheck::{assert_invalid, validate};
///
/// assert_invalid!(validate::<FixtureMapper>(None, &[]));
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($result:expr) => {
        match $result {
            Err(_) => {}
            Ok(_) => {
                panic!("Expected validation to fail, got Ok");
            }
        }
    };
}

/// Assert that a validation failed with exactly the given field messages.
///
/// # Example
///
/// ```rust
/// use fieldcheck::testing::FixtureMapper;
/// use fieldcheck::{assert_field_errors, validate};
///
/// let fixture = FixtureMapper::new().passing("name");
/// assert_field_errors!(validate(Some(&fixture), &["id"]), ["field id is unknown"]);
/// ```
#[macro_export]
macro_rules! assert_field_errors {
    ($result:expr, $expected:expr) => {
        match $result {
            Err($crate::Error::Fields(errors)) => {
                assert_eq!(errors.messages(), $expected);
            }
            Err(other) => {
                panic!(
                    "Expected field errors {:?}, got precondition error: {}",
                    $expected, other
                );
            }
            Ok(_) => {
                panic!("Expected field errors {:?}, got Ok", $expected);
            }
        }
    };
}
