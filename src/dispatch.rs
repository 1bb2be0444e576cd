//! The validation dispatcher
//!
//! [`validate`] resolves which fields to check, runs their checks in ascending
//! field-name order and aggregates every failure into one report.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::{validate, Error, ValidationMap, ValidationMapper};
//!
//! struct Product {
//!     name: String,
//!     price: i64,
//! }
//!
//! impl ValidationMapper for Product {
//!     fn validation_map(&self) -> ValidationMap<'_> {
//!         ValidationMap::new()
//!             .field("name", || if self.name.is_empty() { Err("name must not be empty") } else { Ok(()) })
//!             .field("price", || if self.price <= 0 { Err("price must be positive") } else { Ok(()) })
//!     }
//! }
//!
//! let product = Product { name: String::new(), price: 0 };
//!
//! let err = validate(Some(&product), &[]).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "1. field name is invalid: name must not be empty\n\
//!      2. field price is invalid: price must be positive\n"
//! );
//!
//! let err = validate(Some(&product), &["id"]).unwrap_err();
//! assert_eq!(err.to_string(), "1. field id is unknown\n");
//!
//! assert!(matches!(validate::<Product>(None, &[]), Err(Error::NilSource)));
//! ```

use crate::error::{Error, FieldError, ValidationErrors};
use crate::mapper::{ValidationMap, ValidationMapper};

/// Validate the fields of `mapper` selected by `mask`
///
/// An empty mask selects every field of the mapping. Names in the mask are
/// processed once per occurrence, in ascending lexicographic order:
///
/// - a name missing from the mapping records [`FieldError::Unknown`] without
///   running any check
/// - a failing check records [`FieldError::Invalid`] wrapping its error
/// - a passing check records nothing
///
/// Processing never stops early. Returns `Ok(())` when nothing was recorded,
/// otherwise [`Error::Fields`] with the entries in processing order.
///
/// # Errors
///
/// - [`Error::NilSource`] if `mapper` is `None`
/// - [`Error::EmptyMapping`] if the mapping has no field
///
/// Both are returned before any field is looked at.
///
/// # Examples
///
/// ```
/// use fieldcheck::{validate, ValidationMap, ValidationMapper};
///
/// struct Limits {
///     max: u32,
/// }
///
/// impl ValidationMapper for Limits {
///     fn validation_map(&self) -> ValidationMap<'_> {
///         ValidationMap::new().field("max", || if self.max > 0 { Ok(()) } else { Err("max must be positive") })
///     }
/// }
///
/// assert!(validate(Some(&Limits { max: 3 }), &[]).is_ok());
/// assert!(validate(Some(&Limits { max: 0 }), &["max"]).is_err());
/// ```
pub fn validate<M>(mapper: Option<&M>, mask: &[&str]) -> Result<(), Error>
where
    M: ValidationMapper + ?Sized,
{
    let map = validation_map(mapper)?;

    let mut fields: Vec<&str> = if mask.is_empty() {
        map.field_names().collect()
    } else {
        mask.to_vec()
    };
    fields.sort_unstable();

    let errors: Vec<FieldError> = fields
        .into_iter()
        .filter_map(|field| check_field(&map, field))
        .collect();

    #[cfg(feature = "tracing")]
    tracing::trace!(failed = errors.len(), "validation pass finished");

    match ValidationErrors::from_vec(errors) {
        None => Ok(()),
        Some(report) => Err(Error::Fields(report)),
    }
}

fn validation_map<M>(mapper: Option<&M>) -> Result<ValidationMap<'_>, Error>
where
    M: ValidationMapper + ?Sized,
{
    let Some(mapper) = mapper else {
        #[cfg(feature = "tracing")]
        tracing::debug!("validation rejected: mapper is nil");
        return Err(Error::NilSource);
    };

    let map = mapper.validation_map();
    if map.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::debug!("validation rejected: validation map is empty");
        return Err(Error::EmptyMapping);
    }

    Ok(map)
}

fn check_field(map: &ValidationMap<'_>, field: &str) -> Option<FieldError> {
    let Some(check) = map.get(field) else {
        #[cfg(feature = "tracing")]
        tracing::debug!(field, "field is unknown");
        return Some(FieldError::unknown(field));
    };

    match check() {
        Ok(()) => None,
        Err(source) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(field, error = %source, "field is invalid");
            Some(FieldError::Invalid {
                field: field.to_string(),
                source,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CallLog, FixtureMapper};

    struct EmptyMapper;

    impl ValidationMapper for EmptyMapper {
        fn validation_map(&self) -> ValidationMap<'_> {
            ValidationMap::new()
        }
    }

    fn product(name: &str, price: i64) -> FixtureMapper<'static> {
        let mut fixture = FixtureMapper::new();
        fixture = if name.is_empty() {
            fixture.failing("name", "name must not be empty")
        } else {
            fixture.passing("name")
        };
        if price <= 0 {
            fixture.failing("price", "price must be positive")
        } else {
            fixture.passing("price")
        }
    }

    #[test]
    fn test_nil_mapper() {
        let result = validate::<FixtureMapper>(None, &["name"]);
        assert!(matches!(result, Err(Error::NilSource)));
    }

    #[test]
    fn test_empty_mapping() {
        assert!(matches!(
            validate(Some(&EmptyMapper), &[]),
            Err(Error::EmptyMapping)
        ));
        assert!(matches!(
            validate(Some(&EmptyMapper), &["name"]),
            Err(Error::EmptyMapping)
        ));
    }

    #[test]
    fn test_all_fields_sorted() {
        let err = validate(Some(&product("", 0)), &[]).unwrap_err();

        assert_eq!(
            err.field_errors().unwrap().messages(),
            vec![
                "field name is invalid: name must not be empty",
                "field price is invalid: price must be positive",
            ]
        );
    }

    #[test]
    fn test_mask_order_is_ignored() {
        let err = validate(Some(&product("", 0)), &["price", "name"]).unwrap_err();

        assert_eq!(err.field_errors().unwrap().fields(), vec!["name", "price"]);
    }

    #[test]
    fn test_partial_mask() {
        let err = validate(Some(&product("tea", 0)), &["price"]).unwrap_err();

        assert_eq!(
            err.field_errors().unwrap().messages(),
            vec!["field price is invalid: price must be positive"]
        );
    }

    #[test]
    fn test_unknown_field_sorted_among_known() {
        let err = validate(Some(&product("", 5)), &["price", "id", "name"]).unwrap_err();

        assert_eq!(
            err.to_string(),
            "1. field id is unknown\n2. field name is invalid: name must not be empty\n"
        );
    }

    #[test]
    fn test_duplicates_are_processed_each_time() {
        let err = validate(Some(&product("tea", 0)), &["price", "price"]).unwrap_err();

        assert_eq!(err.field_errors().unwrap().len(), 2);
    }

    #[test]
    fn test_total_success() {
        assert!(validate(Some(&product("tea", 3)), &[]).is_ok());
        assert!(validate(Some(&product("tea", 3)), &["name", "price"]).is_ok());
    }

    #[test]
    fn test_sorts_by_bytes_not_case_or_locale() {
        let fixture = FixtureMapper::new()
            .failing("alpha", "bad")
            .failing("Zeta", "bad")
            .failing("é", "bad")
            .failing("_x", "bad");

        let err = validate(Some(&fixture), &[]).unwrap_err();

        assert_eq!(
            err.field_errors().unwrap().fields(),
            vec!["Zeta", "_x", "alpha", "é"]
        );
    }

    #[test]
    fn test_checks_run_in_sorted_order_and_skip_unknown() {
        let log = CallLog::new();
        let map_source = FixtureMapper::new()
            .passing("zeta")
            .passing("alpha")
            .passing("mid")
            .with_log(&log);

        let err = validate(Some(&map_source), &["zeta", "unknown", "alpha"]).unwrap_err();

        assert_eq!(log.calls(), vec!["alpha", "zeta"]);
        assert_eq!(err.field_errors().unwrap().fields(), vec!["unknown"]);
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use super::*;
        use tracing_test::traced_test;

        #[test]
        #[traced_test]
        fn test_logs_failed_and_unknown_fields() {
            let _ = validate(Some(&product("", 5)), &["id", "name"]);

            assert!(logs_contain("field is unknown"));
            assert!(logs_contain("field is invalid"));
            assert!(logs_contain("name must not be empty"));
        }

        #[test]
        #[traced_test]
        fn test_logs_precondition_failure() {
            let _ = validate::<FixtureMapper>(None, &[]);

            assert!(logs_contain("mapper is nil"));
        }
    }
}
