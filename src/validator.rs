//! Method syntax for validating mapped types
//!
//! [`Validator`] is implemented for every [`ValidationMapper`], so a domain
//! type only writes its mapping and gets `validate` methods for free.
//!
//! ```
//! use fieldcheck::{FieldMask, ValidationMap, ValidationMapper, Validator};
//!
//! struct Order {
//!     quantity: u32,
//! }
//!
//! impl ValidationMapper for Order {
//!     fn validation_map(&self) -> ValidationMap<'_> {
//!         ValidationMap::new().field("quantity", || {
//!             if self.quantity == 0 { Err("quantity must not be zero") } else { Ok(()) }
//!         })
//!     }
//! }
//!
//! let order = Order { quantity: 0 };
//! assert!(order.validate().is_err());
//! assert!(order.validate_mask(&FieldMask::parse("quantity")).is_err());
//! ```

use crate::dispatch::validate;
use crate::error::Error;
use crate::mapper::ValidationMapper;
use crate::mask::FieldMask;

/// Types that can be validated field by field
pub trait Validator: ValidationMapper {
    /// Validate every field
    fn validate(&self) -> Result<(), Error> {
        validate(Some(self), &[])
    }

    /// Validate the named fields; an empty slice validates every field
    fn validate_fields(&self, fields: &[&str]) -> Result<(), Error> {
        validate(Some(self), fields)
    }

    /// Validate the fields selected by `mask`
    fn validate_mask(&self, mask: &FieldMask) -> Result<(), Error> {
        validate(Some(self), &mask.as_strs())
    }
}

impl<T: ValidationMapper + ?Sized> Validator for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FixtureMapper;

    fn fixture() -> FixtureMapper<'static> {
        FixtureMapper::new()
            .passing("name")
            .failing("price", "price must be positive")
    }

    #[test]
    fn test_validate_all_fields() {
        let err = fixture().validate().unwrap_err();
        assert_eq!(err.field_errors().unwrap().fields(), vec!["price"]);
    }

    #[test]
    fn test_validate_fields_subset() {
        assert!(fixture().validate_fields(&["name"]).is_ok());
        assert!(fixture().validate_fields(&["price"]).is_err());
    }

    #[test]
    fn test_validate_mask_all_matches_validate() {
        let by_mask = fixture().validate_mask(&FieldMask::all()).unwrap_err();
        let by_default = fixture().validate().unwrap_err();

        assert_eq!(by_mask.to_string(), by_default.to_string());
    }

    #[test]
    fn test_validate_through_trait_object() {
        let boxed: Box<dyn ValidationMapper> = Box::new(fixture());
        assert!(boxed.validate_fields(&["name"]).is_ok());
    }
}
