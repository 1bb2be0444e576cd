//! # Fieldcheck
//!
//! Field-level validation dispatch with deterministic, aggregated error reports.
//!
//! A domain type describes *how* each of its fields is checked by implementing
//! [`ValidationMapper`]. The dispatcher decides *which* fields run, runs them in
//! ascending name order and collects every failure, so the same input always
//! yields the same report.
//!
//! ## Quick Example
//!
//! ```rust
//! use fieldcheck::{ValidationMap, ValidationMapper, Validator};
//!
//! struct Product {
//!     name: String,
//!     price: i64,
//! }
//!
//! impl Product {
//!     fn validate_name(&self) -> Result<(), &'static str> {
//!         if self.name.is_empty() {
//!             return Err("name must not be empty");
//!         }
//!         Ok(())
//!     }
//!
//!     fn validate_price(&self) -> Result<(), &'static str> {
//!         if self.price <= 0 {
//!             return Err("price must be positive");
//!         }
//!         Ok(())
//!     }
//! }
//!
//! impl ValidationMapper for Product {
//!     fn validation_map(&self) -> ValidationMap<'_> {
//!         ValidationMap::new()
//!             .field("name", || self.validate_name())
//!             .field("price", || self.validate_price())
//!     }
//! }
//!
//! let product = Product { name: String::new(), price: 0 };
//!
//! // Every field
//! let err = product.validate().unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "1. field name is invalid: name must not be empty\n\
//!      2. field price is invalid: price must be positive\n"
//! );
//!
//! // Only some fields
//! let err = product.validate_fields(&["price"]).unwrap_err();
//! assert_eq!(err.to_string(), "1. field price is invalid: price must be positive\n");
//!
//! // Unknown fields are reported, not ignored
//! let err = product.validate_fields(&["id"]).unwrap_err();
//! assert_eq!(err.to_string(), "1. field id is unknown\n");
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `debug!` events for rejected passes and failed fields
//! - `serde`: serialize reports and (de)serialize [`FieldMask`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod dispatch;
pub mod error;
pub mod mapper;
pub mod mask;
pub mod semigroup;
pub mod testing;
pub mod validator;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use dispatch::validate;
pub use error::{Error, FieldError, FieldErrorKind, ValidationErrors};
pub use mapper::{CheckError, FieldCheck, ValidationMap, ValidationMapper};
pub use mask::FieldMask;
pub use semigroup::Semigroup;
pub use validator::Validator;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dispatch::validate;
    pub use crate::error::{Error, FieldError, FieldErrorKind, ValidationErrors};
    pub use crate::mapper::{ValidationMap, ValidationMapper};
    pub use crate::mask::FieldMask;
    pub use crate::semigroup::Semigroup;
    pub use crate::validator::Validator;
}
