//! Serde support for masks and reports (feature-gated)
//!
//! - [`FieldMask`] (de)serializes as a sequence of field names.
//! - [`FieldError`] serializes as `{"field", "kind", "message"}`.
//! - [`ValidationErrors`] serializes as a sequence of field errors.
//! - [`Error`] serializes as `{"kind", "message"}` plus `"fields"` for field
//!   failures.
//!
//! Reports only serialize: the wrapped check errors are opaque and cannot be
//! rebuilt from text.
//!
//! # Example
//!
//! ```rust,ignore
//! let err = product.validate().unwrap_err();
//! let body = serde_json::to_string(&err)?;
//! // {"kind":"fields","message":"1. field price is invalid: ...\n","fields":[...]}
//! ```

use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, FieldError, ValidationErrors};
use crate::mask::FieldMask;

impl Serialize for FieldMask {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.paths().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FieldMask {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let paths = Vec::<String>::deserialize(deserializer)?;
        Ok(FieldMask::from(paths))
    }
}

impl Serialize for FieldError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FieldError", 3)?;
        state.serialize_field("field", self.field())?;
        state.serialize_field("kind", self.kind().as_str())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for error in self {
            seq.serialize_element(error)?;
        }
        seq.end()
    }
}

impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Error::NilSource | Error::EmptyMapping => {
                let kind = if matches!(self, Error::NilSource) {
                    "nil_source"
                } else {
                    "empty_mapping"
                };
                let mut state = serializer.serialize_struct("Error", 2)?;
                state.serialize_field("kind", kind)?;
                state.serialize_field("message", &self.to_string())?;
                state.end()
            }
            Error::Fields(errors) => {
                let mut state = serializer.serialize_struct("Error", 3)?;
                state.serialize_field("kind", "fields")?;
                state.serialize_field("message", &self.to_string())?;
                state.serialize_field("fields", errors)?;
                state.end()
            }
        }
    }
}
