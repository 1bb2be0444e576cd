//! Owned field masks
//!
//! A [`FieldMask`] names the fields a caller wants validated. An empty mask
//! means every field in the mapping; there is no way to ask for zero fields.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::FieldMask;
//!
//! let mask: FieldMask = "price, name".parse().unwrap();
//! assert_eq!(mask.paths(), ["price", "name"]);
//! assert_eq!(mask.to_string(), "price,name");
//!
//! assert!(FieldMask::all().is_all());
//! ```

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Ordered list of field names selected for a validation pass
///
/// Duplicates are kept: each occurrence is validated, and reported, on its
/// own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldMask {
    paths: Vec<String>,
}

impl FieldMask {
    /// The mask selecting every field of the mapping
    pub fn all() -> Self {
        Self::default()
    }

    /// Mask over the given field names, in the given order
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a comma separated list of field names
    ///
    /// Whitespace around names is trimmed and empty segments are skipped,
    /// so an empty or blank string selects every field.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::FieldMask;
    ///
    /// assert_eq!(FieldMask::parse(" price ,, name").paths(), ["price", "name"]);
    /// assert!(FieldMask::parse("  ").is_all());
    /// ```
    pub fn parse(s: &str) -> Self {
        s.split(',')
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .collect()
    }

    /// Whether this mask selects every field
    pub fn is_all(&self) -> bool {
        self.paths.is_empty()
    }

    /// Selected field names, in mask order
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Number of selected names, duplicates included
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether no name is selected, which means every field
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Add a field name to the mask
    pub fn push(&mut self, path: impl Into<String>) {
        self.paths.push(path.into());
    }

    /// Borrowed names, in the shape [`validate`](crate::validate) takes
    pub fn as_strs(&self) -> Vec<&str> {
        self.paths.iter().map(String::as_str).collect()
    }
}

impl FromStr for FieldMask {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for FieldMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.paths.join(","))
    }
}

impl<S: Into<String>> FromIterator<S> for FieldMask {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<String>> for FieldMask {
    fn from(paths: Vec<String>) -> Self {
        Self { paths }
    }
}

impl From<&[&str]> for FieldMask {
    fn from(paths: &[&str]) -> Self {
        Self::new(paths.iter().copied())
    }
}
