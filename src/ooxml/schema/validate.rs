//! Structural validation.

use thiserror::Error;

/// A path-qualified validation failure.
///
/// The path is slash-delimited from the validation root, with repeated
/// fields indexed: `/plot_area/charts[0]/BarChart/ax_ids`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: {message}")]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Recursive, first-error-wins validation of a schema value.
pub trait Validate {
    /// Validate from the root, equivalent to `validate_with_path("")`.
    fn validate(&self) -> Result<(), ValidationError> {
        self.validate_with_path("")
    }

    /// Validate with `path` as the location of `self`.
    fn validate_with_path(&self, path: &str) -> Result<(), ValidationError>;
}

impl<T: Validate> Validate for Box<T> {
    fn validate_with_path(&self, path: &str) -> Result<(), ValidationError> {
        (**self).validate_with_path(path)
    }
}

/// Text-only elements carry no constraints.
impl Validate for String {
    fn validate_with_path(&self, _path: &str) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Join a parent path and a field name.
#[inline]
pub fn field_path(path: &str, field: &str) -> String {
    format!("{}/{}", path, field)
}

/// Join a parent path and an indexed entry of a repeated field.
#[inline]
pub fn index_path(path: &str, field: &str, index: usize) -> String {
    format!("{}/{}[{}]", path, field, index)
}
