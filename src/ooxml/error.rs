/// Error types for OOXML schema operations.
use crate::ooxml::schema::validate::ValidationError;
use quick_xml::events::BytesStart;
use thiserror::Error;

/// Result type for OOXML schema operations.
pub type Result<T> = std::result::Result<T, OoxmlError>;

/// Error types for OOXML schema operations.
#[derive(Error, Debug)]
pub enum OoxmlError {
    /// XML parsing or writing error, including a truncated document
    #[error("XML error: {0}")]
    Xml(String),

    /// An attribute value could not be parsed into its schema type
    #[error("Invalid value '{value}' for attribute '{attribute}' on <{element}>: {reason}")]
    InvalidAttribute {
        element: String,
        attribute: String,
        value: String,
        reason: String,
    },

    /// The document root is not the expected element
    #[error("Unexpected element: expected <{expected}>, got <{found}>")]
    UnexpectedElement { expected: String, found: String },

    /// Two alternatives of one choice group appeared in strict mode
    #[error("Conflicting alternatives in {group}: <{found}> after <{previous}>")]
    ChoiceConflict {
        group: String,
        previous: String,
        found: String,
    },

    /// Element nesting exceeded the configured limit
    #[error("Element nesting exceeds the maximum depth of {0}")]
    DepthExceeded(usize),

    /// Structural validation failed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl OoxmlError {
    pub(crate) fn invalid_attribute(
        start: &BytesStart<'_>,
        attribute: &str,
        value: &str,
        reason: String,
    ) -> Self {
        OoxmlError::InvalidAttribute {
            element: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            attribute: attribute.to_string(),
            value: value.to_string(),
            reason,
        }
    }
}

impl From<quick_xml::Error> for OoxmlError {
    fn from(err: quick_xml::Error) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for OoxmlError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        OoxmlError::Xml(format!("Attribute error: {}", err))
    }
}

impl From<std::str::Utf8Error> for OoxmlError {
    fn from(err: std::str::Utf8Error) -> Self {
        OoxmlError::Xml(format!("Invalid UTF-8: {}", err))
    }
}
