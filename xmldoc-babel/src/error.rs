//! Error types for parsing and rendering documentation

use thiserror::Error;

/// Errors that can occur while building the documentation model or rendering it.
///
/// Converting a node the Markdown converter does not support is not reported
/// here: that is a usage error and panics (see
/// [`ConvertToSpanVisitor`](crate::markdown::ConvertToSpanVisitor)).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum XmlDocError {
    /// The input could not be parsed as XML
    #[error("XML parsing error: {0}")]
    Xml(#[from] roxmltree::Error),
    /// A value passed to a constructor is invalid
    #[error("Invalid argument '{param}': {reason}")]
    InvalidArgument { param: &'static str, reason: String },
    /// A required attribute is missing from an element
    #[error("Element <{element}> is missing required attribute '{attribute}'")]
    MissingAttribute {
        element: String,
        attribute: &'static str,
    },
    /// An element was passed to a parser expecting a different element
    #[error("Expected element <{expected}>, found <{actual}>")]
    UnexpectedElement { expected: String, actual: String },
    /// A member id uses a prefix that is not a known member kind
    #[error("Unknown member kind in id '{0}'")]
    UnknownMemberKind(String),
    /// Error while producing Markdown text
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl XmlDocError {
    pub(crate) fn invalid_argument(param: &'static str, reason: impl Into<String>) -> Self {
        XmlDocError::InvalidArgument {
            param,
            reason: reason.into(),
        }
    }

    pub(crate) fn missing_attribute(element: &str, attribute: &'static str) -> Self {
        XmlDocError::MissingAttribute {
            element: element.to_string(),
            attribute,
        }
    }
}
