//! Error types for resource link parsing and validation.

use thiserror::Error;

/// Errors that can occur when resolving a resource link to an id.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LinkError {
    /// No link was given at all.
    ///
    /// This is a caller bug (a required argument was structurally missing),
    /// not bad client input, and should never be rendered to API clients.
    #[error("resource link is required but was not given")]
    MissingLink,

    /// The link did not match any known resource shape, or matched with an
    /// unexpected API version or namespace.
    ///
    /// Carries the offending property name, the accepted link formats, and
    /// the original link so the HTTP boundary can render an actionable 4xx.
    #[error("invalid resource link `{actual}` in `{property}`, expected one of: {}", .expected.join(", "))]
    InvalidResourceLink {
        /// Name of the property the link was supplied under.
        property: String,
        /// Human-readable templates of the accepted link formats.
        expected: Vec<String>,
        /// The offending link, verbatim.
        actual: String,
    },
}

impl LinkError {
    /// Returns true if this error indicates a missing link argument (a caller bug).
    pub fn is_missing_link(&self) -> bool {
        matches!(self, LinkError::MissingLink)
    }

    /// Returns true if this error indicates an invalid or unexpected link.
    pub fn is_invalid_link(&self) -> bool {
        matches!(self, LinkError::InvalidResourceLink { .. })
    }
}
