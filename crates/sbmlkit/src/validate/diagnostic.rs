//! The core diagnostic type for the consistency-check system.
//!
//! A [`Diagnostic`] represents a single error or warning with an optional
//! error code and an optional element path locating the offending element
//! within the document tree.

use std::fmt;

use serde::Serialize;

use crate::validate::{ErrorCode, Severity};

/// A diagnostic message produced by a consistency check.
///
/// Diagnostics carry:
/// - A severity level
/// - An optional error code for documentation and searchability
/// - A primary message describing the issue
/// - An optional element path (e.g. `model/species[2]`) locating the
///   offending element
///
/// # Example
///
/// ```
/// # use sbmlkit::validate::{Diagnostic, ErrorCode};
/// let diag = Diagnostic::error("species `glucose` references unknown compartment `cytosol`")
///     .with_code(ErrorCode::E200)
///     .with_element("model/species[0]");
///
/// assert_eq!(diag.to_string(), "error[E200]: species `glucose` references unknown compartment `cytosol`");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    element: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Get the severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Get the error code, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the element path, if any.
    pub fn element(&self) -> Option<&str> {
        self.element.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the element path.
    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }

    /// Create a new diagnostic with the given severity and message.
    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            element: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E200]: message" or "error: message"
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_error() {
        let diag = Diagnostic::error("test error");

        assert!(diag.severity().is_error());
        assert_eq!(diag.message(), "test error");
        assert!(diag.code().is_none());
        assert!(diag.element().is_none());
    }

    #[test]
    fn test_diagnostic_warning() {
        let diag = Diagnostic::warning("advisory");
        assert!(diag.severity().is_warning());
    }

    #[test]
    fn test_diagnostic_with_code() {
        let diag = Diagnostic::error("duplicate identifier").with_code(ErrorCode::E101);
        assert_eq!(diag.code(), Some(ErrorCode::E101));
    }

    #[test]
    fn test_diagnostic_with_element() {
        let diag = Diagnostic::error("test error").with_element("model/species[2]");
        assert_eq!(diag.element(), Some("model/species[2]"));
    }

    #[test]
    fn test_diagnostic_display_with_code() {
        let diag = Diagnostic::error("duplicate identifier `c1`").with_code(ErrorCode::E101);
        assert_eq!(diag.to_string(), "error[E101]: duplicate identifier `c1`");
    }

    #[test]
    fn test_diagnostic_display_without_code() {
        let diag = Diagnostic::warning("unused species type");
        assert_eq!(diag.to_string(), "warning: unused species type");
    }
}
