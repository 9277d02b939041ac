//! Configuration for consistency checking.
//!
//! [`CheckConfig`] selects which validator families run during a
//! consistency check. All families are on by default; the type implements
//! [`serde::Deserialize`] so configurations can be loaded from external
//! sources, with missing fields falling back to their defaults.

use serde::Deserialize;

/// Toggles for the consistency-check validator families.
///
/// # Example
///
/// ```
/// # use sbmlkit::config::CheckConfig;
/// let config = CheckConfig::default();
/// assert!(config.identifiers());
/// assert!(config.references());
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Document-structure checks (missing model).
    document: bool,

    /// Identifier checks (required ids, duplicate ids).
    identifiers: bool,

    /// Reference checks (dangling ids, containment cycles).
    references: bool,

    /// Element-content checks (participant-free reactions, unused
    /// species types).
    content: bool,
}

impl CheckConfig {
    /// Creates a new `CheckConfig` with explicit family toggles.
    ///
    /// # Arguments
    ///
    /// * `document` - run document-structure checks
    /// * `identifiers` - run identifier checks
    /// * `references` - run reference checks
    /// * `content` - run element-content checks
    pub fn new(document: bool, identifiers: bool, references: bool, content: bool) -> Self {
        Self {
            document,
            identifiers,
            references,
            content,
        }
    }

    /// Whether document-structure checks run.
    pub fn document(&self) -> bool {
        self.document
    }

    /// Whether identifier checks run.
    pub fn identifiers(&self) -> bool {
        self.identifiers
    }

    /// Whether reference checks run.
    pub fn references(&self) -> bool {
        self.references
    }

    /// Whether element-content checks run.
    pub fn content(&self) -> bool {
        self.content
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            document: true,
            identifiers: true,
            references: true,
            content: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_everything() {
        let config = CheckConfig::default();
        assert!(config.document());
        assert!(config.identifiers());
        assert!(config.references());
        assert!(config.content());
    }

    #[test]
    fn test_explicit_toggles() {
        let config = CheckConfig::new(true, false, true, false);
        assert!(config.document());
        assert!(!config.identifiers());
        assert!(config.references());
        assert!(!config.content());
    }
}
