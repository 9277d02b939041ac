//! Error types for document-model operations.
//!
//! This module provides the main error type [`SbmlError`] returned by
//! construction and mutation operations across the model. Construction is
//! atomic: a failed constructor yields an error and no element.

use thiserror::Error;

use sbmlkit_core::{error::LevelVersionError, level::LevelVersion, typecode::TypeCode};

/// The main error type for document-model operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SbmlError {
    /// The level/version pair is not a recognized schema combination.
    #[error(transparent)]
    LevelVersion(#[from] LevelVersionError),

    /// An `id` value that does not satisfy the SId grammar.
    #[error("`{value}` is not a valid identifier")]
    InvalidIdentifier { value: String },

    /// A `metaid` value that does not satisfy the XML ID production.
    #[error("`{value}` is not a valid meta-identifier")]
    InvalidMetaId { value: String },

    /// The element kind does not exist at the requested schema combination.
    #[error("`{kind}` is not defined for SBML Level {level} Version {version}")]
    UnavailableElement {
        kind: TypeCode,
        level: u32,
        version: u32,
    },

    /// An element with the same identifier already exists in the model.
    #[error("an element with id `{id}` already exists in this model")]
    DuplicateId { id: String },

    /// A child element targets a different schema combination than its
    /// container.
    #[error("schema mismatch: container is {expected}, element is {found}")]
    LevelMismatch {
        expected: LevelVersion,
        found: LevelVersion,
    },
}

impl SbmlError {
    /// Create an `UnavailableElement` error for `kind` at `lv`.
    pub(crate) fn unavailable(kind: TypeCode, lv: LevelVersion) -> Self {
        Self::UnavailableElement {
            kind,
            level: lv.level(),
            version: lv.version(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SbmlError::InvalidIdentifier {
            value: "1species".into(),
        };
        assert_eq!(err.to_string(), "`1species` is not a valid identifier");

        let err = SbmlError::DuplicateId { id: "c1".into() };
        assert_eq!(
            err.to_string(),
            "an element with id `c1` already exists in this model"
        );
    }

    #[test]
    fn test_level_version_error_is_transparent() {
        let source = LevelVersionError {
            level: 2,
            version: 9,
        };
        let err: SbmlError = source.into();
        assert_eq!(
            err.to_string(),
            "SBML Level 2 Version 9 is not a recognized combination"
        );
    }

    #[test]
    fn test_unavailable_display() {
        let lv = LevelVersion::new(3, 1).unwrap();
        let err = SbmlError::unavailable(TypeCode::SpeciesType, lv);
        assert_eq!(
            err.to_string(),
            "`speciesType` is not defined for SBML Level 3 Version 1"
        );
    }
}
