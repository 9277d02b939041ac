//! Error types for the core document-model types.

use thiserror::Error;

/// Error returned when a level/version pair is not a recognized schema
/// combination.
///
/// The recognized combinations are Level 1 Versions 1-2, Level 2
/// Versions 1-5, and Level 3 Versions 1-2. Construction rejects anything
/// else eagerly; unknown pairs are never coerced to a nearby combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("SBML Level {level} Version {version} is not a recognized combination")]
pub struct LevelVersionError {
    /// The rejected level.
    pub level: u32,
    /// The rejected version.
    pub version: u32,
}
