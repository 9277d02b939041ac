//! The schema level/version registry.
//!
//! Every element in the document model is fixed at construction time to a
//! schema level/version pair. This module provides the [`LevelVersion`]
//! value type, the table of recognized combinations, and the mapping
//! between combinations and their canonical core namespace URIs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LevelVersionError;

/// The most recent schema level supported by this release.
pub const DEFAULT_LEVEL: u32 = 3;

/// The most recent version within [`DEFAULT_LEVEL`] supported by this release.
pub const DEFAULT_VERSION: u32 = 2;

const URI_L1: &str = "http://www.sbml.org/sbml/level1";
const URI_L2V1: &str = "http://www.sbml.org/sbml/level2";
const URI_L2V2: &str = "http://www.sbml.org/sbml/level2/version2";
const URI_L2V3: &str = "http://www.sbml.org/sbml/level2/version3";
const URI_L2V4: &str = "http://www.sbml.org/sbml/level2/version4";
const URI_L2V5: &str = "http://www.sbml.org/sbml/level2/version5";
const URI_L3V1: &str = "http://www.sbml.org/sbml/level3/version1/core";
const URI_L3V2: &str = "http://www.sbml.org/sbml/level3/version2/core";

/// A recognized schema level/version combination.
///
/// Values of this type are immutable and always recognized: the only way
/// to obtain one is through [`LevelVersion::new`], which rejects unknown
/// pairs with [`LevelVersionError`].
///
/// # Examples
///
/// ```
/// use sbmlkit_core::level::LevelVersion;
///
/// let lv = LevelVersion::new(2, 4).unwrap();
/// assert_eq!(lv.level(), 2);
/// assert_eq!(lv.version(), 4);
///
/// assert!(LevelVersion::new(2, 6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LevelVersion {
    level: u32,
    version: u32,
}

impl LevelVersion {
    /// Create a `LevelVersion` from explicit integers.
    ///
    /// # Errors
    ///
    /// Returns [`LevelVersionError`] if the pair is not a recognized
    /// combination.
    pub fn new(level: u32, version: u32) -> Result<Self, LevelVersionError> {
        if Self::is_recognized(level, version) {
            Ok(Self { level, version })
        } else {
            Err(LevelVersionError { level, version })
        }
    }

    /// The most recent recognized combination.
    pub fn latest() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            version: DEFAULT_VERSION,
        }
    }

    /// Whether the given pair is a recognized combination.
    pub fn is_recognized(level: u32, version: u32) -> bool {
        matches!(
            (level, version),
            (1, 1..=2) | (2, 1..=5) | (3, 1..=2)
        )
    }

    /// Get the schema level.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Get the version within the level.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// The canonical core namespace URI for this combination.
    ///
    /// Both Level 1 versions share a single URI; every other combination
    /// has its own.
    pub fn namespace_uri(&self) -> &'static str {
        // Construction guarantees a recognized pair, so the match is total.
        match (self.level, self.version) {
            (1, _) => URI_L1,
            (2, 1) => URI_L2V1,
            (2, 2) => URI_L2V2,
            (2, 3) => URI_L2V3,
            (2, 4) => URI_L2V4,
            (2, _) => URI_L2V5,
            (3, 1) => URI_L3V1,
            _ => URI_L3V2,
        }
    }

    /// Look up the combination declared by a core namespace URI.
    ///
    /// The Level 1 URI covers both of its versions; the lookup resolves it
    /// to the most recent one.
    pub fn from_uri(uri: &str) -> Option<Self> {
        let (level, version) = match uri {
            URI_L1 => (1, 2),
            URI_L2V1 => (2, 1),
            URI_L2V2 => (2, 2),
            URI_L2V3 => (2, 3),
            URI_L2V4 => (2, 4),
            URI_L2V5 => (2, 5),
            URI_L3V1 => (3, 1),
            URI_L3V2 => (3, 2),
            _ => return None,
        };
        Some(Self { level, version })
    }
}

impl Default for LevelVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for LevelVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level {} Version {}", self.level, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_combinations() {
        for (level, version) in [(1, 1), (1, 2), (2, 1), (2, 2), (2, 3), (2, 4), (2, 5), (3, 1), (3, 2)] {
            let lv = LevelVersion::new(level, version).unwrap();
            assert_eq!(lv.level(), level);
            assert_eq!(lv.version(), version);
        }
    }

    #[test]
    fn test_unrecognized_combinations() {
        for (level, version) in [(0, 0), (0, 1), (1, 3), (2, 0), (2, 6), (3, 3), (4, 1)] {
            let err = LevelVersion::new(level, version).unwrap_err();
            assert_eq!(err, LevelVersionError { level, version });
        }
    }

    #[test]
    fn test_latest_is_default() {
        assert_eq!(LevelVersion::latest(), LevelVersion::default());
        assert_eq!(LevelVersion::latest().level(), DEFAULT_LEVEL);
        assert_eq!(LevelVersion::latest().version(), DEFAULT_VERSION);
    }

    #[test]
    fn test_namespace_uri_round_trip() {
        for (level, version) in [(2, 1), (2, 2), (2, 3), (2, 4), (2, 5), (3, 1), (3, 2)] {
            let lv = LevelVersion::new(level, version).unwrap();
            assert_eq!(LevelVersion::from_uri(lv.namespace_uri()), Some(lv));
        }
    }

    #[test]
    fn test_level1_shares_uri() {
        let l1v1 = LevelVersion::new(1, 1).unwrap();
        let l1v2 = LevelVersion::new(1, 2).unwrap();
        assert_eq!(l1v1.namespace_uri(), l1v2.namespace_uri());
        // The shared URI resolves to the most recent Level 1 version.
        assert_eq!(LevelVersion::from_uri(l1v1.namespace_uri()), Some(l1v2));
    }

    #[test]
    fn test_from_uri_unknown() {
        assert_eq!(LevelVersion::from_uri("http://example.org/ns"), None);
        assert_eq!(LevelVersion::from_uri(""), None);
    }

    #[test]
    fn test_display() {
        let lv = LevelVersion::new(2, 4).unwrap();
        assert_eq!(lv.to_string(), "Level 2 Version 4");
    }
}
