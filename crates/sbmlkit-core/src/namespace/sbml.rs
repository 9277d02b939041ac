//! SBML namespace contexts.

use std::fmt;

use log::trace;

use crate::{error::LevelVersionError, level::LevelVersion, namespace::XmlNamespaces};

/// A schema level/version pair together with its namespace declarations.
///
/// A context is seeded at construction with the pair's canonical core
/// namespace URI under the default (empty) prefix. Further declarations
/// can be unioned in with [`add_namespaces`] before the context is used
/// to construct elements.
///
/// Elements built from a context own an independent copy of it; mutating
/// the context afterwards never affects them.
///
/// [`add_namespaces`]: SbmlNamespaces::add_namespaces
///
/// # Examples
///
/// ```
/// use sbmlkit_core::namespace::{SbmlNamespaces, XmlNamespaces};
///
/// let mut xmlns = XmlNamespaces::new();
/// xmlns.add("http://www.sbml.org", "testsbml");
///
/// let mut sbmlns = SbmlNamespaces::new(2, 2).unwrap();
/// sbmlns.add_namespaces(&xmlns);
///
/// assert_eq!(sbmlns.level(), 2);
/// assert_eq!(sbmlns.version(), 2);
/// assert_eq!(sbmlns.xml_namespaces().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbmlNamespaces {
    level_version: LevelVersion,
    namespaces: XmlNamespaces,
}

impl SbmlNamespaces {
    /// Create a context for the given level/version pair.
    ///
    /// The declaration set is seeded with the pair's core namespace URI.
    ///
    /// # Errors
    ///
    /// Returns [`LevelVersionError`] if the pair is not a recognized
    /// combination.
    pub fn new(level: u32, version: u32) -> Result<Self, LevelVersionError> {
        Ok(Self::from_level_version(LevelVersion::new(level, version)?))
    }

    /// Create a context from an already-validated combination.
    pub fn from_level_version(level_version: LevelVersion) -> Self {
        let mut namespaces = XmlNamespaces::new();
        namespaces.add_default(level_version.namespace_uri());
        trace!(uri = level_version.namespace_uri(); "Seeded namespace context");
        Self {
            level_version,
            namespaces,
        }
    }

    /// A context for the most recent recognized combination.
    pub fn latest() -> Self {
        Self::from_level_version(LevelVersion::latest())
    }

    /// Get the schema level.
    pub fn level(&self) -> u32 {
        self.level_version.level()
    }

    /// Get the version within the level.
    pub fn version(&self) -> u32 {
        self.level_version.version()
    }

    /// Get the level/version pair.
    pub fn level_version(&self) -> LevelVersion {
        self.level_version
    }

    /// The core namespace URI of the pair.
    pub fn uri(&self) -> &'static str {
        self.level_version.namespace_uri()
    }

    /// Union every declaration of `extra` into this context.
    ///
    /// Duplicate prefixes are permitted; the declared count grows by
    /// `extra.len()`.
    pub fn add_namespaces(&mut self, extra: &XmlNamespaces) {
        self.namespaces.extend_from(extra);
    }

    /// Borrow the declaration set.
    pub fn xml_namespaces(&self) -> &XmlNamespaces {
        &self.namespaces
    }
}

impl Default for SbmlNamespaces {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for SbmlNamespaces {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.level_version, self.namespaces)
    }
}
