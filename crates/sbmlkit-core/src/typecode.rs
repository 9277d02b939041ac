//! Enumerated element kind tags.
//!
//! Every element in the document model carries an immutable [`TypeCode`]
//! identifying its concrete kind. The tag is fixed at construction and is
//! the dispatch key for code outside the kernel (validators, serializers).

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::level::LevelVersion;

/// The kind tag of a document-model element.
///
/// Tags are stable across schema levels. Display and serde names match
/// the schema element names (camelCase).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeCode {
    /// The document root element.
    Document,
    /// A model definition.
    Model,
    /// A compartment definition.
    Compartment,
    /// A species definition.
    Species,
    /// A species type definition.
    SpeciesType,
    /// A reference to a species within a reaction.
    SpeciesReference,
    /// A reaction definition.
    Reaction,
}

impl TypeCode {
    /// Returns the schema element name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeCode::Document => "sbml",
            TypeCode::Model => "model",
            TypeCode::Compartment => "compartment",
            TypeCode::Species => "species",
            TypeCode::SpeciesType => "speciesType",
            TypeCode::SpeciesReference => "speciesReference",
            TypeCode::Reaction => "reaction",
        }
    }

    /// Whether this element kind is defined by the given schema combination.
    ///
    /// Species types were introduced in Level 2 Version 2 and removed in
    /// Level 3; every other kind in view exists in all recognized
    /// combinations.
    pub fn available_in(&self, lv: LevelVersion) -> bool {
        match self {
            TypeCode::SpeciesType => lv.level() == 2 && lv.version() >= 2,
            _ => true,
        }
    }
}

impl FromStr for TypeCode {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sbml" => Ok(TypeCode::Document),
            "model" => Ok(TypeCode::Model),
            "compartment" => Ok(TypeCode::Compartment),
            "species" => Ok(TypeCode::Species),
            "speciesType" => Ok(TypeCode::SpeciesType),
            "speciesReference" => Ok(TypeCode::SpeciesReference),
            "reaction" => Ok(TypeCode::Reaction),
            _ => Err("Unknown element kind"),
        }
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_schema_names() {
        assert_eq!(TypeCode::SpeciesType.to_string(), "speciesType");
        assert_eq!(TypeCode::Document.to_string(), "sbml");
        assert_eq!(TypeCode::Reaction.to_string(), "reaction");
    }

    #[test]
    fn test_from_str_round_trip() {
        for code in [
            TypeCode::Document,
            TypeCode::Model,
            TypeCode::Compartment,
            TypeCode::Species,
            TypeCode::SpeciesType,
            TypeCode::SpeciesReference,
            TypeCode::Reaction,
        ] {
            assert_eq!(code.as_str().parse::<TypeCode>(), Ok(code));
        }
        assert!("speciestype".parse::<TypeCode>().is_err());
    }

    #[test]
    fn test_species_type_availability() {
        let l2v1 = LevelVersion::new(2, 1).unwrap();
        let l2v2 = LevelVersion::new(2, 2).unwrap();
        let l2v5 = LevelVersion::new(2, 5).unwrap();
        let l1v2 = LevelVersion::new(1, 2).unwrap();
        let l3v2 = LevelVersion::new(3, 2).unwrap();

        assert!(!TypeCode::SpeciesType.available_in(l2v1));
        assert!(TypeCode::SpeciesType.available_in(l2v2));
        assert!(TypeCode::SpeciesType.available_in(l2v5));
        assert!(!TypeCode::SpeciesType.available_in(l1v2));
        assert!(!TypeCode::SpeciesType.available_in(l3v2));
    }

    #[test]
    fn test_other_kinds_available_everywhere() {
        for (level, version) in [(1, 1), (1, 2), (2, 1), (2, 5), (3, 1), (3, 2)] {
            let lv = LevelVersion::new(level, version).unwrap();
            assert!(TypeCode::Compartment.available_in(lv));
            assert!(TypeCode::Species.available_in(lv));
            assert!(TypeCode::Reaction.available_in(lv));
            assert!(TypeCode::Model.available_in(lv));
        }
    }
}
