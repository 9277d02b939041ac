//! Species references within reactions.

use sbmlkit_core::{namespace::SbmlNamespaces, typecode::TypeCode};

use crate::{
    base::{Element, ElementBase, StringAttr},
    element::compartment::set_sid_ref,
    error::SbmlError,
};

/// A reference to a species participating in a reaction.
///
/// Carries the referenced species id and a stoichiometry (default 1.0).
/// Modifier references ignore the stoichiometry.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesReference {
    base: ElementBase,
    species: StringAttr,
    stoichiometry: f64,
}

impl SpeciesReference {
    /// Create a species reference for the given level/version pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the pair is not a recognized combination.
    pub fn new(level: u32, version: u32) -> Result<Self, SbmlError> {
        Ok(Self::from_base(ElementBase::from_level_version(
            level, version,
        )?))
    }

    /// Create a species reference from a namespace context, copying it.
    pub fn from_namespaces(namespaces: &SbmlNamespaces) -> Self {
        Self::from_base(ElementBase::from_namespaces(namespaces))
    }

    fn from_base(base: ElementBase) -> Self {
        Self {
            base,
            species: StringAttr::default(),
            stoichiometry: 1.0,
        }
    }

    /// The referenced species id, or `""` when unset.
    pub fn species(&self) -> &str {
        self.species.get()
    }

    /// Set the species reference; empty input unsets it.
    pub fn set_species(&mut self, value: &str) -> Result<(), SbmlError> {
        set_sid_ref(&mut self.species, value)
    }

    /// Whether the species reference is set.
    pub fn is_set_species(&self) -> bool {
        self.species.is_set()
    }

    /// Unset the species reference.
    pub fn unset_species(&mut self) {
        self.species.unset();
    }

    /// The stoichiometry (default 1.0).
    pub fn stoichiometry(&self) -> f64 {
        self.stoichiometry
    }

    /// Set the stoichiometry.
    pub fn set_stoichiometry(&mut self, value: f64) {
        self.stoichiometry = value;
    }
}

impl Element for SpeciesReference {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::SpeciesReference
    }
}
