//! Species definitions.

use sbmlkit_core::{namespace::SbmlNamespaces, typecode::TypeCode};

use crate::{
    base::{Element, ElementBase, StringAttr},
    element::compartment::set_sid_ref,
    error::SbmlError,
};

/// A species definition: a pool of entities located in a compartment.
///
/// The structural attributes in view are the compartment reference, an
/// optional species type reference, an optional initial amount, and the
/// boundary-condition and constant flags. Concentration/amount unit
/// semantics are outside this kernel.
#[derive(Debug, Clone, PartialEq)]
pub struct Species {
    base: ElementBase,
    compartment: StringAttr,
    species_type: StringAttr,
    initial_amount: Option<f64>,
    boundary_condition: bool,
    constant: bool,
}

impl Species {
    /// Create a species for the given level/version pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the pair is not a recognized combination.
    pub fn new(level: u32, version: u32) -> Result<Self, SbmlError> {
        Ok(Self::from_base(ElementBase::from_level_version(
            level, version,
        )?))
    }

    /// Create a species from a namespace context, copying it.
    pub fn from_namespaces(namespaces: &SbmlNamespaces) -> Self {
        Self::from_base(ElementBase::from_namespaces(namespaces))
    }

    fn from_base(base: ElementBase) -> Self {
        Self {
            base,
            compartment: StringAttr::default(),
            species_type: StringAttr::default(),
            initial_amount: None,
            boundary_condition: false,
            constant: false,
        }
    }

    /// The id of the compartment this species lives in, or `""` when unset.
    pub fn compartment(&self) -> &str {
        self.compartment.get()
    }

    /// Set the compartment reference; empty input unsets it.
    pub fn set_compartment(&mut self, value: &str) -> Result<(), SbmlError> {
        set_sid_ref(&mut self.compartment, value)
    }

    /// Whether the compartment reference is set.
    pub fn is_set_compartment(&self) -> bool {
        self.compartment.is_set()
    }

    /// Unset the compartment reference.
    pub fn unset_compartment(&mut self) {
        self.compartment.unset();
    }

    /// The referenced species type id, or `""` when unset.
    pub fn species_type(&self) -> &str {
        self.species_type.get()
    }

    /// Set the species type reference; empty input unsets it.
    pub fn set_species_type(&mut self, value: &str) -> Result<(), SbmlError> {
        set_sid_ref(&mut self.species_type, value)
    }

    /// Whether the species type reference is set.
    pub fn is_set_species_type(&self) -> bool {
        self.species_type.is_set()
    }

    /// Unset the species type reference.
    pub fn unset_species_type(&mut self) {
        self.species_type.unset();
    }

    /// The initial amount, if set.
    pub fn initial_amount(&self) -> Option<f64> {
        self.initial_amount
    }

    /// Set the initial amount.
    pub fn set_initial_amount(&mut self, value: f64) {
        self.initial_amount = Some(value);
    }

    /// Whether the initial amount is set.
    pub fn is_set_initial_amount(&self) -> bool {
        self.initial_amount.is_some()
    }

    /// Unset the initial amount.
    pub fn unset_initial_amount(&mut self) {
        self.initial_amount = None;
    }

    /// Whether the species is a boundary condition (default false).
    pub fn boundary_condition(&self) -> bool {
        self.boundary_condition
    }

    /// Set the boundary-condition flag.
    pub fn set_boundary_condition(&mut self, value: bool) {
        self.boundary_condition = value;
    }

    /// Whether the species amount is constant over time (default false).
    pub fn constant(&self) -> bool {
        self.constant
    }

    /// Set the constant flag.
    pub fn set_constant(&mut self, value: bool) {
        self.constant = value;
    }
}

impl Element for Species {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::Species
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use float_cmp::approx_eq;

    #[test]
    fn test_defaults() {
        let s = Species::new(2, 4).unwrap();
        assert_eq!(s.type_code(), TypeCode::Species);
        assert!(!s.is_set_compartment());
        assert!(!s.is_set_species_type());
        assert!(!s.is_set_initial_amount());
        assert!(!s.boundary_condition());
        assert!(!s.constant());
    }

    #[test]
    fn test_references() {
        let mut s = Species::new(2, 4).unwrap();
        s.set_compartment("cytosol").unwrap();
        s.set_species_type("mitochondria").unwrap();
        assert_eq!(s.compartment(), "cytosol");
        assert_eq!(s.species_type(), "mitochondria");

        assert!(s.set_compartment("9bad").is_err());
        assert_eq!(s.compartment(), "cytosol");

        s.unset_species_type();
        assert!(!s.is_set_species_type());
    }

    #[test]
    fn test_initial_amount() {
        let mut s = Species::new(2, 4).unwrap();
        s.set_initial_amount(0.5);
        assert!(approx_eq!(f64, s.initial_amount().unwrap(), 0.5));
        s.unset_initial_amount();
        assert!(s.initial_amount().is_none());
    }
}
