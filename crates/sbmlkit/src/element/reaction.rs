//! Reaction definitions.

use log::debug;

use sbmlkit_core::{namespace::SbmlNamespaces, typecode::TypeCode};

use crate::{
    base::{check_level_match, Element, ElementBase},
    element::SpeciesReference,
    error::SbmlError,
};

/// A reaction definition: reactant, product, and modifier species
/// references plus the reversible and fast flags.
///
/// Kinetic laws and math are outside this kernel; a reaction here is the
/// structural record of which species participate and how.
#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    base: ElementBase,
    reversible: bool,
    fast: bool,
    reactants: Vec<SpeciesReference>,
    products: Vec<SpeciesReference>,
    modifiers: Vec<SpeciesReference>,
}

impl Reaction {
    /// Create a reaction for the given level/version pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the pair is not a recognized combination.
    pub fn new(level: u32, version: u32) -> Result<Self, SbmlError> {
        Ok(Self::from_base(ElementBase::from_level_version(
            level, version,
        )?))
    }

    /// Create a reaction from a namespace context, copying it.
    pub fn from_namespaces(namespaces: &SbmlNamespaces) -> Self {
        Self::from_base(ElementBase::from_namespaces(namespaces))
    }

    fn from_base(base: ElementBase) -> Self {
        Self {
            base,
            reversible: true,
            fast: false,
            reactants: Vec::new(),
            products: Vec::new(),
            modifiers: Vec::new(),
        }
    }

    /// Whether the reaction is reversible (default true).
    pub fn reversible(&self) -> bool {
        self.reversible
    }

    /// Set the reversible flag.
    pub fn set_reversible(&mut self, value: bool) {
        self.reversible = value;
    }

    /// Whether the reaction is fast (default false).
    pub fn fast(&self) -> bool {
        self.fast
    }

    /// Set the fast flag.
    pub fn set_fast(&mut self, value: bool) {
        self.fast = value;
    }

    /// Add a reactant reference.
    ///
    /// # Errors
    ///
    /// Returns an error if the reference targets a different schema
    /// combination than this reaction.
    pub fn add_reactant(&mut self, reference: SpeciesReference) -> Result<(), SbmlError> {
        check_level_match(self.level_version(), reference.level_version())?;
        debug!(species = reference.species(); "Adding reactant reference");
        self.reactants.push(reference);
        Ok(())
    }

    /// Add a product reference.
    ///
    /// # Errors
    ///
    /// Returns an error if the reference targets a different schema
    /// combination than this reaction.
    pub fn add_product(&mut self, reference: SpeciesReference) -> Result<(), SbmlError> {
        check_level_match(self.level_version(), reference.level_version())?;
        debug!(species = reference.species(); "Adding product reference");
        self.products.push(reference);
        Ok(())
    }

    /// Add a modifier reference. The reference's stoichiometry is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the reference targets a different schema
    /// combination than this reaction.
    pub fn add_modifier(&mut self, reference: SpeciesReference) -> Result<(), SbmlError> {
        check_level_match(self.level_version(), reference.level_version())?;
        debug!(species = reference.species(); "Adding modifier reference");
        self.modifiers.push(reference);
        Ok(())
    }

    /// Construct a fresh reactant reference from this reaction's
    /// namespace context, append it, and return it for population.
    pub fn create_reactant(&mut self) -> &mut SpeciesReference {
        let reference = SpeciesReference::from_namespaces(self.base.namespaces());
        self.reactants.push(reference);
        self.reactants
            .last_mut()
            .expect("Reference was just appended")
    }

    /// Construct a fresh product reference from this reaction's
    /// namespace context, append it, and return it for population.
    pub fn create_product(&mut self) -> &mut SpeciesReference {
        let reference = SpeciesReference::from_namespaces(self.base.namespaces());
        self.products.push(reference);
        self.products
            .last_mut()
            .expect("Reference was just appended")
    }

    /// Construct a fresh modifier reference from this reaction's
    /// namespace context, append it, and return it for population.
    pub fn create_modifier(&mut self) -> &mut SpeciesReference {
        let reference = SpeciesReference::from_namespaces(self.base.namespaces());
        self.modifiers.push(reference);
        self.modifiers
            .last_mut()
            .expect("Reference was just appended")
    }

    /// Borrow the reactant references.
    pub fn reactants(&self) -> &[SpeciesReference] {
        &self.reactants
    }

    /// Borrow the product references.
    pub fn products(&self) -> &[SpeciesReference] {
        &self.products
    }

    /// Borrow the modifier references.
    pub fn modifiers(&self) -> &[SpeciesReference] {
        &self.modifiers
    }

    /// The reactant reference at `index`, in insertion order.
    pub fn reactant(&self, index: usize) -> Option<&SpeciesReference> {
        self.reactants.get(index)
    }

    /// The product reference at `index`, in insertion order.
    pub fn product(&self, index: usize) -> Option<&SpeciesReference> {
        self.products.get(index)
    }

    /// The modifier reference at `index`, in insertion order.
    pub fn modifier(&self, index: usize) -> Option<&SpeciesReference> {
        self.modifiers.get(index)
    }

    /// The number of reactant references.
    pub fn num_reactants(&self) -> usize {
        self.reactants.len()
    }

    /// The number of product references.
    pub fn num_products(&self) -> usize {
        self.products.len()
    }

    /// The number of modifier references.
    pub fn num_modifiers(&self) -> usize {
        self.modifiers.len()
    }
}

impl Element for Reaction {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::Reaction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let r = Reaction::new(2, 4).unwrap();
        assert_eq!(r.type_code(), TypeCode::Reaction);
        assert!(r.reversible());
        assert!(!r.fast());
        assert_eq!(r.num_reactants(), 0);
        assert_eq!(r.num_products(), 0);
        assert_eq!(r.num_modifiers(), 0);
    }

    #[test]
    fn test_create_participants() {
        let mut r = Reaction::new(2, 4).unwrap();
        r.create_reactant().set_species("glucose").unwrap();
        r.create_product().set_species("pyruvate").unwrap();
        r.create_modifier().set_species("hexokinase").unwrap();

        assert_eq!(r.num_reactants(), 1);
        assert_eq!(r.reactant(0).unwrap().species(), "glucose");
        assert_eq!(r.product(0).unwrap().species(), "pyruvate");
        assert_eq!(r.modifier(0).unwrap().species(), "hexokinase");
        // Created references inherit the reaction's schema coordinates.
        assert_eq!(r.reactant(0).unwrap().level(), 2);
        assert_eq!(r.reactant(0).unwrap().version(), 4);
    }

    #[test]
    fn test_add_rejects_level_mismatch() {
        let mut r = Reaction::new(2, 4).unwrap();
        let reference = SpeciesReference::new(3, 1).unwrap();
        assert!(matches!(
            r.add_reactant(reference),
            Err(SbmlError::LevelMismatch { .. })
        ));
        assert_eq!(r.num_reactants(), 0);
    }

    #[test]
    fn test_add_matching_reference() {
        let mut r = Reaction::new(2, 4).unwrap();
        let mut reference = SpeciesReference::new(2, 4).unwrap();
        reference.set_species("atp").unwrap();
        r.add_product(reference).unwrap();
        assert_eq!(r.num_products(), 1);
    }
}
