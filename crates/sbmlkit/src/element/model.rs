//! The model container.

use log::debug;

use sbmlkit_core::{namespace::SbmlNamespaces, typecode::TypeCode};

use crate::{
    base::{check_level_match, Element, ElementBase},
    element::{Compartment, Reaction, Species, SpeciesType},
    error::SbmlError,
};

/// A model: the ordered container for compartments, species, species
/// types, and reactions.
///
/// Children are owned exclusively by the model. Every identifier set on a
/// child shares one scope across the whole model; the `add_*` operations
/// reject an element whose id is already taken, and every child must
/// target the model's own schema combination.
///
/// # Examples
///
/// ```
/// use sbmlkit::{base::Element, element::Model};
///
/// let mut model = Model::new(2, 4)?;
/// let compartment = model.create_compartment();
/// compartment.set_id("cytosol")?;
///
/// assert_eq!(model.num_compartments(), 1);
/// assert!(model.compartment_by_id("cytosol").is_some());
/// # Ok::<(), sbmlkit::SbmlError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    base: ElementBase,
    compartments: Vec<Compartment>,
    species: Vec<Species>,
    species_types: Vec<SpeciesType>,
    reactions: Vec<Reaction>,
}

impl Model {
    /// Create an empty model for the given level/version pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the pair is not a recognized combination.
    pub fn new(level: u32, version: u32) -> Result<Self, SbmlError> {
        Ok(Self::from_base(ElementBase::from_level_version(
            level, version,
        )?))
    }

    /// Create an empty model from a namespace context, copying it.
    pub fn from_namespaces(namespaces: &SbmlNamespaces) -> Self {
        Self::from_base(ElementBase::from_namespaces(namespaces))
    }

    fn from_base(base: ElementBase) -> Self {
        Self {
            base,
            compartments: Vec::new(),
            species: Vec::new(),
            species_types: Vec::new(),
            reactions: Vec::new(),
        }
    }

    /// Whether any child element (or the model itself) holds `id`.
    pub fn contains_id(&self, id: &str) -> bool {
        if id.is_empty() {
            return false;
        }
        self.id() == id
            || self.compartments.iter().any(|c| c.id() == id)
            || self.species.iter().any(|s| s.id() == id)
            || self.species_types.iter().any(|st| st.id() == id)
            || self.reactions.iter().any(|r| r.id() == id)
    }

    fn check_admissible(&self, found: &ElementBase) -> Result<(), SbmlError> {
        check_level_match(self.level_version(), found.level_version())?;
        if found.is_set_id() && self.contains_id(found.id()) {
            return Err(SbmlError::DuplicateId {
                id: found.id().to_string(),
            });
        }
        Ok(())
    }

    /// Add a compartment to the model.
    ///
    /// # Errors
    ///
    /// Returns an error on a schema mismatch or a duplicate identifier.
    pub fn add_compartment(&mut self, compartment: Compartment) -> Result<(), SbmlError> {
        self.check_admissible(compartment.base())?;
        debug!(id = compartment.id(); "Adding compartment to model");
        self.compartments.push(compartment);
        Ok(())
    }

    /// Add a species to the model.
    ///
    /// # Errors
    ///
    /// Returns an error on a schema mismatch or a duplicate identifier.
    pub fn add_species(&mut self, species: Species) -> Result<(), SbmlError> {
        self.check_admissible(species.base())?;
        debug!(id = species.id(); "Adding species to model");
        self.species.push(species);
        Ok(())
    }

    /// Add a species type to the model.
    ///
    /// # Errors
    ///
    /// Returns an error on a schema mismatch or a duplicate identifier.
    pub fn add_species_type(&mut self, species_type: SpeciesType) -> Result<(), SbmlError> {
        self.check_admissible(species_type.base())?;
        debug!(id = species_type.id(); "Adding species type to model");
        self.species_types.push(species_type);
        Ok(())
    }

    /// Add a reaction to the model.
    ///
    /// # Errors
    ///
    /// Returns an error on a schema mismatch or a duplicate identifier.
    pub fn add_reaction(&mut self, reaction: Reaction) -> Result<(), SbmlError> {
        self.check_admissible(reaction.base())?;
        debug!(id = reaction.id(); "Adding reaction to model");
        self.reactions.push(reaction);
        Ok(())
    }

    /// Construct a fresh compartment from this model's namespace context,
    /// append it, and return it for population.
    pub fn create_compartment(&mut self) -> &mut Compartment {
        let compartment = Compartment::from_namespaces(self.base.namespaces());
        self.compartments.push(compartment);
        self.compartments
            .last_mut()
            .expect("Compartment was just appended")
    }

    /// Construct a fresh species from this model's namespace context,
    /// append it, and return it for population.
    pub fn create_species(&mut self) -> &mut Species {
        let species = Species::from_namespaces(self.base.namespaces());
        self.species.push(species);
        self.species
            .last_mut()
            .expect("Species was just appended")
    }

    /// Construct a fresh species type from this model's namespace
    /// context, append it, and return it for population.
    ///
    /// # Errors
    ///
    /// Returns an error if species types are not defined at this model's
    /// schema combination.
    pub fn create_species_type(&mut self) -> Result<&mut SpeciesType, SbmlError> {
        let species_type = SpeciesType::from_namespaces(self.base.namespaces())?;
        self.species_types.push(species_type);
        Ok(self
            .species_types
            .last_mut()
            .expect("Species type was just appended"))
    }

    /// Construct a fresh reaction from this model's namespace context,
    /// append it, and return it for population.
    pub fn create_reaction(&mut self) -> &mut Reaction {
        let reaction = Reaction::from_namespaces(self.base.namespaces());
        self.reactions.push(reaction);
        self.reactions
            .last_mut()
            .expect("Reaction was just appended")
    }

    /// Borrow the compartments, in insertion order.
    pub fn compartments(&self) -> &[Compartment] {
        &self.compartments
    }

    /// Borrow the species, in insertion order.
    pub fn species(&self) -> &[Species] {
        &self.species
    }

    /// Borrow the species types, in insertion order.
    pub fn species_types(&self) -> &[SpeciesType] {
        &self.species_types
    }

    /// Borrow the reactions, in insertion order.
    pub fn reactions(&self) -> &[Reaction] {
        &self.reactions
    }

    /// The compartment at `index`.
    pub fn compartment(&self, index: usize) -> Option<&Compartment> {
        self.compartments.get(index)
    }

    /// The species at `index`.
    pub fn species_at(&self, index: usize) -> Option<&Species> {
        self.species.get(index)
    }

    /// The species type at `index`.
    pub fn species_type(&self, index: usize) -> Option<&SpeciesType> {
        self.species_types.get(index)
    }

    /// The reaction at `index`.
    pub fn reaction(&self, index: usize) -> Option<&Reaction> {
        self.reactions.get(index)
    }

    /// Mutably borrow the compartment at `index`.
    pub fn compartment_mut(&mut self, index: usize) -> Option<&mut Compartment> {
        self.compartments.get_mut(index)
    }

    /// Mutably borrow the species at `index`.
    pub fn species_at_mut(&mut self, index: usize) -> Option<&mut Species> {
        self.species.get_mut(index)
    }

    /// Mutably borrow the species type at `index`.
    pub fn species_type_mut(&mut self, index: usize) -> Option<&mut SpeciesType> {
        self.species_types.get_mut(index)
    }

    /// Mutably borrow the reaction at `index`.
    pub fn reaction_mut(&mut self, index: usize) -> Option<&mut Reaction> {
        self.reactions.get_mut(index)
    }

    /// Find a compartment by identifier.
    pub fn compartment_by_id(&self, id: &str) -> Option<&Compartment> {
        self.compartments.iter().find(|c| c.is_set_id() && c.id() == id)
    }

    /// Find a species by identifier.
    pub fn species_by_id(&self, id: &str) -> Option<&Species> {
        self.species.iter().find(|s| s.is_set_id() && s.id() == id)
    }

    /// Find a species type by identifier.
    pub fn species_type_by_id(&self, id: &str) -> Option<&SpeciesType> {
        self.species_types
            .iter()
            .find(|st| st.is_set_id() && st.id() == id)
    }

    /// Find a reaction by identifier.
    pub fn reaction_by_id(&self, id: &str) -> Option<&Reaction> {
        self.reactions.iter().find(|r| r.is_set_id() && r.id() == id)
    }

    /// The number of compartments.
    pub fn num_compartments(&self) -> usize {
        self.compartments.len()
    }

    /// The number of species.
    pub fn num_species(&self) -> usize {
        self.species.len()
    }

    /// The number of species types.
    pub fn num_species_types(&self) -> usize {
        self.species_types.len()
    }

    /// The number of reactions.
    pub fn num_reactions(&self) -> usize {
        self.reactions.len()
    }
}

impl Element for Model {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::Model
    }
}
