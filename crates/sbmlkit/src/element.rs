//! Concrete element kinds of the document model.
//!
//! Each kind embeds an [`ElementBase`](crate::base::ElementBase) and
//! implements the [`Element`](crate::base::Element) contract. Elements
//! are created either from explicit level/version integers or from a
//! pre-built namespace context, and are owned exclusively by their
//! container once added to one.
//!
//! # Organization
//!
//! - [`Model`] - the container for compartments, species, species types,
//!   and reactions
//! - [`Compartment`], [`Species`], [`SpeciesType`], [`Reaction`],
//!   [`SpeciesReference`] - the element kinds in view

mod compartment;
mod model;
mod reaction;
mod species;
mod species_reference;
mod species_type;

pub use compartment::Compartment;
pub use model::Model;
pub use reaction::Reaction;
pub use species::Species;
pub use species_reference::SpeciesReference;
pub use species_type::SpeciesType;
