//! sbmlkit - a structural SBML document model.
//!
//! A typed, hierarchical document model for systems-biology models:
//! documents own models, models own compartments, species, species
//! types, and reactions, and every element carries identity, an optional
//! name, a namespace context, and schema level/version coordinates fixed
//! at construction.
//!
//! The kernel covers structure only. Reaction kinetics, units, math, and
//! XML (de)serialization are outside its scope; serializers and parsers
//! are consumers of the accessors exposed here.
//!
//! # Examples
//!
//! ```rust
//! use sbmlkit::{base::Element, document::SbmlDocument};
//!
//! let mut doc = SbmlDocument::new(2, 4)?;
//! let model = doc.create_model();
//!
//! let species_type = model.create_species_type()?;
//! species_type.set_id("mitochondria")?;
//! assert!(species_type.is_set_id());
//!
//! let log = doc.check_consistency();
//! assert!(!log.has_errors());
//! # Ok::<(), sbmlkit::SbmlError>(())
//! ```

pub mod base;
pub mod config;
pub mod document;
pub mod element;
pub mod validate;

mod error;

pub use sbmlkit_core::{level, namespace, syntax, typecode};

pub use error::SbmlError;
