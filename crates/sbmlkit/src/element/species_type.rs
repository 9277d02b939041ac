//! Species type definitions.

use sbmlkit_core::{namespace::SbmlNamespaces, typecode::TypeCode};

use crate::{
    base::{Element, ElementBase},
    error::SbmlError,
};

/// A species type definition: a named, identified classification that
/// species can reference.
///
/// Species types exist only in Level 2 Versions 2-5; both constructors
/// reject any other combination.
///
/// # Examples
///
/// ```
/// use sbmlkit::{base::Element, element::SpeciesType};
///
/// let mut st = SpeciesType::new(2, 4)?;
/// st.set_id("mitochondria")?;
/// assert_eq!(st.id(), "mitochondria");
/// assert!(st.is_set_id());
/// # Ok::<(), sbmlkit::SbmlError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesType {
    base: ElementBase,
}

impl SpeciesType {
    /// Create a species type for the given level/version pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the pair is not recognized, or if species
    /// types are not defined at it.
    pub fn new(level: u32, version: u32) -> Result<Self, SbmlError> {
        Self::from_base(ElementBase::from_level_version(level, version)?)
    }

    /// Create a species type from a namespace context, copying it.
    ///
    /// # Errors
    ///
    /// Returns an error if species types are not defined at the context's
    /// level/version.
    pub fn from_namespaces(namespaces: &SbmlNamespaces) -> Result<Self, SbmlError> {
        Self::from_base(ElementBase::from_namespaces(namespaces))
    }

    fn from_base(base: ElementBase) -> Result<Self, SbmlError> {
        let lv = base.level_version();
        if !TypeCode::SpeciesType.available_in(lv) {
            return Err(SbmlError::unavailable(TypeCode::SpeciesType, lv));
        }
        Ok(Self { base })
    }
}

impl Element for SpeciesType {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::SpeciesType
    }
}
