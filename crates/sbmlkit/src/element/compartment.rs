//! Compartment definitions.

use sbmlkit_core::{namespace::SbmlNamespaces, syntax, typecode::TypeCode};

use crate::{
    base::{Element, ElementBase, StringAttr},
    error::SbmlError,
};

/// A compartment definition: a bounded space species live in.
///
/// The structural attributes in view are the spatial dimensionality, an
/// optional size, the constant flag, and two identifier references: the
/// compartment type and the enclosing (`outside`) compartment. Unit
/// attributes and kinetics are outside this kernel.
#[derive(Debug, Clone, PartialEq)]
pub struct Compartment {
    base: ElementBase,
    compartment_type: StringAttr,
    outside: StringAttr,
    spatial_dimensions: u32,
    size: Option<f64>,
    constant: bool,
}

impl Compartment {
    /// Create a compartment for the given level/version pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the pair is not a recognized combination.
    pub fn new(level: u32, version: u32) -> Result<Self, SbmlError> {
        Ok(Self::from_base(ElementBase::from_level_version(
            level, version,
        )?))
    }

    /// Create a compartment from a namespace context, copying it.
    pub fn from_namespaces(namespaces: &SbmlNamespaces) -> Self {
        Self::from_base(ElementBase::from_namespaces(namespaces))
    }

    fn from_base(base: ElementBase) -> Self {
        Self {
            base,
            compartment_type: StringAttr::default(),
            outside: StringAttr::default(),
            spatial_dimensions: 3,
            size: None,
            constant: true,
        }
    }

    /// The referenced compartment type id, or `""` when unset.
    pub fn compartment_type(&self) -> &str {
        self.compartment_type.get()
    }

    /// Set the compartment type reference; empty input unsets it.
    pub fn set_compartment_type(&mut self, value: &str) -> Result<(), SbmlError> {
        set_sid_ref(&mut self.compartment_type, value)
    }

    /// Whether the compartment type reference is set.
    pub fn is_set_compartment_type(&self) -> bool {
        self.compartment_type.is_set()
    }

    /// Unset the compartment type reference.
    pub fn unset_compartment_type(&mut self) {
        self.compartment_type.unset();
    }

    /// The id of the enclosing compartment, or `""` when unset.
    pub fn outside(&self) -> &str {
        self.outside.get()
    }

    /// Set the enclosing-compartment reference; empty input unsets it.
    pub fn set_outside(&mut self, value: &str) -> Result<(), SbmlError> {
        set_sid_ref(&mut self.outside, value)
    }

    /// Whether the enclosing-compartment reference is set.
    pub fn is_set_outside(&self) -> bool {
        self.outside.is_set()
    }

    /// Unset the enclosing-compartment reference.
    pub fn unset_outside(&mut self) {
        self.outside.unset();
    }

    /// The spatial dimensionality (default 3).
    pub fn spatial_dimensions(&self) -> u32 {
        self.spatial_dimensions
    }

    /// Set the spatial dimensionality.
    pub fn set_spatial_dimensions(&mut self, value: u32) {
        self.spatial_dimensions = value;
    }

    /// The size, if set.
    pub fn size(&self) -> Option<f64> {
        self.size
    }

    /// Set the size.
    pub fn set_size(&mut self, value: f64) {
        self.size = Some(value);
    }

    /// Whether the size is set.
    pub fn is_set_size(&self) -> bool {
        self.size.is_some()
    }

    /// Unset the size.
    pub fn unset_size(&mut self) {
        self.size = None;
    }

    /// Whether the compartment's size is constant over time (default true).
    pub fn constant(&self) -> bool {
        self.constant
    }

    /// Set the constant flag.
    pub fn set_constant(&mut self, value: bool) {
        self.constant = value;
    }
}

impl Element for Compartment {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::Compartment
    }
}

/// Store an SId-valued reference attribute, enforcing the SId grammar on
/// non-empty input.
pub(crate) fn set_sid_ref(slot: &mut StringAttr, value: &str) -> Result<(), SbmlError> {
    if !value.is_empty() && !syntax::is_valid_sid(value) {
        return Err(SbmlError::InvalidIdentifier {
            value: value.to_string(),
        });
    }
    slot.set(value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use float_cmp::approx_eq;

    #[test]
    fn test_defaults() {
        let c = Compartment::new(2, 4).unwrap();
        assert_eq!(c.type_code(), TypeCode::Compartment);
        assert_eq!(c.spatial_dimensions(), 3);
        assert!(c.constant());
        assert!(!c.is_set_size());
        assert!(!c.is_set_outside());
        assert!(!c.is_set_compartment_type());
        assert!(!c.is_set_id());
    }

    #[test]
    fn test_size() {
        let mut c = Compartment::new(2, 4).unwrap();
        c.set_size(1.5);
        assert!(c.is_set_size());
        assert!(approx_eq!(f64, c.size().unwrap(), 1.5));
        c.unset_size();
        assert!(!c.is_set_size());
    }

    #[test]
    fn test_outside_reference() {
        let mut c = Compartment::new(2, 4).unwrap();
        c.set_outside("cytosol").unwrap();
        assert_eq!(c.outside(), "cytosol");
        assert!(c.is_set_outside());

        assert!(c.set_outside("not valid").is_err());
        assert_eq!(c.outside(), "cytosol");

        c.set_outside("").unwrap();
        assert!(!c.is_set_outside());
    }

    #[test]
    fn test_flags_and_dimensions() {
        let mut c = Compartment::new(2, 4).unwrap();
        c.set_spatial_dimensions(2);
        c.set_constant(false);
        assert_eq!(c.spatial_dimensions(), 2);
        assert!(!c.constant());
    }
}
