//! Element base storage and the common element contract.
//!
//! Every element kind in the model embeds an [`ElementBase`]: the owned
//! storage for its namespace context, meta-identifier, notes, annotation,
//! identifier, and name. The [`Element`] trait is the uniform contract
//! over that storage, providing the `get`/`set`/`is_set`/`unset`
//! accessor quadruple for each optional attribute.
//!
//! # Unset versus empty
//!
//! Optional string attributes track "unset" explicitly rather than
//! storing an empty string: setting an attribute to `""` is equivalent to
//! unsetting it, and readers of an unset attribute observe `""`. The
//! [`StringAttr`] slot encodes this as a tagged optional.

use sbmlkit_core::{
    level::LevelVersion,
    namespace::SbmlNamespaces,
    syntax,
    typecode::TypeCode,
};

use crate::error::SbmlError;

/// An optional string attribute with explicit unset tracking.
///
/// # Examples
///
/// ```
/// use sbmlkit::base::StringAttr;
///
/// let mut attr = StringAttr::default();
/// assert!(!attr.is_set());
/// assert_eq!(attr.get(), "");
///
/// attr.set("mitochondria");
/// assert!(attr.is_set());
///
/// attr.set("");
/// assert!(!attr.is_set());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringAttr(Option<String>);

impl StringAttr {
    /// The stored value, or `""` when unset.
    pub fn get(&self) -> &str {
        self.0.as_deref().unwrap_or("")
    }

    /// Store `value`, treating the empty string as an unset request.
    ///
    /// Re-setting the currently held value is an observable no-op.
    pub fn set(&mut self, value: &str) {
        if value.is_empty() {
            self.0 = None;
        } else if self.0.as_deref() != Some(value) {
            self.0 = Some(value.to_string());
        }
    }

    /// Whether a non-empty value is currently stored.
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// Clear the slot regardless of its prior state.
    pub fn unset(&mut self) {
        self.0 = None;
    }
}

/// Owned storage shared by every element kind.
///
/// An `ElementBase` is created through one of the two construction
/// pathways - explicit level/version integers, or a pre-built namespace
/// context - and is immutable in its schema coordinates afterwards. The
/// namespace context is copied in at construction; the caller's context
/// object and the element never share mutable state.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementBase {
    namespaces: SbmlNamespaces,
    meta_id: StringAttr,
    notes: Option<String>,
    annotation: Option<String>,
    id: StringAttr,
    name: StringAttr,
}

impl ElementBase {
    /// Construct from explicit level/version integers.
    ///
    /// # Errors
    ///
    /// Returns an error if the pair is not a recognized combination.
    pub fn from_level_version(level: u32, version: u32) -> Result<Self, SbmlError> {
        Ok(Self::empty(SbmlNamespaces::new(level, version)?))
    }

    /// Construct from a namespace context, copying it.
    pub fn from_namespaces(namespaces: &SbmlNamespaces) -> Self {
        Self::empty(namespaces.clone())
    }

    fn empty(namespaces: SbmlNamespaces) -> Self {
        Self {
            namespaces,
            meta_id: StringAttr::default(),
            notes: None,
            annotation: None,
            id: StringAttr::default(),
            name: StringAttr::default(),
        }
    }

    /// The schema level fixed at construction.
    pub fn level(&self) -> u32 {
        self.namespaces.level()
    }

    /// The schema version fixed at construction.
    pub fn version(&self) -> u32 {
        self.namespaces.version()
    }

    /// The level/version pair fixed at construction.
    pub fn level_version(&self) -> LevelVersion {
        self.namespaces.level_version()
    }

    /// Borrow the owned namespace context.
    pub fn namespaces(&self) -> &SbmlNamespaces {
        &self.namespaces
    }

    /// The identifier, or `""` when unset.
    pub fn id(&self) -> &str {
        self.id.get()
    }

    /// Set the identifier.
    ///
    /// An empty `value` unsets the identifier. A non-empty value must
    /// satisfy the SId grammar; invalid values are rejected and leave the
    /// stored state untouched.
    pub fn set_id(&mut self, value: &str) -> Result<(), SbmlError> {
        if !value.is_empty() && !syntax::is_valid_sid(value) {
            return Err(SbmlError::InvalidIdentifier {
                value: value.to_string(),
            });
        }
        self.id.set(value);
        Ok(())
    }

    /// Whether the identifier is set.
    pub fn is_set_id(&self) -> bool {
        self.id.is_set()
    }

    /// Unset the identifier.
    pub fn unset_id(&mut self) {
        self.id.unset();
    }

    /// The name, or `""` when unset.
    pub fn name(&self) -> &str {
        self.name.get()
    }

    /// Set the name. An empty `value` unsets it; names carry no lexical
    /// restriction otherwise.
    pub fn set_name(&mut self, value: &str) {
        self.name.set(value);
    }

    /// Whether the name is set.
    pub fn is_set_name(&self) -> bool {
        self.name.is_set()
    }

    /// Unset the name.
    pub fn unset_name(&mut self) {
        self.name.unset();
    }

    /// The meta-identifier, or `""` when unset.
    pub fn meta_id(&self) -> &str {
        self.meta_id.get()
    }

    /// Set the meta-identifier.
    ///
    /// An empty `value` unsets it. A non-empty value must satisfy the XML
    /// ID production; invalid values are rejected and leave the stored
    /// state untouched.
    pub fn set_meta_id(&mut self, value: &str) -> Result<(), SbmlError> {
        if !value.is_empty() && !syntax::is_valid_meta_id(value) {
            return Err(SbmlError::InvalidMetaId {
                value: value.to_string(),
            });
        }
        self.meta_id.set(value);
        Ok(())
    }

    /// Whether the meta-identifier is set.
    pub fn is_set_meta_id(&self) -> bool {
        self.meta_id.is_set()
    }

    /// Unset the meta-identifier.
    pub fn unset_meta_id(&mut self) {
        self.meta_id.unset();
    }

    /// The notes block, if present.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Set the notes block. Empty content clears it.
    pub fn set_notes(&mut self, content: &str) {
        self.notes = if content.is_empty() {
            None
        } else {
            Some(content.to_string())
        };
    }

    /// Whether a notes block is present.
    pub fn is_set_notes(&self) -> bool {
        self.notes.is_some()
    }

    /// Remove the notes block.
    pub fn unset_notes(&mut self) {
        self.notes = None;
    }

    /// The annotation block, if present.
    pub fn annotation(&self) -> Option<&str> {
        self.annotation.as_deref()
    }

    /// Set the annotation block. Empty content clears it.
    pub fn set_annotation(&mut self, content: &str) {
        self.annotation = if content.is_empty() {
            None
        } else {
            Some(content.to_string())
        };
    }

    /// Whether an annotation block is present.
    pub fn is_set_annotation(&self) -> bool {
        self.annotation.is_some()
    }

    /// Remove the annotation block.
    pub fn unset_annotation(&mut self) {
        self.annotation = None;
    }
}

/// The common structural contract all model elements satisfy.
///
/// Implementors supply access to their [`ElementBase`] and their
/// immutable kind tag; the attribute accessors are provided on top of
/// that and behave identically for every element kind.
pub trait Element {
    /// Borrow the element's base storage.
    fn base(&self) -> &ElementBase;

    /// Mutably borrow the element's base storage.
    fn base_mut(&mut self) -> &mut ElementBase;

    /// The immutable kind tag, fixed at construction.
    fn type_code(&self) -> TypeCode;

    /// The identifier, or `""` when unset.
    fn id(&self) -> &str {
        self.base().id()
    }

    /// Set the identifier; empty input unsets it.
    fn set_id(&mut self, value: &str) -> Result<(), SbmlError> {
        self.base_mut().set_id(value)
    }

    /// Whether the identifier is set.
    fn is_set_id(&self) -> bool {
        self.base().is_set_id()
    }

    /// Unset the identifier.
    fn unset_id(&mut self) {
        self.base_mut().unset_id();
    }

    /// The name, or `""` when unset.
    fn name(&self) -> &str {
        self.base().name()
    }

    /// Set the name; empty input unsets it.
    fn set_name(&mut self, value: &str) {
        self.base_mut().set_name(value);
    }

    /// Whether the name is set.
    fn is_set_name(&self) -> bool {
        self.base().is_set_name()
    }

    /// Unset the name.
    fn unset_name(&mut self) {
        self.base_mut().unset_name();
    }

    /// The meta-identifier, or `""` when unset.
    fn meta_id(&self) -> &str {
        self.base().meta_id()
    }

    /// Set the meta-identifier; empty input unsets it.
    fn set_meta_id(&mut self, value: &str) -> Result<(), SbmlError> {
        self.base_mut().set_meta_id(value)
    }

    /// Whether the meta-identifier is set.
    fn is_set_meta_id(&self) -> bool {
        self.base().is_set_meta_id()
    }

    /// Unset the meta-identifier.
    fn unset_meta_id(&mut self) {
        self.base_mut().unset_meta_id();
    }

    /// The notes block, if present.
    fn notes(&self) -> Option<&str> {
        self.base().notes()
    }

    /// Set the notes block; empty content clears it.
    fn set_notes(&mut self, content: &str) {
        self.base_mut().set_notes(content);
    }

    /// Whether a notes block is present.
    fn is_set_notes(&self) -> bool {
        self.base().is_set_notes()
    }

    /// Remove the notes block.
    fn unset_notes(&mut self) {
        self.base_mut().unset_notes();
    }

    /// The annotation block, if present.
    fn annotation(&self) -> Option<&str> {
        self.base().annotation()
    }

    /// Set the annotation block; empty content clears it.
    fn set_annotation(&mut self, content: &str) {
        self.base_mut().set_annotation(content);
    }

    /// Whether an annotation block is present.
    fn is_set_annotation(&self) -> bool {
        self.base().is_set_annotation()
    }

    /// Remove the annotation block.
    fn unset_annotation(&mut self) {
        self.base_mut().unset_annotation();
    }

    /// The schema level fixed at construction.
    fn level(&self) -> u32 {
        self.base().level()
    }

    /// The schema version fixed at construction.
    fn version(&self) -> u32 {
        self.base().version()
    }

    /// The level/version pair fixed at construction.
    fn level_version(&self) -> LevelVersion {
        self.base().level_version()
    }

    /// Borrow the element's owned namespace context.
    fn namespaces(&self) -> &SbmlNamespaces {
        self.base().namespaces()
    }
}

/// Check that a child element targets the same schema combination as its
/// container.
pub(crate) fn check_level_match(
    expected: LevelVersion,
    found: LevelVersion,
) -> Result<(), SbmlError> {
    if expected == found {
        Ok(())
    } else {
        Err(SbmlError::LevelMismatch { expected, found })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn test_string_attr_defaults_unset() {
        let attr = StringAttr::default();
        assert!(!attr.is_set());
        assert_eq!(attr.get(), "");
    }

    #[test]
    fn test_string_attr_set_and_unset() {
        let mut attr = StringAttr::default();
        attr.set("value");
        assert!(attr.is_set());
        assert_eq!(attr.get(), "value");

        attr.set("");
        assert!(!attr.is_set());
        assert_eq!(attr.get(), "");

        attr.set("value");
        attr.unset();
        assert!(!attr.is_set());
    }

    #[test]
    fn test_string_attr_reset_same_value() {
        let mut attr = StringAttr::default();
        attr.set("value");
        attr.set("value");
        assert!(attr.is_set());
        assert_eq!(attr.get(), "value");
    }

    #[test]
    fn test_base_fresh_state() {
        let base = ElementBase::from_level_version(2, 4).unwrap();
        assert_eq!(base.level(), 2);
        assert_eq!(base.version(), 4);
        assert_eq!(base.id(), "");
        assert_eq!(base.name(), "");
        assert_eq!(base.meta_id(), "");
        assert!(!base.is_set_id());
        assert!(!base.is_set_name());
        assert!(!base.is_set_meta_id());
        assert!(base.notes().is_none());
        assert!(base.annotation().is_none());
    }

    #[test]
    fn test_base_rejects_unknown_pair() {
        assert!(ElementBase::from_level_version(2, 6).is_err());
    }

    #[test]
    fn test_set_id_validates_syntax() {
        let mut base = ElementBase::from_level_version(2, 4).unwrap();
        base.set_id("mitochondria").unwrap();
        assert_eq!(base.id(), "mitochondria");

        let err = base.set_id("1bad").unwrap_err();
        assert_eq!(
            err,
            SbmlError::InvalidIdentifier {
                value: "1bad".into()
            }
        );
        // A rejected value leaves the stored state untouched.
        assert_eq!(base.id(), "mitochondria");
        assert!(base.is_set_id());
    }

    #[test]
    fn test_set_meta_id_validates_syntax() {
        let mut base = ElementBase::from_level_version(2, 4).unwrap();
        base.set_meta_id("meta-1.2").unwrap();
        assert_eq!(base.meta_id(), "meta-1.2");

        assert!(base.set_meta_id("2bad").is_err());
        assert_eq!(base.meta_id(), "meta-1.2");

        base.set_meta_id("").unwrap();
        assert!(!base.is_set_meta_id());
    }

    #[test]
    fn test_notes_and_annotation() {
        let mut base = ElementBase::from_level_version(2, 4).unwrap();
        base.set_notes("<p>notes</p>");
        base.set_annotation("<data/>");
        assert_eq!(base.notes(), Some("<p>notes</p>"));
        assert_eq!(base.annotation(), Some("<data/>"));

        base.set_notes("");
        assert!(!base.is_set_notes());
        base.unset_annotation();
        assert!(!base.is_set_annotation());
    }

    #[test]
    fn test_from_namespaces_copies_context() {
        let mut sbmlns = SbmlNamespaces::new(2, 2).unwrap();
        let base = ElementBase::from_namespaces(&sbmlns);

        let mut extra = sbmlkit_core::namespace::XmlNamespaces::new();
        extra.add("http://www.sbml.org", "testsbml");
        sbmlns.add_namespaces(&extra);

        // The element's copy is unaffected by later context mutation.
        assert_eq!(base.namespaces().xml_namespaces().len(), 1);
        assert_eq!(sbmlns.xml_namespaces().len(), 2);
    }

    proptest! {
        #[test]
        fn prop_set_get_round_trip(s in "[A-Za-z_][A-Za-z0-9_]{0,20}") {
            let mut attr = StringAttr::default();
            attr.set(&s);
            prop_assert_eq!(attr.get(), s.as_str());
            prop_assert!(attr.is_set());
        }

        #[test]
        fn prop_set_empty_always_unsets(s in "[A-Za-z0-9_]{0,20}") {
            let mut attr = StringAttr::default();
            attr.set(&s);
            attr.set("");
            prop_assert!(!attr.is_set());
            prop_assert_eq!(attr.get(), "");
        }

        #[test]
        fn prop_reset_current_value_is_noop(s in "[A-Za-z_][A-Za-z0-9_]{0,20}") {
            let mut attr = StringAttr::default();
            attr.set(&s);
            let before = attr.clone();
            let held = attr.get().to_string();
            attr.set(&held);
            prop_assert_eq!(attr, before);
        }
    }
}
