//! Integration tests for the species type element.
//!
//! These exercise the public accessor contract end to end: fresh-element
//! defaults, both construction pathways, and the unset/empty-string
//! behavior of the identifier and name attributes.

use sbmlkit::{
    base::Element,
    element::SpeciesType,
    namespace::{SbmlNamespaces, XmlNamespaces},
    typecode::TypeCode,
};

#[test]
fn test_create_defaults() {
    let st = SpeciesType::new(2, 4).expect("L2V4 is a recognized combination");

    assert_eq!(st.type_code(), TypeCode::SpeciesType);
    assert_eq!(st.meta_id(), "");
    assert!(st.notes().is_none());
    assert!(st.annotation().is_none());
    assert_eq!(st.id(), "");
    assert_eq!(st.name(), "");
    assert!(!st.is_set_id());
    assert!(!st.is_set_name());
}

#[test]
fn test_create_with_namespaces() {
    let mut xmlns = XmlNamespaces::new();
    xmlns.add("http://www.sbml.org", "testsbml");

    let mut sbmlns = SbmlNamespaces::new(2, 2).expect("L2V2 is a recognized combination");
    sbmlns.add_namespaces(&xmlns);

    let st = SpeciesType::from_namespaces(&sbmlns).expect("species types exist in L2V2");

    assert_eq!(st.type_code(), TypeCode::SpeciesType);
    assert_eq!(st.meta_id(), "");
    assert!(st.notes().is_none());
    assert!(st.annotation().is_none());
    assert_eq!(st.level(), 2);
    assert_eq!(st.version(), 2);
    assert_eq!(st.namespaces().xml_namespaces().len(), 2);
}

#[test]
fn test_element_owns_its_namespace_copy() {
    let mut sbmlns = SbmlNamespaces::new(2, 2).unwrap();
    let st = SpeciesType::from_namespaces(&sbmlns).unwrap();

    let mut extra = XmlNamespaces::new();
    extra.add("http://www.sbml.org", "testsbml");
    sbmlns.add_namespaces(&extra);

    // Mutating the caller's context after construction must not affect
    // the element.
    assert_eq!(st.namespaces().xml_namespaces().len(), 1);
}

#[test]
fn test_drop_absent_element_is_noop() {
    let absent: Option<Box<SpeciesType>> = None;
    drop(absent);
}

#[test]
fn test_set_id() {
    let mut st = SpeciesType::new(2, 4).unwrap();
    let id = "mitochondria";

    st.set_id(id).unwrap();
    assert_eq!(st.id(), id);
    assert!(st.is_set_id());

    // Re-setting the held value is an observable no-op.
    let held = st.id().to_string();
    st.set_id(&held).unwrap();
    assert_eq!(st.id(), id);

    st.set_id("").unwrap();
    assert!(!st.is_set_id());
    assert_eq!(st.id(), "");
}

#[test]
fn test_set_name() {
    let mut st = SpeciesType::new(2, 4).unwrap();
    let name = "My_Favorite_Factory";

    st.set_name(name);
    assert_eq!(st.name(), name);
    assert!(st.is_set_name());

    let held = st.name().to_string();
    st.set_name(&held);
    assert_eq!(st.name(), name);

    st.set_name("");
    assert!(!st.is_set_name());
    assert_eq!(st.name(), "");
}

#[test]
fn test_unset_name() {
    let mut st = SpeciesType::new(2, 4).unwrap();

    st.set_name("name");
    assert_eq!(st.name(), "name");
    assert!(st.is_set_name());

    st.unset_name();
    assert!(!st.is_set_name());
}

#[test]
fn test_meta_id_round_trip() {
    let mut st = SpeciesType::new(2, 4).unwrap();

    st.set_meta_id("meta1").unwrap();
    assert_eq!(st.meta_id(), "meta1");
    assert!(st.is_set_meta_id());

    st.unset_meta_id();
    assert_eq!(st.meta_id(), "");
    assert!(!st.is_set_meta_id());
}

#[test]
fn test_notes_and_annotation_round_trip() {
    let mut st = SpeciesType::new(2, 4).unwrap();

    st.set_notes("<p>a note</p>");
    st.set_annotation("<extra/>");
    assert_eq!(st.notes(), Some("<p>a note</p>"));
    assert_eq!(st.annotation(), Some("<extra/>"));

    st.unset_notes();
    st.unset_annotation();
    assert!(st.notes().is_none());
    assert!(st.annotation().is_none());
}
