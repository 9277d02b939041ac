//! Namespace contexts for document-model elements.
//!
//! This module provides the two namespace types of the kernel:
//!
//! - [`XmlNamespaces`] - an ordered set of `(prefix, URI)` declarations
//! - [`SbmlNamespaces`] - a level/version pair plus its declaration set,
//!   the context object elements are constructed from
//!
//! Elements own a copy of the context they were constructed from, never a
//! shared reference to it. Mutating a context object after construction
//! does not affect any element built from it. Declarations are backed by
//! a global string interner so copies stay cheap.

mod sbml;
mod xml;

pub use sbml::SbmlNamespaces;
pub use xml::XmlNamespaces;
