//! Ordered XML namespace declaration sets.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for namespace prefixes and URIs.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn intern(value: &str) -> DefaultSymbol {
    let mut interner = INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock");
    interner.get_or_intern(value)
}

fn resolve(symbol: DefaultSymbol) -> String {
    let interner = INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock");
    interner
        .resolve(symbol)
        .expect("Symbol should exist in interner")
        .to_string()
}

/// A single `(prefix, URI)` declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Declaration {
    prefix: DefaultSymbol,
    uri: DefaultSymbol,
}

/// An ordered set of XML namespace declarations.
///
/// Declarations are kept in insertion order. Prefix uniqueness is not
/// enforced: adding a declaration with an existing prefix appends a new
/// entry, and the total declared count is observable through [`len`].
/// Lookups by prefix or URI resolve to the most recent matching
/// declaration.
///
/// Cloning produces an independent set; the backing strings are interned,
/// so a clone copies symbols rather than string data.
///
/// [`len`]: XmlNamespaces::len
///
/// # Examples
///
/// ```
/// use sbmlkit_core::namespace::XmlNamespaces;
///
/// let mut xmlns = XmlNamespaces::new();
/// xmlns.add("http://www.sbml.org", "testsbml");
/// assert_eq!(xmlns.len(), 1);
/// assert_eq!(xmlns.uri_for_prefix("testsbml").as_deref(), Some("http://www.sbml.org"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNamespaces {
    declarations: Vec<Declaration>,
}

impl XmlNamespaces {
    /// Create an empty declaration set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration for `uri` under `prefix`.
    pub fn add(&mut self, uri: &str, prefix: &str) {
        self.declarations.push(Declaration {
            prefix: intern(prefix),
            uri: intern(uri),
        });
    }

    /// Append a declaration for `uri` under the empty (default) prefix.
    pub fn add_default(&mut self, uri: &str) {
        self.add(uri, "");
    }

    /// Append every declaration of `other`, preserving order.
    pub fn extend_from(&mut self, other: &XmlNamespaces) {
        self.declarations.extend_from_slice(&other.declarations);
    }

    /// The number of declarations, duplicates included.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether the set holds no declarations.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// The URI of the declaration at `index`, in insertion order.
    pub fn uri(&self, index: usize) -> Option<String> {
        self.declarations.get(index).map(|d| resolve(d.uri))
    }

    /// The prefix of the declaration at `index`, in insertion order.
    pub fn prefix(&self, index: usize) -> Option<String> {
        self.declarations.get(index).map(|d| resolve(d.prefix))
    }

    /// The URI bound to `prefix`, resolving to the most recent declaration.
    pub fn uri_for_prefix(&self, prefix: &str) -> Option<String> {
        let symbol = intern(prefix);
        self.declarations
            .iter()
            .rev()
            .find(|d| d.prefix == symbol)
            .map(|d| resolve(d.uri))
    }

    /// The prefix bound to `uri`, resolving to the most recent declaration.
    pub fn prefix_for_uri(&self, uri: &str) -> Option<String> {
        let symbol = intern(uri);
        self.declarations
            .iter()
            .rev()
            .find(|d| d.uri == symbol)
            .map(|d| resolve(d.prefix))
    }

    /// Whether any declaration binds `uri`.
    pub fn has_uri(&self, uri: &str) -> bool {
        let symbol = intern(uri);
        self.declarations.iter().any(|d| d.uri == symbol)
    }

    /// Whether any declaration uses `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        let symbol = intern(prefix);
        self.declarations.iter().any(|d| d.prefix == symbol)
    }

    /// Remove the most recent declaration using `prefix`.
    ///
    /// Returns `true` if a declaration was removed.
    pub fn remove(&mut self, prefix: &str) -> bool {
        let symbol = intern(prefix);
        if let Some(pos) = self.declarations.iter().rposition(|d| d.prefix == symbol) {
            self.declarations.remove(pos);
            true
        } else {
            false
        }
    }

    /// Remove every declaration.
    pub fn clear(&mut self) {
        self.declarations.clear();
    }
}

impl fmt::Display for XmlNamespaces {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, decl) in self.declarations.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            let prefix = resolve(decl.prefix);
            if prefix.is_empty() {
                write!(f, "xmlns=\"{}\"", resolve(decl.uri))?;
            } else {
                write!(f, "xmlns:{}=\"{}\"", prefix, resolve(decl.uri))?;
            }
        }
        Ok(())
    }
}
