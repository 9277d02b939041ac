//! The document root.

use log::{debug, info};

use sbmlkit_core::{namespace::SbmlNamespaces, typecode::TypeCode};

use crate::{
    base::{check_level_match, Element, ElementBase},
    config::CheckConfig,
    element::Model,
    error::SbmlError,
    validate::{self, ErrorLog},
};

/// The root of a document tree, owning at most one [`Model`].
///
/// A document fixes the schema level/version for everything beneath it:
/// a model can only be attached if it targets the same combination, and
/// the `create_model` pathway constructs the model from the document's
/// own namespace context.
///
/// # Examples
///
/// ```
/// use sbmlkit::{base::Element, document::SbmlDocument};
///
/// let mut doc = SbmlDocument::new(2, 4)?;
/// let model = doc.create_model();
/// model.set_id("cell")?;
///
/// assert_eq!(doc.level(), 2);
/// assert_eq!(doc.version(), 4);
/// assert!(doc.model().is_some());
/// # Ok::<(), sbmlkit::SbmlError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SbmlDocument {
    base: ElementBase,
    model: Option<Model>,
}

impl SbmlDocument {
    /// Create an empty document for the given level/version pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the pair is not a recognized combination.
    pub fn new(level: u32, version: u32) -> Result<Self, SbmlError> {
        let base = ElementBase::from_level_version(level, version)?;
        debug!(level = level, version = version; "Created document");
        Ok(Self { base, model: None })
    }

    /// Create an empty document from a namespace context, copying it.
    pub fn from_namespaces(namespaces: &SbmlNamespaces) -> Self {
        Self {
            base: ElementBase::from_namespaces(namespaces),
            model: None,
        }
    }

    /// Create an empty document for the most recent recognized
    /// combination.
    pub fn latest() -> Self {
        Self::from_namespaces(&SbmlNamespaces::latest())
    }

    /// Construct a fresh model from this document's namespace context,
    /// attach it, and return it for population.
    ///
    /// Any previously attached model is discarded.
    pub fn create_model(&mut self) -> &mut Model {
        self.model = Some(Model::from_namespaces(self.base.namespaces()));
        self.model.as_mut().expect("Model was just attached")
    }

    /// Attach `model` to this document.
    ///
    /// # Errors
    ///
    /// Returns an error if the model targets a different schema
    /// combination than the document. The previous model, if any, is only
    /// replaced on success.
    pub fn set_model(&mut self, model: Model) -> Result<(), SbmlError> {
        check_level_match(self.level_version(), model.level_version())?;
        self.model = Some(model);
        Ok(())
    }

    /// Borrow the attached model, if any.
    pub fn model(&self) -> Option<&Model> {
        self.model.as_ref()
    }

    /// Mutably borrow the attached model, if any.
    pub fn model_mut(&mut self) -> Option<&mut Model> {
        self.model.as_mut()
    }

    /// Detach and return the model, if any.
    pub fn take_model(&mut self) -> Option<Model> {
        self.model.take()
    }

    /// Run all consistency checks and return the diagnostic log.
    pub fn check_consistency(&self) -> ErrorLog {
        self.check_consistency_with(&CheckConfig::default())
    }

    /// Run the consistency checks enabled by `config` and return the
    /// diagnostic log.
    pub fn check_consistency_with(&self, config: &CheckConfig) -> ErrorLog {
        info!(level = self.level(), version = self.version(); "Checking document consistency");
        let log = validate::check_document(self, config);
        debug!(errors = log.num_errors(), warnings = log.num_warnings(); "Consistency check finished");
        log
    }
}

impl Default for SbmlDocument {
    fn default() -> Self {
        Self::latest()
    }
}

impl Element for SbmlDocument {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn type_code(&self) -> TypeCode {
        TypeCode::Document
    }
}
