//! Consistency validation for assembled documents.
//!
//! This module provides the diagnostic system for structural consistency
//! checks:
//! - Error codes for documentation and searchability
//! - Severity levels distinguishing violations from advisories
//! - A diagnostic log collecting results in document order
//!
//! Checks run over a fully assembled document and never mutate it. The
//! rules cover what construction alone cannot guarantee: identifiers that
//! were never set or set twice, references to ids no element holds,
//! compartment containment cycles, and element content that is legal to
//! build but meaningless to keep.
//!
//! # Example
//!
//! ```
//! # use sbmlkit::{base::Element, document::SbmlDocument};
//! let mut doc = SbmlDocument::new(2, 4)?;
//! let model = doc.create_model();
//! let species = model.create_species();
//! species.set_id("glucose")?;
//! species.set_compartment("cytosol")?;
//!
//! // `cytosol` is referenced but never defined.
//! let log = doc.check_consistency();
//! assert!(log.has_errors());
//! # Ok::<(), sbmlkit::SbmlError>(())
//! ```

mod code;
mod diagnostic;
mod error_log;
mod severity;

pub use code::ErrorCode;
pub use diagnostic::Diagnostic;
pub use error_log::ErrorLog;
pub use severity::Severity;

use std::collections::HashSet;

use indexmap::IndexMap;
use log::trace;

use sbmlkit_core::typecode::TypeCode;

use crate::{
    base::Element,
    config::CheckConfig,
    document::SbmlDocument,
    element::{Compartment, Model},
};

/// Run every enabled validator family over `document`.
pub(crate) fn check_document(document: &SbmlDocument, config: &CheckConfig) -> ErrorLog {
    let mut log = ErrorLog::new();

    if config.document() && document.model().is_none() {
        let lv = document.level_version();
        // Level 3 Version 2 made the model element optional.
        if !(lv.level() == 3 && lv.version() == 2) {
            record(
                &mut log,
                Diagnostic::error("document has no model")
                    .with_code(ErrorCode::E001)
                    .with_element("sbml"),
            );
        }
    }

    if let Some(model) = document.model() {
        if config.identifiers() {
            check_identifiers(model, &mut log);
        }
        if config.references() {
            check_references(model, &mut log);
        }
        if config.content() {
            check_content(model, &mut log);
        }
    }

    log
}

fn record(log: &mut ErrorLog, diag: Diagnostic) {
    trace!(diag:?; "Recorded diagnostic");
    log.push(diag);
}

/// Required-id and duplicate-id checks over the model's shared
/// identifier scope, visited in schema document order.
fn check_identifiers(model: &Model, log: &mut ErrorLog) {
    let mut seen: IndexMap<String, String> = IndexMap::new();
    if model.is_set_id() {
        seen.insert(model.id().to_string(), "model".to_string());
    }

    for (index, st) in model.species_types().iter().enumerate() {
        let path = format!("model/speciesType[{index}]");
        visit_id(TypeCode::SpeciesType, st.is_set_id(), st.id(), path, &mut seen, log);
    }
    for (index, c) in model.compartments().iter().enumerate() {
        let path = format!("model/compartment[{index}]");
        visit_id(TypeCode::Compartment, c.is_set_id(), c.id(), path, &mut seen, log);
    }
    for (index, s) in model.species().iter().enumerate() {
        let path = format!("model/species[{index}]");
        visit_id(TypeCode::Species, s.is_set_id(), s.id(), path, &mut seen, log);
    }
    for (index, r) in model.reactions().iter().enumerate() {
        let path = format!("model/reaction[{index}]");
        visit_id(TypeCode::Reaction, r.is_set_id(), r.id(), path, &mut seen, log);
    }
}

fn visit_id(
    kind: TypeCode,
    is_set: bool,
    id: &str,
    path: String,
    seen: &mut IndexMap<String, String>,
    log: &mut ErrorLog,
) {
    if !is_set {
        record(
            log,
            Diagnostic::error(format!("{kind} is missing its required id"))
                .with_code(ErrorCode::E100)
                .with_element(path),
        );
        return;
    }
    if let Some(first) = seen.get(id) {
        record(
            log,
            Diagnostic::error(format!(
                "duplicate identifier `{id}` (first used at {first})"
            ))
            .with_code(ErrorCode::E101)
            .with_element(path),
        );
    } else {
        seen.insert(id.to_string(), path);
    }
}

/// Dangling-reference and containment-cycle checks.
fn check_references(model: &Model, log: &mut ErrorLog) {
    for (index, species) in model.species().iter().enumerate() {
        let path = format!("model/species[{index}]");
        if species.is_set_compartment()
            && model.compartment_by_id(species.compartment()).is_none()
        {
            record(
                log,
                Diagnostic::error(format!(
                    "unknown compartment `{}` referenced by {}",
                    species.compartment(),
                    element_label(TypeCode::Species, species.is_set_id(), species.id()),
                ))
                .with_code(ErrorCode::E200)
                .with_element(path.clone()),
            );
        }
        if species.is_set_species_type()
            && model.species_type_by_id(species.species_type()).is_none()
        {
            record(
                log,
                Diagnostic::error(format!(
                    "unknown species type `{}` referenced by {}",
                    species.species_type(),
                    element_label(TypeCode::Species, species.is_set_id(), species.id()),
                ))
                .with_code(ErrorCode::E201)
                .with_element(path),
            );
        }
    }

    for (r_index, reaction) in model.reactions().iter().enumerate() {
        let groups = [
            ("reactant", reaction.reactants()),
            ("product", reaction.products()),
            ("modifier", reaction.modifiers()),
        ];
        for (group, references) in groups {
            for (index, reference) in references.iter().enumerate() {
                let path = format!("model/reaction[{r_index}]/{group}[{index}]");
                if !reference.is_set_species() {
                    record(
                        log,
                        Diagnostic::error(format!("{group} reference has no species"))
                            .with_code(ErrorCode::E202)
                            .with_element(path),
                    );
                } else if model.species_by_id(reference.species()).is_none() {
                    record(
                        log,
                        Diagnostic::error(format!(
                            "unknown species `{}` referenced as {group}",
                            reference.species()
                        ))
                        .with_code(ErrorCode::E202)
                        .with_element(path),
                    );
                }
            }
        }
    }

    for (index, compartment) in model.compartments().iter().enumerate() {
        if !compartment.is_set_outside() {
            continue;
        }
        let path = format!("model/compartment[{index}]");
        if model.compartment_by_id(compartment.outside()).is_none() {
            record(
                log,
                Diagnostic::error(format!(
                    "unknown enclosing compartment `{}`",
                    compartment.outside()
                ))
                .with_code(ErrorCode::E203)
                .with_element(path),
            );
        } else if has_outside_cycle(model, compartment) {
            record(
                log,
                Diagnostic::error(format!(
                    "{} is contained in itself through its `outside` chain",
                    element_label(
                        TypeCode::Compartment,
                        compartment.is_set_id(),
                        compartment.id()
                    ),
                ))
                .with_code(ErrorCode::E204)
                .with_element(path),
            );
        }
    }
}

/// Whether following `outside` references from `start` leads back to it.
fn has_outside_cycle(model: &Model, start: &Compartment) -> bool {
    if !start.is_set_id() {
        return false;
    }
    let mut current = start.outside();
    // The walk is bounded: a chain longer than the compartment count
    // must have revisited somewhere other than `start`.
    for _ in 0..=model.num_compartments() {
        let Some(next) = model.compartment_by_id(current) else {
            return false;
        };
        if next.id() == start.id() {
            return true;
        }
        if !next.is_set_outside() {
            return false;
        }
        current = next.outside();
    }
    false
}

/// Element-content advisories and participant checks.
fn check_content(model: &Model, log: &mut ErrorLog) {
    for (index, reaction) in model.reactions().iter().enumerate() {
        if reaction.num_reactants() == 0 && reaction.num_products() == 0 {
            record(
                log,
                Diagnostic::error(format!(
                    "{} has neither reactants nor products",
                    element_label(TypeCode::Reaction, reaction.is_set_id(), reaction.id()),
                ))
                .with_code(ErrorCode::E300)
                .with_element(format!("model/reaction[{index}]")),
            );
        }
    }

    if model.num_species_types() > 0 {
        let referenced: HashSet<&str> = model
            .species()
            .iter()
            .filter(|s| s.is_set_species_type())
            .map(|s| s.species_type())
            .collect();
        for (index, st) in model.species_types().iter().enumerate() {
            if st.is_set_id() && !referenced.contains(st.id()) {
                record(
                    log,
                    Diagnostic::warning(format!(
                        "species type `{}` is never referenced by a species",
                        st.id()
                    ))
                    .with_code(ErrorCode::E301)
                    .with_element(format!("model/speciesType[{index}]")),
                );
            }
        }
    }
}

fn element_label(kind: TypeCode, is_set: bool, id: &str) -> String {
    if is_set {
        format!("{kind} `{id}`")
    } else {
        kind.to_string()
    }
}
