//! Error codes for the consistency-check diagnostic system.
//!
//! Error codes are organized by family:
//! - `E0xx` - Document structure
//! - `E1xx` - Identifiers
//! - `E2xx` - References
//! - `E3xx` - Element content

use std::fmt;

use serde::Serialize;

/// Error codes for categorizing consistency diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorCode {
    // =========================================================================
    // Document structure (E0xx)
    // =========================================================================
    /// Missing model.
    ///
    /// The document has no model, and the schema combination requires one.
    E001,

    // =========================================================================
    // Identifiers (E1xx)
    // =========================================================================
    /// Missing required identifier.
    ///
    /// An element kind that requires an id was left without one.
    E100,

    /// Duplicate identifier.
    ///
    /// The same id is used by more than one element in the model's shared
    /// identifier scope.
    E101,

    // =========================================================================
    // References (E2xx)
    // =========================================================================
    /// Unknown compartment reference.
    ///
    /// A species references a compartment id that no compartment holds.
    E200,

    /// Unknown species type reference.
    ///
    /// A species references a species type id that no species type holds.
    E201,

    /// Unknown species reference.
    ///
    /// A reaction participant references a species id that no species
    /// holds.
    E202,

    /// Unknown enclosing compartment.
    ///
    /// A compartment's `outside` attribute references an id that no
    /// compartment holds.
    E203,

    /// Compartment containment cycle.
    ///
    /// Following `outside` references from a compartment leads back to it.
    E204,

    // =========================================================================
    // Element content (E3xx)
    // =========================================================================
    /// Reaction without participants.
    ///
    /// A reaction declares neither reactants nor products.
    E300,

    /// Unused species type.
    ///
    /// A species type is defined but never referenced by any species.
    E301,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E200").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Document structure
            ErrorCode::E001 => "E001",
            // Identifiers
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            // References
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
            ErrorCode::E204 => "E204",
            // Element content
            ErrorCode::E300 => "E300",
            ErrorCode::E301 => "E301",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            // Document structure
            ErrorCode::E001 => "missing model",
            // Identifiers
            ErrorCode::E100 => "missing required identifier",
            ErrorCode::E101 => "duplicate identifier",
            // References
            ErrorCode::E200 => "unknown compartment reference",
            ErrorCode::E201 => "unknown species type reference",
            ErrorCode::E202 => "unknown species reference",
            ErrorCode::E203 => "unknown enclosing compartment",
            ErrorCode::E204 => "compartment containment cycle",
            // Element content
            ErrorCode::E300 => "reaction without participants",
            ErrorCode::E301 => "unused species type",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
