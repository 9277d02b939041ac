//! sbmlkit Core Types and Definitions
//!
//! This crate provides the foundational types for the sbmlkit structural
//! document model. It includes:
//!
//! - **Levels**: The schema level/version registry ([`level::LevelVersion`])
//! - **Namespaces**: XML namespace sets and SBML namespace contexts
//!   ([`namespace`] module)
//! - **Type codes**: Enumerated element kind tags ([`typecode::TypeCode`])
//! - **Syntax**: Identifier lexical rules ([`syntax`] module)

pub mod error;
pub mod level;
pub mod namespace;
pub mod syntax;
pub mod typecode;
