//! Robot Framework data vocabulary registries.
//!
//! This module is the “front door” for data-level vocabulary: section names, setting names and
//! control-structure markers (`FOR`, `IF`, `END`, ...).
//!
//! The design goal is to avoid stringly-typed checks scattered across the lexer/parser/validators.
//! Instead, callers work with **stable IDs** (e.g. `SectionId`, `ControlId`) and look up
//! spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The lexer enforces context (which marker is legal where); registries provide spellings and metadata.
//!
//! ## Examples
//! ```rust
//! use robotparse_core::lang::control::{self, ControlId};
//!
//! assert_eq!(control::from_str("ELSE IF"), Some(ControlId::ElseIf));
//! assert_eq!(control::as_str(ControlId::InRange), "IN RANGE");
//! ```

pub mod control;
pub mod registry;
pub mod sections;
pub mod settings;
