//! # Core Models Module
//!
//! This module contains the fundamental data structures used to represent parsed
//! crystal structures in xtalscene, providing the foundation for all derivation
//! operations.
//!
//! ## Overview
//!
//! The models module defines the core abstractions for representing a crystal
//! structure as delivered by an upstream parser: atom sites, bonds, lattice
//! parameters, and descriptive metadata. These models are designed to:
//!
//! - **Mirror the wire format** - Field names and nesting match the JSON payload
//!   produced by the structure-parsing backend, so records deserialize directly
//! - **Stay immutable in use** - A record is constructed once and replaced
//!   wholesale; derivations never mutate it
//! - **Preserve stable identity** - Atom indices equal their positions in the atom
//!   list, giving renderers a reconciliation key that survives recomputation
//!
//! ## Key Components
//!
//! - [`atom`] - Individual atom sites with fractional/cartesian coordinates,
//!   occupancy, and an optional pre-resolved display color
//! - [`bond`] - Bonds between atom sites, referenced by position
//! - [`lattice`] - The six lattice parameters plus cell volume
//! - [`metadata`] - Pass-through descriptive metadata (formula, space group)
//! - [`structure`] - The complete [`structure::StructureRecord`] tying it together

pub mod atom;
pub mod bond;
pub mod lattice;
pub mod metadata;
pub mod structure;
