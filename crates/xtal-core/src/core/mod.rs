//! # Core Module
//!
//! This module provides the fundamental building blocks for crystal structure
//! visualization in xtalscene, serving as the stateless foundation of the library.
//!
//! ## Overview
//!
//! The core module implements the data structures, lookup tables, and geometric
//! algorithms required to describe a crystal structure and derive the quantities a
//! renderer needs from it. Everything in this layer is a pure value or a pure
//! function over values; viewer state lives one layer up in the engine.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules that handle different aspects
//! of structure representation:
//!
//! - **Structure Representation** ([`models`]) - Data structures for atoms, bonds,
//!   lattice parameters, and complete structure records
//! - **Element Attributes** ([`elements`]) - Compile-time color and covalent radius
//!   tables with documented fallbacks for unknown elements
//! - **Unit-Cell Geometry** ([`geometry`]) - Triclinic basis vector derivation and
//!   the fixed parallelepiped vertex/edge topology
//! - **File I/O** ([`io`]) - Reading structure records from their JSON wire format
//!
//! ## Key Capabilities
//!
//! - **Complete structure representation** matching the upstream parser's payload,
//!   including pass-through metadata (formula, space group, crystal system)
//! - **Deterministic element attribute lookup** with graceful defaults so an exotic
//!   or mislabeled element can never fail a derivation
//! - **Closed-form triclinic geometry** with explicit rejection of parameter sets
//!   that do not describe a realizable cell

pub mod elements;
pub mod geometry;
pub mod io;
pub mod models;
