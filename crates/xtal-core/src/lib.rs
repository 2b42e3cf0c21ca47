//! # xtalscene Core Library
//!
//! A library for turning parsed crystal structure records (atoms, bonds, lattice
//! parameters) into fully resolved, renderer-agnostic 3D scene descriptions.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`StructureRecord`),
//!   compile-time element attribute tables (colors, covalent radii), the triclinic
//!   unit-cell geometry solver, and I/O utilities for the structure wire format.
//!
//! - **[`engine`]: The Logic Core.** This stateful layer resolves what is visible and
//!   assembles scenes. It includes the `VisibilityPolicy` viewer state, the pure
//!   visibility resolver, the scene assembler, and `ViewerSession` for memoized
//!   recomputation where each derivation re-runs only when its inputs change.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing layer.
//!   It ties the `engine` and `core` together to execute the complete derivation
//!   pipeline in one call, providing a simple entry point for embedders that do not
//!   need a long-lived session.

pub mod core;
pub mod engine;
pub mod workflows;
