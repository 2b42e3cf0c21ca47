//! # Engine Module
//!
//! This module implements the derivation engine of xtalscene, turning
//! structures and viewer choices into renderable scenes and deciding when
//! derived values must be recomputed.
//!
//! ## Overview
//!
//! The engine sits between the stateless core and the public workflows. It
//! owns the one piece of mutable state the library has, the visibility
//! policy, and the machinery that resolves it against a structure: which
//! atoms and bonds are shown, what the assembled primitive list looks like,
//! and which cached derivations are still valid after a change.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules that handle different
//! aspects of the derivation process:
//!
//! - **Viewer State** ([`policy`]) - Category and per-element visibility
//!   toggles with value-replacement semantics
//! - **Visibility Resolution** ([`visibility`]) - Pure conjunction rules from
//!   policy to per-primitive verdicts
//! - **Scene Description** ([`scene`]) - The renderer-agnostic primitive
//!   types and their styling constants
//! - **Scene Assembly** ([`assembler`]) - Flattening a structure and its
//!   verdicts into the primitive list
//! - **Memoized Sessions** ([`session`]) - A stateful facade that re-derives
//!   each piece only when its actual inputs change
//!
//! ## Key Capabilities
//!
//! - **Conjunctive visibility** combining whole-category and per-element
//!   toggles, with bonds independent of the atom category
//! - **Total derivations** that degrade on malformed input (missing lattice,
//!   out-of-range bond references) instead of failing
//! - **Stable primitive keys** so incremental renderers can reconcile
//!   successive scenes
//! - **Input-keyed memoization** where toggling one element never re-derives
//!   unit-cell geometry

pub mod assembler;
pub(crate) mod memo;
pub mod policy;
pub mod scene;
pub mod session;
pub mod visibility;
