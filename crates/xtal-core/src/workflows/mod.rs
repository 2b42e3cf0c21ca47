//! # Workflows Module
//!
//! This module provides the high-level entry points that orchestrate the
//! complete scene derivation pipeline in xtalscene.
//!
//! ## Overview
//!
//! Workflows are the top-level API for users of xtalscene. Each workflow ties
//! the core and engine layers together end to end: unit-cell geometry,
//! visibility resolution, and scene assembly in one synchronous call, with
//! progress visible through structured logging. Embedders that recompute
//! interactively should hold an [`crate::engine::session::ViewerSession`]
//! instead; the workflows re-derive everything on every call.
//!
//! ## Architecture
//!
//! - **Derivation Workflow** ([`derive`]) - Complete structure-to-scene
//!   derivation for a given visibility policy.

pub mod derive;
