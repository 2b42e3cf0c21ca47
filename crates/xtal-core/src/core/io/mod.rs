//! Provides input/output functionality for structure records.
//!
//! This module contains the trait-based interface for reading and writing
//! parsed crystal structures, together with the implementation for the JSON
//! wire format that structure-parsing backends emit. Errors are typed and
//! carry enough context to diagnose a malformed record; nothing in this
//! module panics on bad input.

pub mod json;
pub mod traits;
