//! Element attribute tables for display purposes.
//!
//! This module provides the compile-time lookup tables a renderer or legend
//! needs to depict atoms: a display color per element and a covalent radius
//! per element, together with the scale factor that turns covalent radii into
//! on-screen sphere radii. Lookups never fail; unknown or exotic element
//! symbols fall back to documented defaults so a single odd site can never
//! break a derivation. Symbols are matched case-sensitively in their canonical
//! spelling (`"Fe"`, not `"FE"`).

pub mod colors;
pub mod radii;

pub use colors::{DEFAULT_COLOR, color_of};
pub use radii::{DEFAULT_COVALENT_RADIUS, DISPLAY_RADIUS_SCALE, covalent_radius, display_radius};
