use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Represents a single atom site in a parsed crystal structure.
///
/// This struct mirrors one entry of the `atoms` array in the structure wire
/// format. It carries both coordinate systems the upstream parser produces:
/// fractional coordinates (fractions of the lattice vectors, useful for
/// crystallographic reasoning) and cartesian coordinates in Angstroms (what a
/// renderer actually draws). The record is immutable once constructed; viewers
/// replace whole structures rather than editing sites in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    /// The position of this atom in the structure's atom list.
    ///
    /// Producers emit indices equal to list positions, so this doubles as a
    /// stable identity for renderer reconciliation across recomputations.
    pub index: usize,
    /// The canonical element symbol (e.g., "Fe", "O", "Si").
    pub element: String,
    /// The coordinates as fractions of the three lattice vectors.
    #[serde(rename = "fractional_coordinates")]
    pub fractional: Point3<f64>,
    /// The absolute coordinates in Angstroms.
    #[serde(rename = "cartesian_coordinates")]
    pub cartesian: Point3<f64>,
    /// The site occupancy in `[0, 1]`; `1.0` for fully occupied sites.
    #[serde(default = "default_occupancy")]
    pub occupancy: f64,
    /// A display color pre-resolved by the producer as a `#RRGGBB` hex string.
    ///
    /// When absent, consumers fall back to the element color table.
    #[serde(default)]
    pub color: Option<String>,
}

fn default_occupancy() -> f64 {
    1.0
}

impl Atom {
    /// Creates a new `Atom` with default values for the optional fields.
    ///
    /// This constructor initializes an atom with the provided identity and
    /// coordinates. Occupancy defaults to `1.0` and no pre-resolved color is
    /// set; both can be modified afterward as needed.
    ///
    /// # Arguments
    ///
    /// * `index` - The position of this atom in the structure's atom list.
    /// * `element` - The canonical element symbol.
    /// * `fractional` - The coordinates as fractions of the lattice vectors.
    /// * `cartesian` - The absolute coordinates in Angstroms.
    pub fn new(
        index: usize,
        element: &str,
        fractional: Point3<f64>,
        cartesian: Point3<f64>,
    ) -> Self {
        Self {
            index,
            element: element.to_string(),
            fractional,
            cartesian,
            occupancy: 1.0,
            color: None,
        }
    }
}
