use serde::{Deserialize, Serialize};

/// Represents a bond between two atom sites in a crystal structure.
///
/// Endpoints are referenced by position into the structure's atom list. The
/// endpoint element symbols are carried redundantly on the bond, exactly as
/// the wire format delivers them; the atom list stays the authoritative
/// source for endpoint attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bond {
    /// Position of the first endpoint in the structure's atom list.
    pub atom1_index: usize,
    /// Position of the second endpoint in the structure's atom list.
    pub atom2_index: usize,
    /// The bond length in Angstroms.
    pub distance: f64,
    /// Element symbol of the first endpoint.
    pub atom1_element: String,
    /// Element symbol of the second endpoint.
    pub atom2_element: String,
}

impl Bond {
    /// Creates a new `Bond` between the atoms at the given list positions.
    ///
    /// # Arguments
    ///
    /// * `atom1_index` - Position of the first endpoint in the atom list.
    /// * `atom2_index` - Position of the second endpoint in the atom list.
    /// * `distance` - The bond length in Angstroms.
    /// * `atom1_element` - Element symbol of the first endpoint.
    /// * `atom2_element` - Element symbol of the second endpoint.
    pub fn new(
        atom1_index: usize,
        atom2_index: usize,
        distance: f64,
        atom1_element: &str,
        atom2_element: &str,
    ) -> Self {
        Self {
            atom1_index,
            atom2_index,
            distance,
            atom1_element: atom1_element.to_string(),
            atom2_element: atom2_element.to_string(),
        }
    }
}
