use super::atom::Atom;
use super::bond::Bond;
use super::lattice::LatticeParameters;
use super::metadata::{Formula, SpaceGroup};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A complete parsed crystal structure as delivered by the upstream parser.
///
/// This is the root value of the structure wire format: atom sites, bonds,
/// lattice parameters, and descriptive metadata. A record is treated as
/// immutable; loading a new structure replaces the whole value, which is what
/// lets downstream derivations detect change cheaply.
///
/// The `lattice` is optional: a record without lattice parameters is still a
/// valid structure, it simply has no unit cell to draw. All metadata fields are
/// optional pass-through values that derivations never interpret.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureRecord {
    /// The atom sites, in producer order. Atom `index` fields equal positions
    /// in this list.
    pub atoms: Vec<Atom>,
    /// The bonds between atom sites, referenced by list position.
    #[serde(default)]
    pub bonds: Vec<Bond>,
    /// The lattice parameters, when the producer reported a cell.
    #[serde(rename = "lattice_parameters", default)]
    pub lattice: Option<LatticeParameters>,
    /// The chemical formula spellings.
    #[serde(default)]
    pub formula: Option<Formula>,
    /// The space group identification.
    #[serde(default)]
    pub space_group: Option<SpaceGroup>,
    /// The crystal system name (e.g., "cubic"), or "Unknown".
    #[serde(default)]
    pub crystal_system: Option<String>,
    /// The point group symbol, or "Unknown".
    #[serde(default)]
    pub point_group: Option<String>,
}

impl StructureRecord {
    /// Creates a record from its geometric parts, with no metadata.
    ///
    /// # Arguments
    ///
    /// * `atoms` - The atom sites, in producer order.
    /// * `bonds` - The bonds between atom sites.
    /// * `lattice` - The lattice parameters, if a cell is known.
    pub fn new(atoms: Vec<Atom>, bonds: Vec<Bond>, lattice: Option<LatticeParameters>) -> Self {
        Self {
            atoms,
            bonds,
            lattice,
            formula: None,
            space_group: None,
            crystal_system: None,
            point_group: None,
        }
    }

    /// Returns the number of atom sites.
    pub fn num_atoms(&self) -> usize {
        self.atoms.len()
    }

    /// Returns the number of bonds.
    pub fn num_bonds(&self) -> usize {
        self.bonds.len()
    }

    /// Returns the distinct element symbols in first-appearance order.
    ///
    /// This order is what legends and per-element controls display, and the
    /// returned set is what visibility policies rebuild their element maps
    /// from when a structure is loaded.
    pub fn element_symbols(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut symbols = Vec::new();
        for atom in &self.atoms {
            if seen.insert(atom.element.as_str()) {
                symbols.push(atom.element.clone());
            }
        }
        symbols
    }
}
