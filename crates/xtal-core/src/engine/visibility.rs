use super::policy::VisibilityPolicy;
use crate::core::models::structure::StructureRecord;
use tracing::warn;

/// Per-primitive visibility verdicts for one structure under one policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityMask {
    /// One verdict per atom, in atom-list order.
    pub atoms: Vec<bool>,
    /// One verdict per bond, in bond-list order.
    pub bonds: Vec<bool>,
    /// Whether the unit-cell wireframe is shown.
    pub unit_cell: bool,
}

impl VisibilityMask {
    /// Resolves all three verdict sets in one pass.
    pub fn resolve(structure: &StructureRecord, policy: &VisibilityPolicy) -> Self {
        Self {
            atoms: atom_mask(structure, policy),
            bonds: bond_mask(structure, policy),
            unit_cell: unit_cell_visible(structure, policy),
        }
    }
}

/// Resolves atom visibility.
///
/// An atom is shown iff the atoms category is on and its element's flag is
/// on. Elements missing from the policy read as hidden.
pub fn atom_mask(structure: &StructureRecord, policy: &VisibilityPolicy) -> Vec<bool> {
    let category = policy.categories().atoms;
    structure
        .atoms
        .iter()
        .map(|atom| category && policy.is_element_visible(&atom.element))
        .collect()
}

/// Resolves bond visibility.
///
/// A bond is shown iff the bonds category is on and both endpoint elements
/// are visible, with the elements resolved through the atoms the bond
/// references. The atoms category is deliberately not consulted: hiding the
/// spheres while keeping the bond skeleton is a valid display state. A bond
/// whose endpoint index falls outside the atom list is hidden and reported.
pub fn bond_mask(structure: &StructureRecord, policy: &VisibilityPolicy) -> Vec<bool> {
    let category = policy.categories().bonds;
    structure
        .bonds
        .iter()
        .enumerate()
        .map(|(position, bond)| {
            let (Some(atom1), Some(atom2)) = (
                structure.atoms.get(bond.atom1_index),
                structure.atoms.get(bond.atom2_index),
            ) else {
                warn!(
                    position,
                    atom1_index = bond.atom1_index,
                    atom2_index = bond.atom2_index,
                    atom_count = structure.atoms.len(),
                    "Bond references an atom outside the structure; hiding it."
                );
                return false;
            };
            category
                && policy.is_element_visible(&atom1.element)
                && policy.is_element_visible(&atom2.element)
        })
        .collect()
}

/// Resolves unit-cell visibility: the category must be on and the structure
/// must actually carry lattice parameters.
pub fn unit_cell_visible(structure: &StructureRecord, policy: &VisibilityPolicy) -> bool {
    policy.categories().unit_cell && structure.lattice.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::models::bond::Bond;
    use crate::core::models::lattice::LatticeParameters;
    use crate::engine::policy::ViewCategory;
    use nalgebra::Point3;

    fn atom(index: usize, element: &str) -> Atom {
        Atom::new(index, element, Point3::origin(), Point3::origin())
    }

    fn fe_o_structure() -> StructureRecord {
        StructureRecord::new(
            vec![atom(0, "Fe"), atom(1, "O")],
            vec![Bond::new(0, 1, 2.0, "Fe", "O")],
            Some(LatticeParameters::cubic(5.0)),
        )
    }

    fn policy_for(structure: &StructureRecord) -> VisibilityPolicy {
        let mut policy = VisibilityPolicy::new();
        policy.rebuild_elements(structure.element_symbols());
        policy
    }

    #[test]
    fn atom_is_visible_only_when_category_and_element_agree() {
        let structure = fe_o_structure();

        for (category, element, expected) in [
            (true, true, true),
            (true, false, false),
            (false, true, false),
            (false, false, false),
        ] {
            let mut policy = policy_for(&structure);
            policy.set_category(ViewCategory::Atoms, category);
            policy.set_element("Fe", element);
            let mask = atom_mask(&structure, &policy);
            assert_eq!(mask[0], expected, "category={category} element={element}");
        }
    }

    #[test]
    fn bond_hides_when_either_endpoint_element_is_hidden() {
        let structure = fe_o_structure();

        let mut policy = policy_for(&structure);
        policy.set_element("O", false);
        assert_eq!(bond_mask(&structure, &policy), vec![false]);

        let mut policy = policy_for(&structure);
        policy.set_element("Fe", false);
        assert_eq!(bond_mask(&structure, &policy), vec![false]);
    }

    #[test]
    fn bond_visibility_ignores_the_atoms_category() {
        let structure = fe_o_structure();
        let mut policy = policy_for(&structure);
        policy.set_category(ViewCategory::Atoms, false);

        assert_eq!(atom_mask(&structure, &policy), vec![false, false]);
        assert_eq!(bond_mask(&structure, &policy), vec![true]);
    }

    #[test]
    fn bonds_category_hides_all_bonds() {
        let structure = fe_o_structure();
        let mut policy = policy_for(&structure);
        policy.set_category(ViewCategory::Bonds, false);
        assert_eq!(bond_mask(&structure, &policy), vec![false]);
    }

    #[test]
    fn bond_elements_resolve_through_the_referenced_atoms() {
        let mut structure = fe_o_structure();
        // Mislabeled bond strings; the atom list stays authoritative.
        structure.bonds[0].atom1_element = "Na".to_string();
        structure.bonds[0].atom2_element = "Cl".to_string();

        let mut policy = policy_for(&structure);
        assert_eq!(bond_mask(&structure, &policy), vec![true]);

        policy.set_element("O", false);
        assert_eq!(bond_mask(&structure, &policy), vec![false]);
    }

    #[test]
    fn out_of_range_bond_is_hidden_not_fatal() {
        let mut structure = fe_o_structure();
        structure.bonds.push(Bond::new(0, 99, 1.5, "Fe", "O"));

        let policy = policy_for(&structure);
        assert_eq!(bond_mask(&structure, &policy), vec![true, false]);
    }

    #[test]
    fn stale_element_symbols_read_as_hidden() {
        let structure = fe_o_structure();
        let mut policy = VisibilityPolicy::new();
        policy.rebuild_elements(["H", "C"]);

        assert_eq!(atom_mask(&structure, &policy), vec![false, false]);
        assert_eq!(bond_mask(&structure, &policy), vec![false]);
    }

    #[test]
    fn unit_cell_needs_both_category_and_lattice() {
        let with_lattice = fe_o_structure();
        let without_lattice = StructureRecord::new(vec![atom(0, "Fe")], vec![], None);
        let mut policy = policy_for(&with_lattice);

        assert!(unit_cell_visible(&with_lattice, &policy));
        assert!(!unit_cell_visible(&without_lattice, &policy));

        policy.set_category(ViewCategory::UnitCell, false);
        assert!(!unit_cell_visible(&with_lattice, &policy));
    }

    #[test]
    fn resolve_bundles_all_three_verdict_sets() {
        let structure = fe_o_structure();
        let policy = policy_for(&structure);
        let mask = VisibilityMask::resolve(&structure, &policy);

        assert_eq!(mask.atoms, vec![true, true]);
        assert_eq!(mask.bonds, vec![true]);
        assert!(mask.unit_cell);
    }
}
