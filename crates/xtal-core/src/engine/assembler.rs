use super::scene::{Scene, SegmentInstance, SegmentKind, SphereInstance};
use crate::core::elements;
use crate::core::geometry::UnitCell;
use crate::core::models::structure::StructureRecord;

/// Assembles the renderable scene from a structure and resolved verdicts.
///
/// Invisible primitives are omitted entirely. The masks must come from the
/// visibility resolver for the same structure; `cell` is passed as `Some`
/// only when the unit-cell verdict resolved visible.
///
/// Sphere colors prefer the atom's pre-resolved color and fall back to the
/// element table; radii are the scaled covalent radii. Output order is
/// deterministic so primitive keys stay stable across recomputations.
pub fn assemble(
    structure: &StructureRecord,
    atom_mask: &[bool],
    bond_mask: &[bool],
    cell: Option<&UnitCell>,
) -> Scene {
    let mut scene = Scene::default();

    for (atom, &visible) in structure.atoms.iter().zip(atom_mask) {
        if !visible {
            continue;
        }
        let color = atom
            .color
            .clone()
            .unwrap_or_else(|| elements::color_of(&atom.element).to_string());
        scene.spheres.push(SphereInstance {
            key: atom.index,
            center: atom.cartesian,
            radius: elements::display_radius(&atom.element),
            color,
        });
    }

    for (position, (bond, &visible)) in structure.bonds.iter().zip(bond_mask).enumerate() {
        if !visible {
            continue;
        }
        // The resolver already hid bonds with out-of-range endpoints.
        let (Some(atom1), Some(atom2)) = (
            structure.atoms.get(bond.atom1_index),
            structure.atoms.get(bond.atom2_index),
        ) else {
            continue;
        };
        scene.segments.push(SegmentInstance {
            key: position,
            kind: SegmentKind::Bond,
            start: atom1.cartesian,
            end: atom2.cartesian,
        });
    }

    if let Some(cell) = cell {
        for (index, (start, end)) in cell.edges().enumerate() {
            scene.segments.push(SegmentInstance {
                key: index,
                kind: SegmentKind::CellEdge,
                start,
                end,
            });
        }
    }

    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::models::bond::Bond;
    use crate::core::models::lattice::LatticeParameters;
    use crate::engine::policy::{ViewCategory, VisibilityPolicy};
    use crate::engine::visibility::VisibilityMask;
    use nalgebra::Point3;

    fn assemble_with(structure: &StructureRecord, policy: &VisibilityPolicy) -> Scene {
        let mask = VisibilityMask::resolve(structure, policy);
        let cell = if mask.unit_cell {
            UnitCell::from_structure(structure)
        } else {
            None
        };
        assemble(structure, &mask.atoms, &mask.bonds, cell.as_ref())
    }

    fn policy_for(structure: &StructureRecord) -> VisibilityPolicy {
        let mut policy = VisibilityPolicy::new();
        policy.rebuild_elements(structure.element_symbols());
        policy
    }

    fn iron_in_cubic_cell() -> StructureRecord {
        let mut atom = Atom::new(0, "Fe", Point3::origin(), Point3::origin());
        atom.color = Some("#CD853F".to_string());
        StructureRecord::new(vec![atom], vec![], Some(LatticeParameters::cubic(5.0)))
    }

    #[test]
    fn single_iron_atom_scene_has_one_sphere_and_twelve_edges() {
        let structure = iron_in_cubic_cell();
        let scene = assemble_with(&structure, &policy_for(&structure));

        assert_eq!(scene.spheres.len(), 1);
        let sphere = &scene.spheres[0];
        assert_eq!(sphere.key, 0);
        assert_eq!(sphere.center, Point3::origin());
        assert_eq!(sphere.color, "#CD853F");
        assert!((sphere.radius - 0.396).abs() < 1e-12);

        let edges: Vec<_> = scene
            .segments
            .iter()
            .filter(|s| s.kind == SegmentKind::CellEdge)
            .collect();
        assert_eq!(edges.len(), 12);
        assert_eq!(scene.segments.len(), 12);
    }

    #[test]
    fn hiding_the_element_removes_the_sphere_but_keeps_the_cell() {
        let structure = iron_in_cubic_cell();
        let mut policy = policy_for(&structure);
        policy.set_element("Fe", false);

        let scene = assemble_with(&structure, &policy);
        assert!(scene.spheres.is_empty());
        assert_eq!(scene.segments.len(), 12);
    }

    #[test]
    fn sphere_color_falls_back_to_the_element_table() {
        let structure = StructureRecord::new(
            vec![Atom::new(0, "O", Point3::origin(), Point3::origin())],
            vec![],
            None,
        );
        let scene = assemble_with(&structure, &policy_for(&structure));
        assert_eq!(scene.spheres[0].color, "#FF0000");
    }

    #[test]
    fn unknown_element_gets_default_color_and_radius() {
        let structure = StructureRecord::new(
            vec![Atom::new(0, "Xx", Point3::origin(), Point3::origin())],
            vec![],
            None,
        );
        let scene = assemble_with(&structure, &policy_for(&structure));
        assert_eq!(scene.spheres[0].color, elements::DEFAULT_COLOR);
        assert!((scene.spheres[0].radius - 0.3).abs() < 1e-12);
    }

    #[test]
    fn bond_segments_connect_endpoint_positions() {
        let structure = StructureRecord::new(
            vec![
                Atom::new(0, "Na", Point3::origin(), Point3::new(0.0, 0.0, 0.0)),
                Atom::new(1, "Cl", Point3::origin(), Point3::new(2.8, 0.0, 0.0)),
            ],
            vec![Bond::new(0, 1, 2.8, "Na", "Cl")],
            None,
        );
        let scene = assemble_with(&structure, &policy_for(&structure));

        assert_eq!(scene.segments.len(), 1);
        let segment = &scene.segments[0];
        assert_eq!(segment.kind, SegmentKind::Bond);
        assert_eq!(segment.key, 0);
        assert_eq!(segment.start, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(segment.end, Point3::new(2.8, 0.0, 0.0));
    }

    #[test]
    fn hidden_bonds_are_omitted_not_flagged() {
        let structure = StructureRecord::new(
            vec![
                Atom::new(0, "Na", Point3::origin(), Point3::origin()),
                Atom::new(1, "Cl", Point3::origin(), Point3::new(2.8, 0.0, 0.0)),
            ],
            vec![Bond::new(0, 1, 2.8, "Na", "Cl")],
            None,
        );
        let mut policy = policy_for(&structure);
        policy.set_category(ViewCategory::Bonds, false);

        let scene = assemble_with(&structure, &policy);
        assert_eq!(scene.spheres.len(), 2);
        assert!(scene.segments.is_empty());
    }

    #[test]
    fn missing_lattice_omits_the_wireframe() {
        let structure = StructureRecord::new(
            vec![Atom::new(0, "Fe", Point3::origin(), Point3::origin())],
            vec![],
            None,
        );
        let scene = assemble_with(&structure, &policy_for(&structure));
        assert!(
            scene
                .segments
                .iter()
                .all(|s| s.kind != SegmentKind::CellEdge)
        );
    }

    #[test]
    fn degenerate_lattice_omits_the_wireframe() {
        let structure = StructureRecord::new(
            vec![Atom::new(0, "Fe", Point3::origin(), Point3::origin())],
            vec![],
            Some(LatticeParameters::new(1.0, 1.0, 1.0, 170.0, 10.0, 90.0)),
        );
        let scene = assemble_with(&structure, &policy_for(&structure));
        assert_eq!(scene.spheres.len(), 1);
        assert!(scene.segments.is_empty());
    }

    #[test]
    fn visible_primitives_keep_their_original_keys() {
        let structure = StructureRecord::new(
            vec![
                Atom::new(0, "Fe", Point3::origin(), Point3::origin()),
                Atom::new(1, "O", Point3::origin(), Point3::new(1.0, 0.0, 0.0)),
                Atom::new(2, "Fe", Point3::origin(), Point3::new(2.0, 0.0, 0.0)),
            ],
            vec![
                Bond::new(0, 1, 1.0, "Fe", "O"),
                Bond::new(1, 2, 1.0, "O", "Fe"),
            ],
            None,
        );
        let mut policy = policy_for(&structure);
        policy.set_element("O", false);

        // O hidden: its sphere and both bonds disappear, Fe keys are unchanged.
        let scene = assemble_with(&structure, &policy);
        let keys: Vec<_> = scene.spheres.iter().map(|s| s.key).collect();
        assert_eq!(keys, vec![0, 2]);
        assert!(scene.segments.is_empty());
    }
}
