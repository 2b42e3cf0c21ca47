use crate::core::geometry::UnitCell;
use crate::core::models::structure::StructureRecord;
use crate::engine::assembler;
use crate::engine::policy::VisibilityPolicy;
use crate::engine::scene::Scene;
use crate::engine::visibility::VisibilityMask;
use tracing::{info, instrument};

/// Derives the complete renderable scene for a structure under a policy.
///
/// This is the one-shot pipeline: unit-cell geometry, visibility resolution,
/// and scene assembly in a single synchronous call. The derivation is total;
/// records with a missing or unrealizable lattice simply yield a scene
/// without a wireframe, and malformed bonds are dropped, never fatal.
///
/// # Arguments
///
/// * `structure` - The parsed structure record to derive from.
/// * `policy` - The visibility choices to apply.
///
/// # Return
///
/// Returns the assembled scene: spheres for visible atoms, segments for
/// visible bonds and, when applicable, the unit-cell wireframe.
#[instrument(skip_all, name = "derive_scene")]
pub fn run(structure: &StructureRecord, policy: &VisibilityPolicy) -> Scene {
    // === Phase 1: Visibility resolution ===
    let mask = VisibilityMask::resolve(structure, policy);

    // === Phase 2: Unit-cell geometry ===
    let cell = if mask.unit_cell {
        UnitCell::from_structure(structure)
    } else {
        None
    };

    // === Phase 3: Scene assembly ===
    let scene = assembler::assemble(structure, &mask.atoms, &mask.bonds, cell.as_ref());

    info!(
        spheres = scene.spheres.len(),
        segments = scene.segments.len(),
        "Scene derivation complete."
    );
    scene
}
