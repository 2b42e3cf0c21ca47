use super::assembler;
use super::memo::Memo;
use super::policy::{CategoryToggles, VisibilityPolicy};
use super::scene::Scene;
use super::visibility;
use crate::core::geometry::UnitCell;
use crate::core::models::structure::StructureRecord;
use tracing::debug;

/// (structure generation, category flag, element-map revision)
type MaskKey = (u64, bool, u64);
/// (structure generation, all category flags, element-map revision)
type SceneKey = (u64, CategoryToggles, u64);

/// A stateful viewer session: one loaded structure, one visibility policy,
/// and lazily memoized derivations.
///
/// Each derivation is keyed by exactly the inputs it reads. Unit-cell
/// geometry depends only on the structure, so toggling an element never
/// re-derives it; the atom and bond masks each depend on their own category
/// flag plus the element map, so flipping the atoms category leaves the bond
/// mask cached. Replaying a toggle that changes nothing is a complete no-op:
/// [`ViewerSession::scene`] returns the cached scene untouched.
///
/// All methods run synchronously on the caller's thread; a session is the
/// single-threaded companion to the one-shot derivation workflow.
#[derive(Debug)]
pub struct ViewerSession {
    structure: Option<StructureRecord>,
    generation: u64,
    policy: VisibilityPolicy,
    cell: Memo<u64, Option<UnitCell>>,
    atom_mask: Memo<MaskKey, Vec<bool>>,
    bond_mask: Memo<MaskKey, Vec<bool>>,
    scene: Memo<SceneKey, Scene>,
}

impl ViewerSession {
    /// Creates an empty session: no structure, all categories visible.
    pub fn new() -> Self {
        Self {
            structure: None,
            generation: 0,
            policy: VisibilityPolicy::new(),
            cell: Memo::new(),
            atom_mask: Memo::new(),
            bond_mask: Memo::new(),
            scene: Memo::new(),
        }
    }

    /// Loads a structure, replacing any previous one.
    ///
    /// The per-element policy is rebuilt for the new structure's element set
    /// (everything visible); category toggles persist. All derivations are
    /// invalidated by the generation bump and re-run lazily on the next
    /// [`ViewerSession::scene`] call.
    pub fn load_structure(&mut self, structure: StructureRecord) {
        self.policy.rebuild_elements(structure.element_symbols());
        self.generation += 1;
        debug!(
            generation = self.generation,
            atoms = structure.num_atoms(),
            bonds = structure.num_bonds(),
            "Structure loaded into session."
        );
        self.structure = Some(structure);
    }

    /// Clears the loaded structure, returning the session to its empty state.
    ///
    /// Category toggles persist; the per-element map empties because there
    /// are no elements left to toggle.
    pub fn clear_structure(&mut self) {
        self.policy.rebuild_elements(std::iter::empty::<String>());
        self.generation += 1;
        self.structure = None;
    }

    /// Returns the loaded structure, if any.
    pub fn structure(&self) -> Option<&StructureRecord> {
        self.structure.as_ref()
    }

    /// Returns the visibility policy.
    pub fn policy(&self) -> &VisibilityPolicy {
        &self.policy
    }

    /// Returns the visibility policy for mutation.
    ///
    /// The policy tracks its own element-map revision, so mutating it through
    /// this reference composes correctly with the session's memoization.
    pub fn policy_mut(&mut self) -> &mut VisibilityPolicy {
        &mut self.policy
    }

    /// Returns the scene for the current structure and policy, deriving
    /// whatever became stale since the last call.
    pub fn scene(&mut self) -> &Scene {
        let generation = self.generation;
        let categories = self.policy.categories();
        let revision = self.policy.element_revision();
        let scene_key = (generation, categories, revision);

        let Some(structure) = &self.structure else {
            return self.scene.get_or_compute(scene_key, Scene::default);
        };
        let policy = &self.policy;

        let atom_mask = self
            .atom_mask
            .get_or_compute((generation, categories.atoms, revision), || {
                visibility::atom_mask(structure, policy)
            });
        let bond_mask = self
            .bond_mask
            .get_or_compute((generation, categories.bonds, revision), || {
                visibility::bond_mask(structure, policy)
            });
        let cell = if visibility::unit_cell_visible(structure, policy) {
            self.cell
                .get_or_compute(generation, || UnitCell::from_structure(structure))
                .as_ref()
        } else {
            None
        };

        self.scene.get_or_compute(scene_key, || {
            assembler::assemble(structure, atom_mask, bond_mask, cell)
        })
    }
}

impl Default for ViewerSession {
    fn default() -> Self {
        Self::new()
    }
}
