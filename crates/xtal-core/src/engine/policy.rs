use std::collections::BTreeMap;

/// Identifies one of the three whole-category display toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewCategory {
    /// The atom spheres.
    Atoms,
    /// The bond segments.
    Bonds,
    /// The unit-cell wireframe.
    UnitCell,
}

/// The states of the three whole-category display toggles.
///
/// Plain value semantics; derivations key their caches on copies of this
/// struct, so flipping a flag is detected by value comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryToggles {
    /// Whether atom spheres are shown at all.
    pub atoms: bool,
    /// Whether bond segments are shown at all.
    pub bonds: bool,
    /// Whether the unit-cell wireframe is shown at all.
    pub unit_cell: bool,
}

impl Default for CategoryToggles {
    fn default() -> Self {
        Self {
            atoms: true,
            bonds: true,
            unit_cell: true,
        }
    }
}

/// User-controlled visibility state for one viewer.
///
/// Combines the three category toggles with a per-element map whose key set
/// is exactly the distinct element set of the current structure. The element
/// map is rebuilt from scratch, everything visible, whenever the element set
/// changes; category toggles persist across structure replacements. Elements
/// absent from the map read as not visible, so a stale symbol can never fail
/// a lookup.
///
/// Every mutation that changes the element map bumps an internal revision,
/// which is what lets memoized derivations treat the whole map as a single
/// comparable input without cloning it.
#[derive(Debug, Clone)]
pub struct VisibilityPolicy {
    categories: CategoryToggles,
    per_element: BTreeMap<String, bool>,
    element_revision: u64,
}

impl VisibilityPolicy {
    /// Creates a policy with all categories visible and no known elements.
    pub fn new() -> Self {
        Self {
            categories: CategoryToggles::default(),
            per_element: BTreeMap::new(),
            element_revision: 0,
        }
    }

    /// Returns the current category toggle states.
    pub fn categories(&self) -> CategoryToggles {
        self.categories
    }

    /// Sets one whole-category toggle.
    pub fn set_category(&mut self, category: ViewCategory, visible: bool) {
        match category {
            ViewCategory::Atoms => self.categories.atoms = visible,
            ViewCategory::Bonds => self.categories.bonds = visible,
            ViewCategory::UnitCell => self.categories.unit_cell = visible,
        }
    }

    /// Replaces the per-element map with the given symbols, all visible.
    ///
    /// Called when a structure with a (possibly) different element set is
    /// loaded. Previous per-element choices are discarded by design: they
    /// belong to the previous structure. A rebuild that produces an
    /// identical map is a no-op.
    ///
    /// # Arguments
    ///
    /// * `symbols` - The distinct element symbols of the new structure.
    pub fn rebuild_elements<I, S>(&mut self, symbols: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rebuilt: BTreeMap<String, bool> =
            symbols.into_iter().map(|s| (s.into(), true)).collect();
        if rebuilt != self.per_element {
            self.per_element = rebuilt;
            self.element_revision += 1;
        }
    }

    /// Returns the flag for an element, or `None` for unknown symbols.
    pub fn element(&self, symbol: &str) -> Option<bool> {
        self.per_element.get(symbol).copied()
    }

    /// Returns whether an element is visible. Unknown symbols are not.
    pub fn is_element_visible(&self, symbol: &str) -> bool {
        self.element(symbol).unwrap_or(false)
    }

    /// Sets the flag for one element.
    ///
    /// Only symbols present in the map can be set; the map's key set always
    /// mirrors the structure's element set.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The element symbol to change.
    /// * `visible` - The new flag value.
    ///
    /// # Return
    ///
    /// Returns `true` when the symbol was known (whether or not the value
    /// changed), `false` for unknown symbols, which are left untouched.
    pub fn set_element(&mut self, symbol: &str, visible: bool) -> bool {
        match self.per_element.get_mut(symbol) {
            Some(flag) => {
                if *flag != visible {
                    *flag = visible;
                    self.element_revision += 1;
                }
                true
            }
            None => false,
        }
    }

    /// Sets every element's flag at once (the show-all / hide-all controls).
    pub fn set_all_elements(&mut self, visible: bool) {
        let mut changed = false;
        for flag in self.per_element.values_mut() {
            if *flag != visible {
                *flag = visible;
                changed = true;
            }
        }
        if changed {
            self.element_revision += 1;
        }
    }

    /// Iterates the known elements and their flags.
    pub fn elements(&self) -> impl Iterator<Item = (&str, bool)> {
        self.per_element
            .iter()
            .map(|(symbol, &visible)| (symbol.as_str(), visible))
    }

    pub(crate) fn element_revision(&self) -> u64 {
        self.element_revision
    }
}

impl Default for VisibilityPolicy {
    fn default() -> Self {
        Self::new()
    }
}
