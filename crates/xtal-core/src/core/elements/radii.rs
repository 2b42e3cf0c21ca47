use phf::{Map, phf_map};

/// Fallback covalent radius in Angstroms for symbols not present in
/// [`COVALENT_RADII`].
pub const DEFAULT_COVALENT_RADIUS: f64 = 1.0;

/// Factor applied to covalent radii to obtain on-screen sphere radii.
///
/// Full covalent radii make neighboring spheres touch or overlap; scaling
/// them down keeps bonds and cell edges readable. Tunable independently of
/// the radius table.
pub const DISPLAY_RADIUS_SCALE: f64 = 0.3;

/// Single-bond covalent radii in Angstroms per element symbol, for the
/// elements H through Xe (Cordero et al., 2008).
#[rustfmt::skip]
pub static COVALENT_RADII: Map<&'static str, f64> = phf_map! {
    "H"  => 0.31, "He" => 0.28, "Li" => 1.28, "Be" => 0.96, "B"  => 0.85, "C"  => 0.76,
    "N"  => 0.71, "O"  => 0.66, "F"  => 0.57, "Ne" => 0.58, "Na" => 1.66, "Mg" => 1.41,
    "Al" => 1.21, "Si" => 1.11, "P"  => 1.07, "S"  => 1.05, "Cl" => 1.02, "Ar" => 1.06,
    "K"  => 2.03, "Ca" => 1.76, "Sc" => 1.70, "Ti" => 1.60, "V"  => 1.53, "Cr" => 1.39,
    "Mn" => 1.39, "Fe" => 1.32, "Co" => 1.26, "Ni" => 1.24, "Cu" => 1.28, "Zn" => 1.34,
    "Ga" => 1.35, "Ge" => 1.22, "As" => 1.19, "Se" => 1.16, "Br" => 1.14, "Kr" => 1.17,
    "Rb" => 2.20, "Sr" => 1.95, "Y"  => 1.80, "Zr" => 1.59, "Nb" => 1.43, "Mo" => 1.36,
    "Tc" => 1.36, "Ru" => 1.34, "Rh" => 1.34, "Pd" => 1.37, "Ag" => 1.44, "Cd" => 1.52,
    "In" => 1.58, "Sn" => 1.45, "Sb" => 1.46, "Te" => 1.40, "I"  => 1.38, "Xe" => 1.40,
};

/// Returns the covalent radius of an element in Angstroms.
///
/// # Arguments
///
/// * `symbol` - The canonical element symbol (e.g., "Fe").
///
/// # Return
///
/// Returns the tabulated radius for known elements, or
/// [`DEFAULT_COVALENT_RADIUS`] for symbols outside the table.
pub fn covalent_radius(symbol: &str) -> f64 {
    COVALENT_RADII
        .get(symbol)
        .copied()
        .unwrap_or(DEFAULT_COVALENT_RADIUS)
}

/// Returns the on-screen sphere radius for an element: the covalent radius
/// scaled by [`DISPLAY_RADIUS_SCALE`].
pub fn display_radius(symbol: &str) -> f64 {
    covalent_radius(symbol) * DISPLAY_RADIUS_SCALE
}
