use phf::{Map, phf_map};

/// Fallback display color for element symbols not present in [`ELEMENT_COLORS`].
pub const DEFAULT_COLOR: &str = "#808080";

/// Display colors per element symbol, as `#RRGGBB` hex strings.
///
/// The palette follows the CPK-flavored scheme of the structure-parsing
/// backend, grouped by periodic table category. Producers bake these colors
/// into atom records; this table exists so legends and records without
/// pre-resolved colors agree with them.
#[rustfmt::skip]
pub static ELEMENT_COLORS: Map<&'static str, &'static str> = phf_map! {
    // --- Alkali metals ---
    "Li" => "#FF4444", "Na" => "#FF6B35", "K" => "#FF9F40", "Rb" => "#FF4D4D",
    "Cs" => "#FF6B6B", "Fr" => "#FF4500",

    // --- Alkaline earth metals ---
    "Be" => "#F4E4C1", "Mg" => "#8B4513", "Ca" => "#00A86B", "Sr" => "#00FF7F",
    "Ba" => "#00A86B", "Ra" => "#00FF00",

    // --- Transition metals ---
    "Sc" => "#E6E6FA", "Ti" => "#7F8C8D", "V"  => "#6B8E23", "Cr" => "#4A90E2", "Mn" => "#9E9E9E",
    "Fe" => "#CD853F", "Co" => "#F05228", "Ni" => "#72A0C1", "Cu" => "#B87333", "Zn" => "#FFD700",
    "Y"  => "#FFFF00", "Zr" => "#94E0E0", "Nb" => "#73C2C9", "Mo" => "#54B5B5", "Tc" => "#3B9E9E",
    "Ru" => "#248F8F", "Rh" => "#0A7D8C", "Pd" => "#006985", "Ag" => "#C0C0C0", "Cd" => "#FFD98F",
    "Hf" => "#4DC2FF", "Ta" => "#4DA6FF", "W"  => "#2194D6", "Re" => "#267DAB", "Os" => "#266696",
    "Ir" => "#175487", "Pt" => "#D0D0E0", "Au" => "#FFD700", "Hg" => "#B8B8D0",

    // --- Lanthanides ---
    "La" => "#70D4FF", "Ce" => "#FFFFC7", "Pr" => "#D9FFC7", "Nd" => "#C7FFC7", "Pm" => "#A3FFC7",
    "Sm" => "#8FFFC7", "Eu" => "#61FFC7", "Gd" => "#45FFC7", "Tb" => "#30FFC7", "Dy" => "#1FFFC7",
    "Ho" => "#00FF9C", "Er" => "#00E675", "Tm" => "#00D452", "Yb" => "#00BF38", "Lu" => "#00AB24",

    // --- Actinides and transactinides ---
    "Ac" => "#70ABFA", "Th" => "#00BAFF", "Pa" => "#00A1FF", "U"  => "#008FFF", "Np" => "#0080FF",
    "Pu" => "#006BFF", "Am" => "#545CF2", "Cm" => "#785CE3", "Bk" => "#8A4FE3", "Cf" => "#A136D4",
    "Es" => "#B31FD4", "Fm" => "#B31FBA", "Md" => "#B30DA6", "No" => "#BD0D87", "Lr" => "#C70066",
    "Rf" => "#CC0059", "Db" => "#D1004F", "Sg" => "#D90045", "Bh" => "#E00038", "Hs" => "#E6002E",
    "Mt" => "#EB0026", "Ds" => "#EF001E", "Rg" => "#F20017", "Cn" => "#F3000D", "Fl" => "#F60008",
    "Lv" => "#FA0008", "Ts" => "#FD0007", "Og" => "#FE0006",

    // --- Metalloids ---
    "B"  => "#FFA500", "Si" => "#FF8C00", "Ge" => "#8B4513", "As" => "#FFC107", "Sb" => "#9E9A9E",
    "Te" => "#D4A017",

    // --- Non-metals and noble gases ---
    "H"  => "#FF6B6B", "He" => "#E3F2FD", "Ne" => "#B3E3F5", "Ar" => "#80D1E3", "Kr" => "#5CB8CC",
    "Xe" => "#429EB0", "C"  => "#505050", "N"  => "#0078D7", "O"  => "#FF0000", "F"  => "#00BFFF",
    "Cl" => "#1CFE00", "P"  => "#FF3D00", "S"  => "#FFEB3B", "Se" => "#FFA000", "Br" => "#8B4513",
    "I"  => "#6400AA",

    // --- Post-transition metals ---
    "Al" => "#D4D4D4", "Ga" => "#CD5C5C", "In" => "#A67C52", "Sn" => "#666666", "Tl" => "#A67C52",
    "Pb" => "#434343", "Bi" => "#9E9E9E",
};

/// Returns the display color for an element symbol.
///
/// # Arguments
///
/// * `symbol` - The canonical element symbol (e.g., "Fe").
///
/// # Return
///
/// Returns the `#RRGGBB` hex color for known elements, or [`DEFAULT_COLOR`]
/// for symbols outside the table.
pub fn color_of(symbol: &str) -> &'static str {
    ELEMENT_COLORS.get(symbol).copied().unwrap_or(DEFAULT_COLOR)
}
