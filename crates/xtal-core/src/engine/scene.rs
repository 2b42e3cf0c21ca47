use nalgebra::Point3;
use serde::Serialize;

/// Fixed display color for bond segments, as a `#RRGGBB` hex string.
pub const BOND_COLOR: &str = "#666666";

/// Fixed display color for unit-cell edge segments, as a `#RRGGBB` hex string.
pub const CELL_EDGE_COLOR: &str = "#00ff00";

/// Classifies a line segment so renderers can style bonds and cell edges
/// differently (see [`BOND_COLOR`] and [`CELL_EDGE_COLOR`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// A bond between two atoms.
    Bond,
    /// One edge of the unit-cell wireframe.
    CellEdge,
}

/// A sphere to draw for one visible atom.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SphereInstance {
    /// Stable reconciliation key: the atom's index in the structure. Keys
    /// survive recomputation, so an incremental renderer can update rather
    /// than rebuild.
    pub key: usize,
    /// Sphere center: the atom's cartesian coordinates in Angstroms.
    pub center: Point3<f64>,
    /// Sphere radius in Angstroms (covalent radius times the display scale).
    pub radius: f64,
    /// Sphere color as a `#RRGGBB` hex string.
    pub color: String,
}

/// A line segment to draw for a visible bond or a unit-cell edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentInstance {
    /// Stable reconciliation key, unique within the segment's kind: the bond's
    /// position in the structure for bonds, the edge index `0..12` for cell
    /// edges.
    pub key: usize,
    /// What this segment depicts.
    pub kind: SegmentKind,
    /// Segment start in cartesian Angstroms.
    pub start: Point3<f64>,
    /// Segment end in cartesian Angstroms.
    pub end: Point3<f64>,
}

/// A fully resolved, renderer-agnostic scene description.
///
/// Everything a drawing backend needs and nothing it must compute: invisible
/// primitives are omitted rather than flagged, colors and radii are already
/// resolved, and ordering is deterministic (spheres in atom order, bond
/// segments in bond order, cell edges last).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scene {
    /// The atom spheres to draw.
    pub spheres: Vec<SphereInstance>,
    /// The bond and cell-edge segments to draw.
    pub segments: Vec<SegmentInstance>,
}

impl Scene {
    /// Returns whether the scene has nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty() && self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scene_is_empty() {
        let scene = Scene::default();
        assert!(scene.is_empty());
        assert_eq!(scene.spheres.len(), 0);
        assert_eq!(scene.segments.len(), 0);
    }

    #[test]
    fn segment_kind_serializes_in_snake_case() {
        let json = serde_json::to_string(&SegmentKind::CellEdge).unwrap();
        assert_eq!(json, r#""cell_edge""#);
    }

    #[test]
    fn sphere_serializes_center_as_coordinate_triple() {
        let sphere = SphereInstance {
            key: 0,
            center: Point3::new(1.0, 2.0, 3.0),
            radius: 0.396,
            color: "#CD853F".to_string(),
        };
        let value = serde_json::to_value(&sphere).unwrap();
        assert_eq!(value["center"], serde_json::json!([1.0, 2.0, 3.0]));
        assert_eq!(value["color"], "#CD853F");
    }
}
