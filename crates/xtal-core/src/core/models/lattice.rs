use serde::{Deserialize, Serialize};

/// The six lattice parameters of a crystal structure, plus the cell volume.
///
/// Lengths are in Angstroms, angles in degrees. `alpha` is the angle between
/// the `b` and `c` axes, `beta` between `a` and `c`, and `gamma` between `a`
/// and `b`. The volume is carried as reported by the producer; the geometry
/// solver derives its own volume from the basis vectors, which lets tests
/// cross-check the two.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatticeParameters {
    /// Length of the first lattice vector in Angstroms.
    pub a: f64,
    /// Length of the second lattice vector in Angstroms.
    pub b: f64,
    /// Length of the third lattice vector in Angstroms.
    pub c: f64,
    /// Angle between the `b` and `c` axes in degrees.
    pub alpha: f64,
    /// Angle between the `a` and `c` axes in degrees.
    pub beta: f64,
    /// Angle between the `a` and `b` axes in degrees.
    pub gamma: f64,
    /// Cell volume in cubic Angstroms, as reported by the producer.
    #[serde(default)]
    pub volume: f64,
}

impl LatticeParameters {
    /// Creates lattice parameters with the given lengths and angles.
    ///
    /// The volume is left at `0.0`; producers that report it set the field
    /// directly, and the geometry solver never reads it.
    ///
    /// # Arguments
    ///
    /// * `a`, `b`, `c` - Lattice vector lengths in Angstroms.
    /// * `alpha`, `beta`, `gamma` - Inter-axial angles in degrees.
    pub fn new(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Self {
        Self {
            a,
            b,
            c,
            alpha,
            beta,
            gamma,
            volume: 0.0,
        }
    }

    /// Creates the parameters of a cubic cell with edge length `a`.
    pub fn cubic(a: f64) -> Self {
        Self {
            a,
            b: a,
            c: a,
            alpha: 90.0,
            beta: 90.0,
            gamma: 90.0,
            volume: a * a * a,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cubic_parameters_have_right_angles_and_volume() {
        let params = LatticeParameters::cubic(5.0);
        assert_eq!(params.a, 5.0);
        assert_eq!(params.b, 5.0);
        assert_eq!(params.c, 5.0);
        assert_eq!(params.alpha, 90.0);
        assert_eq!(params.beta, 90.0);
        assert_eq!(params.gamma, 90.0);
        assert_eq!(params.volume, 125.0);
    }

    #[test]
    fn lattice_parameters_deserialize_from_wire_format() {
        let json = r#"{
            "a": 4.91,
            "b": 4.91,
            "c": 5.41,
            "alpha": 90.0,
            "beta": 90.0,
            "gamma": 120.0,
            "volume": 112.98
        }"#;

        let params: LatticeParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.gamma, 120.0);
        assert_eq!(params.volume, 112.98);
    }

    #[test]
    fn missing_volume_defaults_to_zero() {
        let json = r#"{"a": 1.0, "b": 2.0, "c": 3.0, "alpha": 90.0, "beta": 90.0, "gamma": 90.0}"#;
        let params: LatticeParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.volume, 0.0);
    }
}
