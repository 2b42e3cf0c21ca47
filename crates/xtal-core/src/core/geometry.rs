//! Unit-cell geometry derived from lattice parameters.
//!
//! This module contains the closed-form construction of the triclinic cell
//! basis from the six lattice parameters, the fixed parallelepiped
//! vertex/edge topology a renderer draws as the cell wireframe, and the
//! volume cross-check used to validate derived geometry against producer
//! reports.

use super::models::lattice::LatticeParameters;
use super::models::structure::StructureRecord;
use nalgebra::{Point3, Vector3};
use thiserror::Error;
use tracing::warn;

/// Error produced when lattice parameters do not describe a realizable cell.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LatticeError {
    /// The angles force the third basis vector's out-of-plane component to be
    /// imaginary; no parallelepiped with these parameters exists.
    #[error(
        "lattice parameters (a={a}, b={b}, c={c}, alpha={alpha}, beta={beta}, gamma={gamma}) do not describe a realizable cell"
    )]
    Degenerate {
        a: f64,
        b: f64,
        c: f64,
        alpha: f64,
        beta: f64,
        gamma: f64,
    },
}

/// The unit-cell parallelepiped in cartesian space.
///
/// Built once per structure from its lattice parameters; the basis vectors
/// follow the standard triclinic convention with `a` along the x axis and `b`
/// in the xy-plane. Vertices and edges come out in a fixed order so that
/// wireframe segments keep stable identities across recomputations.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitCell {
    basis: [Vector3<f64>; 3],
    vertices: [Point3<f64>; 8],
}

impl UnitCell {
    /// The 12 wireframe edges as index pairs into [`UnitCell::vertices`]:
    /// the four bottom-face edges, the four top-face edges, then the four
    /// vertical edges connecting the faces.
    pub const EDGES: [(usize, usize); 12] = [
        (0, 1),
        (1, 3),
        (3, 2),
        (2, 0),
        (4, 5),
        (5, 7),
        (7, 6),
        (6, 4),
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
    ];

    /// Derives the cell geometry from the six lattice parameters.
    ///
    /// The basis is constructed as `va = (a, 0, 0)`,
    /// `vb = (b cos γ, b sin γ, 0)`, and `vc = (cx, cy, cz)` with
    /// `cx = c cos β`, `cy = c (cos α − cos β cos γ) / sin γ`, and
    /// `cz = √(c² − cx² − cy²)`.
    ///
    /// # Arguments
    ///
    /// * `params` - Lattice lengths in Angstroms and angles in degrees.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::Degenerate`] when `c² − cx² − cy²` is
    /// negative, i.e. the parameters admit no realizable cell.
    pub fn from_parameters(params: &LatticeParameters) -> Result<Self, LatticeError> {
        let (a, b, c) = (params.a, params.b, params.c);
        let alpha = params.alpha.to_radians();
        let beta = params.beta.to_radians();
        let gamma = params.gamma.to_radians();

        let va = Vector3::new(a, 0.0, 0.0);
        let vb = Vector3::new(b * gamma.cos(), b * gamma.sin(), 0.0);

        let cx = c * beta.cos();
        let cy = c * (alpha.cos() - beta.cos() * gamma.cos()) / gamma.sin();
        let cz_squared = c * c - cx * cx - cy * cy;
        if cz_squared < 0.0 {
            return Err(LatticeError::Degenerate {
                a,
                b,
                c,
                alpha: params.alpha,
                beta: params.beta,
                gamma: params.gamma,
            });
        }
        let vc = Vector3::new(cx, cy, cz_squared.sqrt());

        let origin = Point3::origin();
        let vertices = [
            origin,
            origin + va,
            origin + vb,
            origin + va + vb,
            origin + vc,
            origin + va + vc,
            origin + vb + vc,
            origin + va + vb + vc,
        ];

        Ok(Self {
            basis: [va, vb, vc],
            vertices,
        })
    }

    /// Derives the cell for a structure, degrading gracefully.
    ///
    /// Returns `None` both when the record carries no lattice parameters and
    /// when the parameters are degenerate; the latter case is logged so a
    /// silently missing wireframe can be diagnosed.
    pub fn from_structure(structure: &StructureRecord) -> Option<Self> {
        let params = structure.lattice.as_ref()?;
        match Self::from_parameters(params) {
            Ok(cell) => Some(cell),
            Err(err) => {
                warn!(%err, "Unit cell wireframe omitted.");
                None
            }
        }
    }

    /// Returns the three basis vectors `(va, vb, vc)`.
    pub fn basis(&self) -> &[Vector3<f64>; 3] {
        &self.basis
    }

    /// Returns the 8 parallelepiped corners in the fixed order
    /// `origin, va, vb, va+vb, vc, va+vc, vb+vc, va+vb+vc`.
    pub fn vertices(&self) -> &[Point3<f64>; 8] {
        &self.vertices
    }

    /// Returns the cell volume in cubic Angstroms, computed as the scalar
    /// triple product of the basis vectors.
    pub fn volume(&self) -> f64 {
        self.basis[0].cross(&self.basis[1]).dot(&self.basis[2]).abs()
    }

    /// Iterates the 12 wireframe edges as cartesian endpoint pairs, in
    /// [`UnitCell::EDGES`] order.
    pub fn edges(&self) -> impl Iterator<Item = (Point3<f64>, Point3<f64>)> + '_ {
        Self::EDGES
            .iter()
            .map(|&(i, j)| (self.vertices[i], self.vertices[j]))
    }
}
