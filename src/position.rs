//! # Orbital position engine
//!
//! Pure evaluation of a body's scene position from its elements and its **current**
//! mean anomaly:
//!
//! ```text
//! M (deg) ──► E (Kepler, fixed iterations) ──► ν, r ──► perifocal (x, y)
//!        ──► reference frame (ω, i, Ω) ──► × units_per_au ──► scene axes
//! ```
//!
//! ## Precondition
//!
//! The mean anomaly handed to [`position_at`] must already reflect the instant being
//! drawn. The engine does **not** advance `elements.mean_anomaly` with time; that
//! composition (epoch mean anomaly + mean motion × elapsed days) belongs to
//! [`crate::motion::mean_anomaly_at`] and [`crate::catalog::TrackedBody::position_at`].
//!
//! ## Guarantees
//!
//! * deterministic: same inputs, same bits out; no state is kept between calls,
//! * no heap allocation on the per-body path,
//! * no error path: for `0 ≤ e < 1` and finite angles the output is finite. Outside
//!   that domain `NaN`/`∞` propagate silently, see [`KeplerianElements::validate`],
//! * `a = 0` maps to the origin; the only division is by `1 − e·cos E > 0`.
use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{AstronomicalUnit, Degree, Radian, RADEG, SCENE_UNITS_PER_AU},
    kepler::{orbital_radius, true_anomaly, EccentricAnomalySolver},
    orbit_type::keplerian_element::KeplerianElements,
    ref_system::{perifocal_rotation, perifocal_to_reference, SceneAxes},
};

/// Intermediate quantities of one evaluation, in physical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalState {
    /// Eccentric anomaly `E` (rad).
    pub eccentric_anomaly: Radian,
    /// True anomaly `ν` (rad), in `(−π, π]`.
    pub true_anomaly: Radian,
    /// Distance to the focus `r` (AU).
    pub radius: AstronomicalUnit,
    /// Position in the orbital plane, periapsis along `x` (AU).
    pub perifocal: Vector2<f64>,
    /// Position in the reference frame (AU).
    pub reference: Vector3<f64>,
}

/// Presentation step: uniform AU → scene-unit scale, then axis remap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneProjection {
    pub units_per_au: f64,
    pub axes: SceneAxes,
}

impl Default for SceneProjection {
    fn default() -> Self {
        SceneProjection {
            units_per_au: SCENE_UNITS_PER_AU,
            axes: SceneAxes::default(),
        }
    }
}

impl SceneProjection {
    pub fn new(units_per_au: f64, axes: SceneAxes) -> Self {
        SceneProjection { units_per_au, axes }
    }

    /// Map a reference-frame position (AU) to scene coordinates.
    pub fn project(&self, reference: Vector3<f64>) -> Vector3<f64> {
        self.axes.remap(reference * self.units_per_au)
    }
}

/// A Kepler solver paired with a scene projection.
///
/// Both parts are plain `Copy` values: an engine can be shared by reference across
/// every body of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PositionEngine {
    solver: EccentricAnomalySolver,
    projection: SceneProjection,
}

impl PositionEngine {
    pub fn new(solver: EccentricAnomalySolver, projection: SceneProjection) -> Self {
        PositionEngine { solver, projection }
    }

    pub fn solver(&self) -> &EccentricAnomalySolver {
        &self.solver
    }

    pub fn projection(&self) -> &SceneProjection {
        &self.projection
    }

    /// Evaluate the orbit at a given mean anomaly, stopping before the scene step.
    ///
    /// Arguments
    /// ---------
    /// * `elements`: the orbit; its own `mean_anomaly` field is ignored
    /// * `mean_anomaly`: the current mean anomaly in degrees, any real value
    ///
    /// Return
    /// ------
    /// * the [`OrbitalState`] holding `E`, `ν`, `r` and the perifocal/reference positions
    pub fn orbital_state(&self, elements: &KeplerianElements, mean_anomaly: Degree) -> OrbitalState {
        let e = elements.eccentricity;
        let m = mean_anomaly.rem_euclid(360.0) * RADEG;
        let inclination = elements.inclination * RADEG;
        let node = elements.ascending_node_longitude * RADEG;
        let periapsis = elements.periapsis_argument * RADEG;

        let ecc_anomaly = self.solver.solve(m, e);
        let nu = true_anomaly(ecc_anomaly, e);
        let r = orbital_radius(elements.semi_major_axis, e, ecc_anomaly);

        OrbitalState {
            eccentric_anomaly: ecc_anomaly,
            true_anomaly: nu,
            radius: r,
            perifocal: Vector2::new(r * nu.cos(), r * nu.sin()),
            reference: perifocal_to_reference(r, nu, inclination, node, periapsis),
        }
    }

    /// Reference-frame position in AU, before scaling and axis remap.
    pub fn reference_position(
        &self,
        elements: &KeplerianElements,
        mean_anomaly: Degree,
    ) -> Vector3<f64> {
        self.orbital_state(elements, mean_anomaly).reference
    }

    /// Scene position of a body at the given current mean anomaly (degrees).
    pub fn position_at(&self, elements: &KeplerianElements, mean_anomaly: Degree) -> Vector3<f64> {
        self.projection
            .project(self.reference_position(elements, mean_anomaly))
    }

    /// Sample a closed orbit for drawing its trail.
    ///
    /// Points are evenly spaced in mean anomaly over one revolution, starting at
    /// periapsis, so they bunch up near apoapsis like the body itself does. The
    /// rotation into the reference frame is built once for the whole path.
    pub fn orbit_path(&self, elements: &KeplerianElements, samples: usize) -> Vec<Vector3<f64>> {
        let e = elements.eccentricity;
        let rotation = perifocal_rotation(
            elements.inclination * RADEG,
            elements.ascending_node_longitude * RADEG,
            elements.periapsis_argument * RADEG,
        );

        (0..samples)
            .map(|k| {
                let m = 360.0 * k as f64 / samples as f64 * RADEG;
                let ecc_anomaly = self.solver.solve(m, e);
                let nu = true_anomaly(ecc_anomaly, e);
                let r = orbital_radius(elements.semi_major_axis, e, ecc_anomaly);
                let reference = rotation * Vector3::new(r * nu.cos(), r * nu.sin(), 0.0);
                self.projection.project(reference)
            })
            .collect()
    }
}

/// Evaluate the orbit at a mean anomaly with the default solver (see [`PositionEngine::orbital_state`]).
pub fn orbital_state(elements: &KeplerianElements, mean_anomaly: Degree) -> OrbitalState {
    PositionEngine::default().orbital_state(elements, mean_anomaly)
}

/// Scene position with the default solver and projection (100 units/AU, y-up).
///
/// Arguments
/// ---------
/// * `elements`: the orbit; its own `mean_anomaly` field is ignored
/// * `mean_anomaly`: the **current** mean anomaly in degrees
pub fn position_at(elements: &KeplerianElements, mean_anomaly: Degree) -> Vector3<f64> {
    PositionEngine::default().position_at(elements, mean_anomaly)
}
