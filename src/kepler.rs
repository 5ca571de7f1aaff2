//! # Kepler's equation for closed orbits
//!
//! Maps a mean anomaly `M` to the eccentric anomaly `E` solving
//! `M = E − e·sin(E)`, then to the true anomaly `ν` and the orbital radius `r`.
//!
//! The solver is a **fixed-point iteration** `E_{n+1} = M + e·sin(E_n)` seeded at
//! `E₀ = M`, run for a constant number of steps with no convergence test. The cost
//! per call is therefore constant and branch-free. The contraction factor is
//! `e·|cos E|`, so precision is excellent for planetary eccentricities and degrades
//! as `e → 1`:
//!
//! | e      | worst residual after 8 iterations |
//! |--------|-----------------------------------|
//! | ≤ 0.1  | ~1e-10                            |
//! | ≤ 0.2  | ~1e-7                             |
//! | ≤ 0.5  | ~6e-4                             |
//! | 0.99   | ~0.33                             |
//!
//! Callers needing more precision on eccentric orbits raise
//! [`EccentricAnomalySolver::iterations`].
//!
//! Only elliptic orbits (`0 ≤ e < 1`) are meaningful here. Nothing is validated:
//! out-of-domain inputs propagate `NaN`/`∞` silently.
use serde::{Deserialize, Serialize};

use crate::constants::{Radian, DPI, KEPLER_ITERATIONS};

/// Return the principal value of an angle in radians, in `[0, 2π)`.
pub fn principal_angle(a: Radian) -> Radian {
    a.rem_euclid(DPI)
}

/// Fixed-iteration solver for Kepler's equation.
///
/// The iteration count is part of the value so a scene can trade precision
/// against per-body cost once, at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EccentricAnomalySolver {
    pub iterations: usize,
}

impl Default for EccentricAnomalySolver {
    fn default() -> Self {
        EccentricAnomalySolver {
            iterations: KEPLER_ITERATIONS,
        }
    }
}

impl EccentricAnomalySolver {
    pub fn new(iterations: usize) -> Self {
        EccentricAnomalySolver { iterations }
    }

    /// Solve `M = E − e·sin(E)` for the eccentric anomaly.
    ///
    /// Arguments
    /// ---------
    /// * `mean_anomaly`: the mean anomaly `M` in radians
    /// * `eccentricity`: the eccentricity `e`, expected in `[0, 1)`
    ///
    /// Return
    /// ------
    /// * the eccentric anomaly `E` in radians, after exactly `self.iterations` steps.
    ///   For `e = 0` the result is `M` bit for bit.
    pub fn solve(&self, mean_anomaly: Radian, eccentricity: f64) -> Radian {
        let mut ecc_anomaly = mean_anomaly;
        for _ in 0..self.iterations {
            ecc_anomaly = mean_anomaly + eccentricity * ecc_anomaly.sin();
        }
        ecc_anomaly
    }
}

/// Solve Kepler's equation with the default iteration count ([`KEPLER_ITERATIONS`]).
pub fn solve_kepler(mean_anomaly: Radian, eccentricity: f64) -> Radian {
    EccentricAnomalySolver::default().solve(mean_anomaly, eccentricity)
}

/// Residual `M − (E − e·sin E)` of a candidate eccentric anomaly.
pub fn kepler_residual(mean_anomaly: Radian, eccentricity: f64, ecc_anomaly: Radian) -> f64 {
    mean_anomaly - (ecc_anomaly - eccentricity * ecc_anomaly.sin())
}

/// True anomaly from the eccentric anomaly.
///
/// Uses the direct sine/cosine form
///
/// ```text
/// cos ν = (cos E − e) / (1 − e·cos E)
/// sin ν = √(1 − e²)·sin E / (1 − e·cos E)
/// ```
///
/// and recovers `ν` with `atan2`, which keeps the correct quadrant over the whole
/// orbit, including around `ν = π`. The result lies in `(−π, π]`.
pub fn true_anomaly(ecc_anomaly: Radian, eccentricity: f64) -> Radian {
    let (sin_e, cos_e) = ecc_anomaly.sin_cos();
    let denom = 1.0 - eccentricity * cos_e;
    let cos_nu = (cos_e - eccentricity) / denom;
    let sin_nu = (1.0 - eccentricity * eccentricity).sqrt() * sin_e / denom;
    sin_nu.atan2(cos_nu)
}

/// Distance to the focus, `r = a·(1 − e·cos E)`, in the unit of `semi_major_axis`.
pub fn orbital_radius(semi_major_axis: f64, eccentricity: f64, ecc_anomaly: Radian) -> f64 {
    semi_major_axis * (1.0 - eccentricity * ecc_anomaly.cos())
}
