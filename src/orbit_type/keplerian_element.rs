//! # Keplerian orbital elements
//!
//! This module defines [`KeplerianElements`], the **classical orbital element set**
//! supplied per body by the scene and consumed by the position engine.
//!
//! ## The elements
//!
//! 1. **a** – Semi-major axis (AU)
//! 2. **e** – Eccentricity (unitless, `0 ≤ e < 1`)
//! 3. **i** – Inclination (degrees)
//! 4. **Ω** – Longitude of ascending node (degrees)
//! 5. **ω** – Argument of periapsis (degrees)
//! 6. **M₀** – Mean anomaly at the J2000 reference instant (degrees)
//!
//! Angles are kept in **degrees**, as catalogs publish them; conversion to radians
//! happens once per evaluation inside [`crate::position`]. Any real angle is accepted,
//! no wrap-around is required.
//!
//! ## Validation
//!
//! Construction with [`KeplerianElements::new`] never fails and never checks anything,
//! which keeps the per-frame path free of error handling. Callers loading elements
//! from an untrusted source use [`KeplerianElements::try_new`] or
//! [`KeplerianElements::validate`].
//!
//! ## Example
//!
//! ```rust
//! use orrery::orbit_type::keplerian_element::KeplerianElements;
//!
//! let earth = KeplerianElements::try_new(1.00000261, 0.01671123, 0.0, 0.0, 102.93768193, 357.52688973)
//!     .unwrap();
//! assert!(earth.perihelion_distance() < 1.0);
//! ```
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    constants::{AstronomicalUnit, Degree},
    orrery_errors::OrreryError,
};

/// Keplerian orbital elements of a closed (elliptic) orbit.
///
/// Units
/// -----
/// * `semi_major_axis`: Astronomical Units (AU).
/// * `eccentricity`: unitless.
/// * `inclination`: degrees.
/// * `ascending_node_longitude`: degrees (Ω).
/// * `periapsis_argument`: degrees (ω).
/// * `mean_anomaly`: degrees (M₀, at the reference epoch).
///
/// See also
/// --------
/// * [`crate::motion::mean_anomaly_at`] – Advances `mean_anomaly` to a given instant.
/// * [`crate::position::position_at`] – Evaluates the scene position.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct KeplerianElements {
    pub semi_major_axis: AstronomicalUnit,
    pub eccentricity: f64,
    pub inclination: Degree,
    pub ascending_node_longitude: Degree,
    pub periapsis_argument: Degree,
    pub mean_anomaly: Degree,
}

impl KeplerianElements {
    pub fn new(
        semi_major_axis: AstronomicalUnit,
        eccentricity: f64,
        inclination: Degree,
        ascending_node_longitude: Degree,
        periapsis_argument: Degree,
        mean_anomaly: Degree,
    ) -> Self {
        KeplerianElements {
            semi_major_axis,
            eccentricity,
            inclination,
            ascending_node_longitude,
            periapsis_argument,
            mean_anomaly,
        }
    }

    /// Build an element set and check it describes a closed orbit.
    ///
    /// Return
    /// ------
    /// * the elements, or the first [`OrreryError`] reported by [`KeplerianElements::validate`].
    pub fn try_new(
        semi_major_axis: AstronomicalUnit,
        eccentricity: f64,
        inclination: Degree,
        ascending_node_longitude: Degree,
        periapsis_argument: Degree,
        mean_anomaly: Degree,
    ) -> Result<Self, OrreryError> {
        let elements = KeplerianElements::new(
            semi_major_axis,
            eccentricity,
            inclination,
            ascending_node_longitude,
            periapsis_argument,
            mean_anomaly,
        );
        elements.validate()?;
        Ok(elements)
    }

    /// Check the preconditions of the position engine.
    ///
    /// * every element is finite,
    /// * `semi_major_axis ≥ 0`,
    /// * `0 ≤ eccentricity < 1`.
    pub fn validate(&self) -> Result<(), OrreryError> {
        let fields = [
            ("semi_major_axis", self.semi_major_axis),
            ("eccentricity", self.eccentricity),
            ("inclination", self.inclination),
            ("ascending_node_longitude", self.ascending_node_longitude),
            ("periapsis_argument", self.periapsis_argument),
            ("mean_anomaly", self.mean_anomaly),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(OrreryError::NonFiniteElement(*name));
        }
        if self.semi_major_axis < 0.0 {
            return Err(OrreryError::NegativeSemiMajorAxis(self.semi_major_axis));
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(OrreryError::InvalidEccentricity(self.eccentricity));
        }
        Ok(())
    }

    /// Closest distance to the focus, `a·(1 − e)` (AU).
    pub fn perihelion_distance(&self) -> AstronomicalUnit {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Farthest distance to the focus, `a·(1 + e)` (AU).
    pub fn aphelion_distance(&self) -> AstronomicalUnit {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Same orbit with a different mean anomaly.
    pub fn with_mean_anomaly(&self, mean_anomaly: Degree) -> Self {
        KeplerianElements {
            mean_anomaly,
            ..*self
        }
    }
}

impl fmt::Display for KeplerianElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Keplerian Elements @ J2000")?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(
            f,
            "  a   (semi-major axis)       = {:.6} AU",
            self.semi_major_axis
        )?;
        writeln!(
            f,
            "  e   (eccentricity)          = {:.6}",
            self.eccentricity
        )?;
        writeln!(
            f,
            "  i   (inclination)           = {:.6}°",
            self.inclination
        )?;
        writeln!(
            f,
            "  Ω   (longitude of node)     = {:.6}°",
            self.ascending_node_longitude
        )?;
        writeln!(
            f,
            "  ω   (argument of periapsis) = {:.6}°",
            self.periapsis_argument
        )?;
        writeln!(
            f,
            "  M   (mean anomaly)          = {:.6}°",
            self.mean_anomaly
        )
    }
}
