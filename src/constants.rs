//! # Constants and type definitions for Orrery
//!
//! This module centralizes the **physical constants**, **unit conversions** and the
//! **scene scaling** shared by the clock and the position engine.
//!
//! ## Overview
//!
//! - Angular helpers (2π, degrees ↔ radians)
//! - Time conversions (seconds per day, Julian year)
//! - Distance conversions (AU ↔ km ↔ scene units)
//! - Type aliases documenting the unit carried by a bare `f64`
//!
//! The scene scale is a single multiplicative constant: one astronomical unit
//! becomes [`SCENE_UNITS_PER_AU`] scene units on every axis.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Length of the Julian year in days, used by Kepler's third law in [`crate::motion`]
pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

/// Scene units per astronomical unit
pub const SCENE_UNITS_PER_AU: f64 = 100.0;

/// Kilometers → scene units
pub const KM_TO_SCENE_UNITS: f64 = SCENE_UNITS_PER_AU / AU;

/// Default rate of the simulation clock, in simulated days per real second
pub const DEFAULT_RATE_DAYS_PER_SECOND: f64 = 365.0;

/// Fixed number of fixed-point iterations used to solve Kepler's equation
pub const KEPLER_ITERATIONS: usize = 8;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Distance in scene units
pub type SceneUnit = f64;
/// Days elapsed since the J2000 reference instant
pub type Days = f64;

/// Convert a distance expressed in AU into scene units.
///
/// Arguments
/// ---------
/// * `x`: a distance in astronomical units
///
/// Return
/// ------
/// * the same distance multiplied by [`SCENE_UNITS_PER_AU`]
pub fn au_to_scene(x: AstronomicalUnit) -> SceneUnit {
    x * SCENE_UNITS_PER_AU
}
