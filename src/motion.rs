//! # Mean motion
//!
//! Glue between the clock and the position engine: turns `days since J2000` and a
//! per-body orbital period into the current mean anomaly,
//!
//! ```text
//! M(t) = M₀ + 360° · t / P        (wrapped to [0°, 360°))
//! ```
//!
//! A negative period describes a retrograde body and makes `M` decrease with time.
//! Periods are in days; when a catalog does not publish one, Kepler's third law in
//! solar units gives it from the semi-major axis.
use crate::constants::{AstronomicalUnit, Days, Degree, DAYS_PER_JULIAN_YEAR};

/// Sidereal period around the Sun from the semi-major axis, `P = 365.25 · a^1.5` days.
pub fn orbital_period_days(semi_major_axis: AstronomicalUnit) -> Days {
    DAYS_PER_JULIAN_YEAR * semi_major_axis.powf(1.5)
}

/// Mean motion in degrees per day for a period in days.
pub fn mean_motion_deg_per_day(period_days: Days) -> f64 {
    360.0 / period_days
}

/// Mean anomaly at `days` since J2000.
///
/// Arguments
/// ---------
/// * `mean_anomaly_at_epoch`: `M₀` in degrees, at J2000
/// * `period_days`: orbital period `P` in days, non-zero
/// * `days`: elapsed days since J2000, as read from [`crate::time::SimulationClock::days`]
///
/// Return
/// ------
/// * the mean anomaly in degrees, in `[0, 360)`
pub fn mean_anomaly_at(mean_anomaly_at_epoch: Degree, period_days: Days, days: Days) -> Degree {
    let m = (mean_anomaly_at_epoch + mean_motion_deg_per_day(period_days) * days).rem_euclid(360.0);
    // rem_euclid rounds up to exactly 360 for tiny negative inputs
    if m >= 360.0 {
        0.0
    } else {
        m
    }
}
