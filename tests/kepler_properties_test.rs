use approx::assert_abs_diff_eq;
use nalgebra::Vector3;
use orrery::{
    constants::{DPI, RADEG},
    kepler::{kepler_residual, solve_kepler},
    position::orbital_state,
    position_at, KeplerianElements, PositionEngine, SceneAxes, SceneProjection,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_solver_residual_by_eccentricity_band() {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    for _ in 0..5000 {
        let e = rng.random_range(0.0..=0.99);
        let m = rng.random_range(0.0..DPI);
        let residual = kepler_residual(m, e, solve_kepler(m, e)).abs();
        let bound = if e <= 0.2 {
            1e-6
        } else if e <= 0.5 {
            1e-3
        } else {
            0.5
        };
        assert!(residual < bound, "e = {e}, m = {m}, residual = {residual}");
    }
}

#[test]
fn test_circular_orbit_eccentric_anomaly_is_mean_anomaly() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..1000 {
        let m = rng.random_range(0.0..360.0);
        let elements = KeplerianElements::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(orbital_state(&elements, m).eccentric_anomaly, m * RADEG);
    }
}

#[test]
fn test_quadrant_of_quarter_orbit() {
    let elements = KeplerianElements::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    let engine = PositionEngine::new(
        Default::default(),
        SceneProjection::new(100.0, SceneAxes::ZUp),
    );
    for (m, expected) in [
        (0.0, Vector3::new(100.0, 0.0, 0.0)),
        (90.0, Vector3::new(0.0, 100.0, 0.0)),
        (180.0, Vector3::new(-100.0, 0.0, 0.0)),
        (270.0, Vector3::new(0.0, -100.0, 0.0)),
    ] {
        assert_abs_diff_eq!(engine.position_at(&elements, m), expected, epsilon = 1e-9);
    }
}

#[test]
fn test_inclined_orbit_reaches_expected_height() {
    // i = 30°, Ω = 0, ω = 90°: at periapsis the body sits at the highest point
    let elements = KeplerianElements::new(1.0, 0.0, 30.0, 0.0, 90.0, 0.0);
    let engine = PositionEngine::new(
        Default::default(),
        SceneProjection::new(1.0, SceneAxes::ZUp),
    );
    let top = engine.position_at(&elements, 0.0);
    assert_abs_diff_eq!(top, Vector3::new(0.0, 30f64.to_radians().cos(), 0.5), epsilon = 1e-12);
}

#[test]
fn test_wrap_of_mean_anomaly_in_default_scene() {
    let elements = KeplerianElements::new(0.387, 0.2056, 7.0, 48.3, 29.1, 0.0);
    for m in [0.0, 12.5, 90.0, 275.0] {
        assert_eq!(position_at(&elements, m), position_at(&elements, m + 360.0));
    }
}

#[test]
fn test_nan_inputs_propagate_without_panic() {
    let hyperbolic = KeplerianElements::new(1.0, 1.5, 0.0, 0.0, 0.0, 0.0);
    let p = position_at(&hyperbolic, 45.0);
    assert!(p.iter().any(|c| !c.is_finite()));

    let nan = KeplerianElements::new(f64::NAN, 0.1, 0.0, 0.0, 0.0, 0.0);
    assert!(position_at(&nan, 10.0).x.is_nan());
}
