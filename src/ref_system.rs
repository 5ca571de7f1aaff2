//! # Reference frames
//!
//! Two transformations live here, and nothing else touches coordinate conventions:
//!
//! 1. **Perifocal → reference frame**: the physical rotation of an orbital-plane
//!    position by the argument of periapsis `ω`, the inclination `i` and the
//!    longitude of the ascending node `Ω`. The reference frame is the fixed frame the
//!    elements are expressed in (typically the J2000 ecliptic, `z` toward the
//!    ecliptic north pole).
//! 2. **Reference frame → scene axes**: a pure presentation remap selected by
//!    [`SceneAxes`], applied after scaling. Physics never sees it.
use nalgebra::{Matrix3, Rotation3, Vector3};
use serde::{Deserialize, Serialize};

use crate::constants::Radian;

/// Elementary rotation matrix about one of the coordinate axes.
///
/// # Arguments
///
/// * `alpha` - rotation angle in radians
/// * `k` - axis index:
///   * `0` → X-axis
///   * `1` → Y-axis
///   * `2` → Z-axis
///
/// # Returns
///
/// A 3×3 rotation matrix `R` such that the rotated vector is `x' = R · x`
/// (active rotation, counter-clockwise for positive `alpha`).
///
/// # Panics
///
/// Panics if `k > 2`, as only axes 0–2 are valid.
pub fn rotmt(alpha: Radian, k: usize) -> Matrix3<f64> {
    let axis = match k {
        0 => Vector3::x_axis(),
        1 => Vector3::y_axis(),
        2 => Vector3::z_axis(),
        _ => panic!("rotmt: invalid axis index {k} (must be 0,1,2)"),
    };

    Rotation3::from_axis_angle(&axis, alpha).into()
}

/// Rotation matrix from the perifocal frame to the reference frame.
///
/// Built as `R_z(Ω) · R_x(i) · R_z(ω)`. Applied to `(r·cos ν, r·sin ν, 0)` it gives
/// the same vector as [`perifocal_to_reference`], up to rounding. Useful when many
/// points of the same orbit are rotated, as in [`crate::position::PositionEngine::orbit_path`].
pub fn perifocal_rotation(
    inclination: Radian,
    ascending_node_longitude: Radian,
    periapsis_argument: Radian,
) -> Matrix3<f64> {
    rotmt(ascending_node_longitude, 2) * rotmt(inclination, 0) * rotmt(periapsis_argument, 2)
}

/// Rotate a perifocal position, given in polar form, into the reference frame.
///
/// With the argument of latitude `u = ω + ν`:
///
/// ```text
/// x = r·(cosΩ·cos u − sinΩ·sin u·cos i)
/// y = r·(sinΩ·cos u + cosΩ·sin u·cos i)
/// z = r·sin i·sin u
/// ```
///
/// For `i = 0` the `z` component is exactly zero.
///
/// Arguments
/// ---------
/// * `radius`: distance to the focus `r`
/// * `true_anomaly`: `ν` in radians
/// * `inclination`, `ascending_node_longitude`, `periapsis_argument`: `i`, `Ω`, `ω` in radians
///
/// Return
/// ------
/// * the position in the reference frame, same length unit as `radius`
pub fn perifocal_to_reference(
    radius: f64,
    true_anomaly: Radian,
    inclination: Radian,
    ascending_node_longitude: Radian,
    periapsis_argument: Radian,
) -> Vector3<f64> {
    let (sin_u, cos_u) = (periapsis_argument + true_anomaly).sin_cos();
    let (sin_o, cos_o) = ascending_node_longitude.sin_cos();
    let (sin_i, cos_i) = inclination.sin_cos();

    Vector3::new(
        radius * (cos_o * cos_u - sin_o * sin_u * cos_i),
        radius * (sin_o * cos_u + cos_o * sin_u * cos_i),
        radius * (sin_i * sin_u),
    )
}

/// Axis convention of the target renderer.
///
/// The reference frame is right-handed with `z` as the orbital-pole axis. Scene
/// engines that treat `y` as "up" want the ecliptic plane on `x/z` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneAxes {
    /// Keep reference axes as they are.
    ZUp,
    /// Swap `y` and `z`: the reference `z` becomes scene "up".
    #[default]
    YUp,
}

impl SceneAxes {
    /// Reorder the components of a reference-frame vector for this convention.
    pub fn remap(&self, v: Vector3<f64>) -> Vector3<f64> {
        match self {
            SceneAxes::ZUp => v,
            SceneAxes::YUp => Vector3::new(v.x, v.z, v.y),
        }
    }
}

#[cfg(test)]
mod ref_system_test {
    use super::*;
    use crate::constants::RADEG;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_rotmt_quarter_turns() {
        let v = Vector3::new(1.0, 0.0, 0.0);
        assert_relative_eq!(rotmt(FRAC_PI_2, 2) * v, Vector3::y(), epsilon = 1e-15);
        assert_relative_eq!(
            rotmt(FRAC_PI_2, 0) * Vector3::y(),
            Vector3::z(),
            epsilon = 1e-15
        );
        assert_relative_eq!(
            rotmt(FRAC_PI_2, 1) * Vector3::z(),
            Vector3::x(),
            epsilon = 1e-15
        );
    }

    #[test]
    #[should_panic]
    fn test_rotmt_invalid_axis() {
        let _ = rotmt(0.1, 3);
    }

    #[test]
    fn test_closed_form_matches_matrix_product() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let r = rng.random_range(0.0..40.0);
            let nu = rng.random_range(-3.2..3.2);
            let i = rng.random_range(-180.0..180.0) * RADEG;
            let node = rng.random_range(0.0..360.0) * RADEG;
            let peri = rng.random_range(0.0..360.0) * RADEG;

            let closed = perifocal_to_reference(r, nu, i, node, peri);
            let rotated =
                perifocal_rotation(i, node, peri) * Vector3::new(r * nu.cos(), r * nu.sin(), 0.0);
            assert_relative_eq!(closed, rotated, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_equatorial_orbit_stays_in_plane() {
        for nu in [0.0, 0.7, 2.0, 3.1, -1.4] {
            let p = perifocal_to_reference(3.0, nu, 0.0, 0.4, 1.1);
            assert_eq!(p.z, 0.0);
        }
    }

    #[test]
    fn test_rotation_preserves_radius() {
        let p = perifocal_to_reference(2.5, 1.0, 0.3, 2.0, -0.5);
        assert_relative_eq!(p.norm(), 2.5, epsilon = 1e-14);
    }

    #[test]
    fn test_polar_orbit_node_on_x_axis() {
        // i = 90°, Ω = 0, ω = 0: the orbit plane is x/z
        let p = perifocal_to_reference(1.0, FRAC_PI_2, FRAC_PI_2, 0.0, 0.0);
        assert_relative_eq!(p, Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-15);
    }

    #[test]
    fn test_scene_axes_remap() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(SceneAxes::ZUp.remap(v), v);
        assert_eq!(SceneAxes::YUp.remap(v), Vector3::new(1.0, 3.0, 2.0));
        assert_eq!(SceneAxes::default(), SceneAxes::YUp);
    }

    #[test]
    fn test_scene_axes_serde_names() {
        let axes: SceneAxes = serde_json::from_str("\"z_up\"").unwrap();
        assert_eq!(axes, SceneAxes::ZUp);
        assert_eq!(serde_json::to_string(&SceneAxes::YUp).unwrap(), "\"y_up\"");
    }
}
