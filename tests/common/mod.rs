use approx::assert_relative_eq;
use nalgebra::Vector3;
use orrery::time::{days_to_epoch, FixedWallClock, SimulationClock};

/// A clock whose wall time is frozen `days` after J2000.
pub fn pinned_clock(days: f64) -> SimulationClock<FixedWallClock> {
    SimulationClock::with_wall_clock(FixedWallClock::new(days_to_epoch(days)))
}

pub fn assert_position_close(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}
