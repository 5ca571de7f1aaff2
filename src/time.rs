//! # Simulation time
//!
//! The scene reads one scalar per frame: **days since J2000**
//! (2000-01-01 12:00:00 UTC). [`SimulationClock`] produces it in one of two modes:
//!
//! * [`TimeMode::Sim`]: free-running, every [`SimulationClock::tick`] adds
//!   `rate_per_second × dt` to an accumulator. Negative rates run backward, a zero
//!   rate freezes time.
//! * [`TimeMode::Real`]: mirrors the wall clock, `days = (now − J2000) / 86400`.
//!   Ticks are ignored and the accumulator is left untouched.
//!
//! Switching modes is immediate and can make `days` jump; no blending is done.
//! The clock never clamps `dt`: measuring frame time (and capping stalls) is the
//! render loop's job.
//!
//! The wall clock is a type parameter ([`WallClock`]) so headless runs and tests can
//! pin "now" with [`FixedWallClock`].
use std::sync::LazyLock;
use std::time::{SystemTime, UNIX_EPOCH};

use hifitime::{Duration, Epoch};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{
    config::ClockConfig,
    constants::{Days, DEFAULT_RATE_DAYS_PER_SECOND, SECONDS_PER_DAY},
};

/// Reference instant of the `days` scale: 2000-01-01 12:00:00 UTC.
pub static J2000_EPOCH: LazyLock<Epoch> =
    LazyLock::new(|| Epoch::from_gregorian_utc_at_noon(2000, 1, 1));

/// Days elapsed from [`J2000_EPOCH`] to `epoch` (negative before it).
pub fn epoch_to_days(epoch: Epoch) -> Days {
    (epoch - *J2000_EPOCH).to_seconds() / SECONDS_PER_DAY
}

/// Instant lying `days` after [`J2000_EPOCH`].
pub fn days_to_epoch(days: Days) -> Epoch {
    *J2000_EPOCH + hifitime::Unit::Day * days
}

/// Gregorian UTC calendar date `(year, month, day)` of a day count, for UI readouts.
pub fn calendar_date(days: Days) -> (i32, u8, u8) {
    let (year, month, day, _, _, _, _) = days_to_epoch(days).to_gregorian_utc();
    (year, month, day)
}

/// Source of the current instant.
pub trait WallClock {
    fn now(&self) -> Epoch;
}

/// The operating system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemWallClock;

impl WallClock for SystemWallClock {
    fn now(&self) -> Epoch {
        let unix_seconds = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_secs_f64(),
            Err(before) => -before.duration().as_secs_f64(),
        };
        Epoch::from_unix_seconds(unix_seconds)
    }
}

/// A wall clock that only moves when told to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedWallClock {
    now: Epoch,
}

impl FixedWallClock {
    pub fn new(now: Epoch) -> Self {
        FixedWallClock { now }
    }

    pub fn set(&mut self, now: Epoch) {
        self.now = now;
    }

    pub fn advance(&mut self, elapsed: Duration) {
        self.now += elapsed;
    }
}

impl WallClock for FixedWallClock {
    fn now(&self) -> Epoch {
        self.now
    }
}

/// How [`SimulationClock::days`] is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeMode {
    /// Accumulated simulated time, advanced by ticks.
    #[default]
    Sim,
    /// Wall-clock time since J2000.
    Real,
}

impl std::fmt::Display for TimeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeMode::Sim => write!(f, "sim"),
            TimeMode::Real => write!(f, "real"),
        }
    }
}

/// Per-frame simulation clock.
///
/// Not meant to be shared between threads: the render loop owns it, ticks it, then
/// reads [`SimulationClock::days`] for every body of the frame.
#[derive(Debug, Clone)]
pub struct SimulationClock<W: WallClock = SystemWallClock> {
    mode: TimeMode,
    rate_per_second: f64,
    accumulated_days: Days,
    wall_clock: W,
}

impl SimulationClock<SystemWallClock> {
    /// Sim mode, 365 days per second, starting at J2000.
    pub fn new() -> Self {
        SimulationClock::with_wall_clock(SystemWallClock)
    }

    pub fn from_config(config: &ClockConfig) -> Self {
        SimulationClock::from_config_with_wall_clock(config, SystemWallClock)
    }
}

impl Default for SimulationClock<SystemWallClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: WallClock> SimulationClock<W> {
    pub fn with_wall_clock(wall_clock: W) -> Self {
        SimulationClock {
            mode: TimeMode::Sim,
            rate_per_second: DEFAULT_RATE_DAYS_PER_SECOND,
            accumulated_days: 0.0,
            wall_clock,
        }
    }

    pub fn from_config_with_wall_clock(config: &ClockConfig, wall_clock: W) -> Self {
        SimulationClock {
            mode: config.mode,
            rate_per_second: config.rate_per_second,
            accumulated_days: config.start_days,
            wall_clock,
        }
    }

    pub fn mode(&self) -> TimeMode {
        self.mode
    }

    /// Simulated days per real second.
    pub fn rate(&self) -> f64 {
        self.rate_per_second
    }

    /// The simulated-time accumulator, whatever the current mode.
    pub fn accumulated_days(&self) -> Days {
        self.accumulated_days
    }

    pub fn wall_clock(&self) -> &W {
        &self.wall_clock
    }

    pub fn wall_clock_mut(&mut self) -> &mut W {
        &mut self.wall_clock
    }

    pub fn set_mode(&mut self, mode: TimeMode) {
        if mode != self.mode {
            debug!("simulation clock: mode {} -> {}", self.mode, mode);
        }
        self.mode = mode;
    }

    /// Set the simulated days advanced per real second; takes effect on the next tick.
    pub fn set_rate(&mut self, rate_per_second: f64) {
        debug!("simulation clock: rate set to {rate_per_second} days/s");
        self.rate_per_second = rate_per_second;
    }

    /// Jump the simulated time to an absolute day count.
    pub fn set_sim_days(&mut self, days: Days) {
        debug!("simulation clock: jump to {days} days since J2000");
        self.accumulated_days = days;
    }

    /// Advance simulated time by one frame.
    ///
    /// Arguments
    /// ---------
    /// * `dt_seconds`: real elapsed time of the frame, as measured by the caller
    pub fn tick(&mut self, dt_seconds: f64) {
        if self.mode == TimeMode::Sim {
            self.accumulated_days += self.rate_per_second * dt_seconds;
            trace!(
                "simulation clock: tick {dt_seconds}s -> {} days",
                self.accumulated_days
            );
        }
    }

    /// Current days since J2000 for the active mode. Reading has no side effect.
    pub fn days(&self) -> Days {
        match self.mode {
            TimeMode::Sim => self.accumulated_days,
            TimeMode::Real => epoch_to_days(self.wall_clock.now()),
        }
    }

    /// Current instant as a [`hifitime::Epoch`].
    pub fn epoch(&self) -> Epoch {
        match self.mode {
            TimeMode::Sim => days_to_epoch(self.accumulated_days),
            TimeMode::Real => self.wall_clock.now(),
        }
    }

    /// Gregorian UTC date of the current instant.
    pub fn calendar_date(&self) -> (i32, u8, u8) {
        calendar_date(self.days())
    }
}
