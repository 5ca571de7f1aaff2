//! # Orrery
//!
//! Positions of orbiting bodies for an interactive scene, from classical Keplerian
//! elements and a simulation clock.
//!
//! Each frame the render loop:
//!
//! 1. advances a [`SimulationClock`] with the real frame time,
//! 2. reads [`SimulationClock::days`] (days since J2000),
//! 3. turns it into each body's current mean anomaly ([`motion::mean_anomaly_at`]),
//! 4. evaluates [`position_at`] for that body.
//!
//! ```rust
//! use orrery::{BodyCatalog, PositionEngine, SimulationClock};
//!
//! let catalog = BodyCatalog::inner_planets();
//! let engine = PositionEngine::default();
//! let mut clock = SimulationClock::new();
//!
//! clock.tick(1.0 / 60.0);
//! for (name, position) in catalog.positions_at(clock.days(), &engine) {
//!     assert!(position.norm() > 0.0, "{name} sits on the Sun");
//! }
//! ```
pub mod catalog;
pub mod config;
pub mod constants;
pub mod kepler;
pub mod motion;
pub mod orbit_type;
pub mod orrery_errors;
pub mod position;
pub mod ref_system;
pub mod time;

pub use catalog::{BodyCatalog, TrackedBody};
pub use config::OrreryConfig;
pub use orbit_type::keplerian_element::KeplerianElements;
pub use orrery_errors::OrreryError;
pub use position::{position_at, PositionEngine, SceneProjection};
pub use ref_system::SceneAxes;
pub use time::{SimulationClock, TimeMode};
