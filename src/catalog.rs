//! # Tracked bodies
//!
//! A [`TrackedBody`] bundles what the per-frame loop needs for one body: its
//! [`KeplerianElements`] and its orbital period. With them the days read from the
//! clock become a mean anomaly ([`crate::motion::mean_anomaly_at`]) and then a scene
//! position ([`crate::position::PositionEngine::position_at`]).
//!
//! [`BodyCatalog`] keeps bodies in insertion order with unique names and can be
//! loaded from JSON:
//!
//! ```json
//! {
//!   "bodies": [
//!     {
//!       "name": "Ceres",
//!       "period_days": 1680.0,
//!       "elements": {
//!         "semi_major_axis": 2.7675, "eccentricity": 0.0758, "inclination": 10.59,
//!         "ascending_node_longitude": 80.3, "periapsis_argument": 73.6, "mean_anomaly": 95.99
//!       }
//!     }
//!   ]
//! }
//! ```
//!
//! `period_days` is optional; when absent it follows from Kepler's third law.
use std::path::Path;

use log::{debug, warn};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{Days, Degree},
    motion::{mean_anomaly_at, orbital_period_days},
    orbit_type::keplerian_element::KeplerianElements,
    orrery_errors::OrreryError,
    position::PositionEngine,
};

/// One orbiting body of the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedBody {
    name: String,
    elements: KeplerianElements,
    period_days: Days,
}

impl TrackedBody {
    /// Build a body after checking its elements and period.
    ///
    /// Arguments
    /// ---------
    /// * `name`: display name, unique within a catalog
    /// * `elements`: orbit, with `mean_anomaly` given at J2000
    /// * `period_days`: orbital period in days; negative for retrograde motion
    ///
    /// Return
    /// ------
    /// * the body, or an [`OrreryError`] if the elements are invalid or the period is
    ///   zero or not finite
    pub fn new(
        name: impl Into<String>,
        elements: KeplerianElements,
        period_days: Days,
    ) -> Result<Self, OrreryError> {
        elements.validate()?;
        if !period_days.is_finite() || period_days == 0.0 {
            return Err(OrreryError::InvalidOrbitalPeriod(period_days));
        }
        Ok(TrackedBody {
            name: name.into(),
            elements,
            period_days,
        })
    }

    /// Build a body whose period follows from its semi-major axis.
    pub fn with_kepler_period(
        name: impl Into<String>,
        elements: KeplerianElements,
    ) -> Result<Self, OrreryError> {
        let period = orbital_period_days(elements.semi_major_axis);
        TrackedBody::new(name, elements, period)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn elements(&self) -> &KeplerianElements {
        &self.elements
    }

    pub fn period_days(&self) -> Days {
        self.period_days
    }

    /// Mean anomaly (degrees) at `days` since J2000.
    pub fn mean_anomaly_at(&self, days: Days) -> Degree {
        mean_anomaly_at(self.elements.mean_anomaly, self.period_days, days)
    }

    /// Scene position at `days` since J2000.
    pub fn position_at(&self, days: Days, engine: &PositionEngine) -> Vector3<f64> {
        engine.position_at(&self.elements, self.mean_anomaly_at(days))
    }
}

#[derive(Debug, Deserialize)]
struct BodyRecord {
    name: String,
    elements: KeplerianElements,
    #[serde(default)]
    period_days: Option<Days>,
}

#[derive(Debug, Deserialize)]
struct CatalogRecord {
    bodies: Vec<BodyRecord>,
}

/// Ordered set of bodies with unique names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodyCatalog {
    bodies: Vec<TrackedBody>,
}

impl BodyCatalog {
    pub fn new() -> Self {
        BodyCatalog::default()
    }

    /// Add a body at the end of the catalog. Names must be unique.
    pub fn insert(&mut self, body: TrackedBody) -> Result<(), OrreryError> {
        if self.bodies.iter().any(|b| b.name == body.name) {
            return Err(OrreryError::DuplicateBody(body.name));
        }
        debug!(
            "catalog: tracking {} (a = {} AU, P = {} d)",
            body.name, body.elements.semi_major_axis, body.period_days
        );
        self.bodies.push(body);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&TrackedBody, OrreryError> {
        self.bodies
            .iter()
            .find(|b| b.name == name)
            .ok_or_else(|| OrreryError::UnknownBody(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackedBody> {
        self.bodies.iter()
    }

    /// Scene position of every body at `days` since J2000, in catalog order.
    pub fn positions_at<'a>(
        &'a self,
        days: Days,
        engine: &'a PositionEngine,
    ) -> impl Iterator<Item = (&'a str, Vector3<f64>)> + 'a {
        self.bodies
            .iter()
            .map(move |b| (b.name(), b.position_at(days, engine)))
    }

    /// Parse a catalog from its JSON form.
    ///
    /// Every body is validated; the first invalid one aborts the load.
    pub fn from_json_str(json: &str) -> Result<Self, OrreryError> {
        let record: CatalogRecord = serde_json::from_str(json)?;
        let mut catalog = BodyCatalog::new();
        for body in record.bodies {
            let tracked = match body.period_days {
                Some(period) => TrackedBody::new(body.name.clone(), body.elements, period),
                None => TrackedBody::with_kepler_period(body.name.clone(), body.elements),
            }
            .inspect_err(|err| warn!("catalog: rejecting {}: {err}", body.name))?;
            catalog.insert(tracked)?;
        }
        Ok(catalog)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, OrreryError> {
        let json = std::fs::read_to_string(path)?;
        BodyCatalog::from_json_str(&json)
    }

    /// Mercury to Mars, J2000 mean elements (JPL approximate planetary positions).
    pub fn inner_planets() -> Self {
        let planets = [
            (
                "Mercury",
                KeplerianElements::new(0.38709927, 0.20563593, 7.00497902, 48.33076593, 29.12703035, 174.79252722),
                87.969,
            ),
            (
                "Venus",
                KeplerianElements::new(0.72333566, 0.00677672, 3.39467605, 76.67984255, 54.92262463, 50.37663232),
                224.701,
            ),
            (
                "Earth",
                KeplerianElements::new(1.00000261, 0.01671123, -0.00001531, 0.0, 102.93768193, 357.52688973),
                365.256,
            ),
            (
                "Mars",
                KeplerianElements::new(1.52371034, 0.0933941, 1.84969142, 49.55953891, 286.4968315, 19.39019754),
                686.98,
            ),
        ];

        BodyCatalog {
            bodies: planets
                .into_iter()
                .map(|(name, elements, period_days)| TrackedBody {
                    name: name.to_string(),
                    elements,
                    period_days,
                })
                .collect(),
        }
    }
}
