use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrreryError {
    #[error("Eccentricity must lie in [0, 1) for a closed orbit, got {0}")]
    InvalidEccentricity(f64),

    #[error("Semi-major axis must be non-negative, got {0} AU")]
    NegativeSemiMajorAxis(f64),

    #[error("Orbital element is not finite: {0}")]
    NonFiniteElement(&'static str),

    #[error("Orbital period must be finite and non-zero, got {0} days")]
    InvalidOrbitalPeriod(f64),

    #[error("Body not found in catalog: {0}")]
    UnknownBody(String),

    #[error("Body already present in catalog: {0}")]
    DuplicateBody(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unable to parse JSON document: {0}")]
    ConfigParse(String),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<serde_json::Error> for OrreryError {
    fn from(err: serde_json::Error) -> Self {
        OrreryError::ConfigParse(err.to_string())
    }
}

impl PartialEq for OrreryError {
    fn eq(&self, other: &Self) -> bool {
        use OrreryError::*;
        match (self, other) {
            (InvalidEccentricity(a), InvalidEccentricity(b)) => a == b,
            (NegativeSemiMajorAxis(a), NegativeSemiMajorAxis(b)) => a == b,
            (NonFiniteElement(a), NonFiniteElement(b)) => a == b,
            (InvalidOrbitalPeriod(a), InvalidOrbitalPeriod(b)) => a == b,
            (UnknownBody(a), UnknownBody(b)) => a == b,
            (DuplicateBody(a), DuplicateBody(b)) => a == b,
            (InvalidConfig(a), InvalidConfig(b)) => a == b,
            (ConfigParse(a), ConfigParse(b)) => a == b,

            // io::Error is not comparable: same variant is enough
            (IoError(_), IoError(_)) => true,

            _ => false,
        }
    }
}
