//! Exoplanet domain entity
//!
//! Represents a catalogued exoplanet that crews can travel to.

use serde::{Deserialize, Deserializer, Serialize};

/// Unique identifier for an exoplanet, assigned by the repository
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ExoplanetId(pub u64);

/// Any integer is accepted in a body; the server overwrites it anyway.
/// Negative values can never name a stored record and become 0.
impl<'de> Deserialize<'de> for ExoplanetId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum WireId {
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match WireId::deserialize(deserializer)? {
            WireId::Unsigned(id) => Self(id),
            WireId::Signed(_) => Self::default(),
        })
    }
}

impl From<u64> for ExoplanetId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ExoplanetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Planet classification
///
/// Only `GasGiant` and `Terrestrial` are accepted at the API boundary.
/// Anything else decodes into `Other` so it can be reported as a validation
/// failure instead of a decode failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlanetType {
    GasGiant,
    Terrestrial,
    Other(String),
}

impl Default for PlanetType {
    fn default() -> Self {
        PlanetType::Other(String::new())
    }
}

impl std::fmt::Display for PlanetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanetType::GasGiant => write!(f, "GasGiant"),
            PlanetType::Terrestrial => write!(f, "Terrestrial"),
            PlanetType::Other(s) => write!(f, "{}", s),
        }
    }
}

impl From<String> for PlanetType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "GasGiant" => PlanetType::GasGiant,
            "Terrestrial" => PlanetType::Terrestrial,
            _ => PlanetType::Other(s),
        }
    }
}

impl From<&str> for PlanetType {
    fn from(s: &str) -> Self {
        PlanetType::from(s.to_string())
    }
}

impl From<PlanetType> for String {
    fn from(kind: PlanetType) -> Self {
        match kind {
            PlanetType::Other(s) => s,
            known => known.to_string(),
        }
    }
}

/// A catalogued exoplanet
///
/// The same shape is used on the wire and in storage. Fields the client may
/// omit default to empty/zero values so that the validator, not the decoder,
/// reports what is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exoplanet {
    #[serde(default)]
    pub id: ExoplanetId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Distance from Earth in light years
    #[serde(default)]
    pub distance: i64,
    /// Radius in Earth radii
    #[serde(default)]
    pub radius: f64,
    /// Mass in Earth masses; required for terrestrial planets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass: Option<f64>,
    #[serde(rename = "type", default)]
    pub kind: PlanetType,
}
