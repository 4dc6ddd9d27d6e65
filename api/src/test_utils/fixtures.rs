//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized
//! with struct update syntax.

use serde_json::{json, Value};

use crate::domain::entities::{Exoplanet, ExoplanetId, PlanetType};

/// Relative tolerance used when comparing fuel estimates
pub const FUEL_TOLERANCE: f64 = 1e-6;

/// Create a valid gas giant without a mass
pub fn gas_giant() -> Exoplanet {
    Exoplanet {
        id: ExoplanetId::default(),
        name: "HD 189733 b".to_string(),
        description: "Hot Jupiter with silicate rain".to_string(),
        distance: 64,
        radius: 1.1,
        mass: None,
        kind: PlanetType::GasGiant,
    }
}

/// Create a valid terrestrial planet with a mass
pub fn terrestrial() -> Exoplanet {
    Exoplanet {
        id: ExoplanetId::default(),
        name: "Kepler-452b".to_string(),
        description: "Earth's older cousin".to_string(),
        distance: 140,
        radius: 1.6,
        mass: Some(5.0),
        kind: PlanetType::Terrestrial,
    }
}

/// JSON body for a valid gas giant
pub fn gas_giant_json() -> Value {
    json!({
        "name": "TerraNova",
        "description": "A gas giant far away.",
        "distance": 1000,
        "radius": 10.0,
        "type": "GasGiant"
    })
}

/// JSON body for a valid terrestrial planet
pub fn terrestrial_json() -> Value {
    json!({
        "name": "Rocky",
        "description": "A rocky planet similar to Earth.",
        "distance": 500,
        "radius": 5.0,
        "mass": 3.0,
        "type": "Terrestrial"
    })
}

/// Assert two floats agree within `FUEL_TOLERANCE`, relative to `expected`
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= FUEL_TOLERANCE * scale,
        "expected {} but got {}",
        expected,
        actual
    );
}
