//! Exoplanet validation rules
//!
//! Checks a candidate record before it is admitted to the repository.
//! Every violated rule is reported, joined into a single message.

use std::ops::RangeInclusive;

use crate::domain::entities::{Exoplanet, PlanetType};
use crate::error::DomainError;

/// Accepted distance from Earth, in light years
pub const DISTANCE_RANGE: RangeInclusive<i64> = 10..=1000;

/// Accepted radius, in Earth radii
pub const RADIUS_RANGE: RangeInclusive<f64> = 0.1..=10.0;

/// Validate an exoplanet record
///
/// Field rules run first (distance, radius, type), then the cross-field
/// rule that terrestrial planets carry a mass. The input is never modified.
pub fn validate_exoplanet(planet: &Exoplanet) -> Result<(), DomainError> {
    let mut violations = Vec::new();

    if !DISTANCE_RANGE.contains(&planet.distance) {
        violations.push(format!(
            "distance must be between {} and {} (got {})",
            DISTANCE_RANGE.start(),
            DISTANCE_RANGE.end(),
            planet.distance
        ));
    }

    // NaN fails `contains`, so non-finite radii are rejected here too
    if !RADIUS_RANGE.contains(&planet.radius) {
        violations.push(format!(
            "radius must be between {} and {} (got {})",
            RADIUS_RANGE.start(),
            RADIUS_RANGE.end(),
            planet.radius
        ));
    }

    match &planet.kind {
        PlanetType::Other(s) if s.is_empty() => violations.push("type is required".to_string()),
        PlanetType::Other(s) => violations.push(format!(
            "type must be one of {}, {} (got '{}')",
            PlanetType::GasGiant,
            PlanetType::Terrestrial,
            s
        )),
        PlanetType::Terrestrial if planet.mass.is_none() => {
            violations.push("mass must be specified for Terrestrial planets".to_string())
        }
        _ => {}
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(DomainError::Validation(violations.join("; ")))
    }
}
