//! Fuel estimation
//!
//! Derives a fuel estimate for a crewed trip to an exoplanet from its
//! distance and a gravity figure that depends on the planet type.

use crate::domain::entities::{Exoplanet, PlanetType};
use crate::error::DomainError;

/// Mass used for every gas giant, in Earth masses
pub const GAS_GIANT_MASS: f64 = 0.5;

/// Gravity figure used by the fuel formula
///
/// - gas giant: `0.5 / radius²`
/// - terrestrial: `mass / radius²`
///
/// There is no guard against a zero radius; the validator keeps radius in
/// [0.1, 10] for anything admitted through the API.
pub fn gravity(planet: &Exoplanet) -> Result<f64, DomainError> {
    let radius_sq = planet.radius.powi(2);

    match &planet.kind {
        PlanetType::GasGiant => Ok(GAS_GIANT_MASS / radius_sq),
        PlanetType::Terrestrial => {
            let mass = planet.mass.ok_or_else(|| {
                DomainError::Validation(format!(
                    "Exoplanet {} is Terrestrial but has no mass",
                    planet.id
                ))
            })?;
            Ok(mass / radius_sq)
        }
        PlanetType::Other(kind) => Err(DomainError::Validation(format!(
            "Exoplanet {} has unsupported type '{}'",
            planet.id, kind
        ))),
    }
}

/// Estimate fuel for a trip: `distance / gravity² × crew`
///
/// Full precision, no rounding. A negative crew yields a negative estimate.
/// A zero gravity (terrestrial planet with zero mass) has no finite
/// estimate and is rejected.
pub fn estimate_fuel(planet: &Exoplanet, crew_capacity: i64) -> Result<f64, DomainError> {
    let gravity = gravity(planet)?;
    let fuel = planet.distance as f64 / gravity.powi(2) * crew_capacity as f64;

    if !fuel.is_finite() {
        return Err(DomainError::Validation(format!(
            "Exoplanet {} has zero gravity; fuel cannot be estimated",
            planet.id
        )));
    }

    Ok(fuel)
}
