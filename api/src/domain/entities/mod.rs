//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod exoplanet;

pub use exoplanet::{Exoplanet, ExoplanetId, PlanetType};
