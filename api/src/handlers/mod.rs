//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod exoplanets;
pub mod health;

pub use exoplanets::{
    create_exoplanet, delete_exoplanet, estimate_fuel, get_exoplanet, list_exoplanets,
    update_exoplanet,
};
pub use health::health;
