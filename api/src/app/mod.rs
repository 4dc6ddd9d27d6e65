//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod exoplanet_service;

pub use exoplanet_service::ExoplanetService;
