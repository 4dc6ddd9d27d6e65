//! In-memory adapters
//!
//! Process-lifetime storage. Nothing survives a restart.

mod exoplanet_repo;

pub use exoplanet_repo::InMemoryExoplanetRepository;
