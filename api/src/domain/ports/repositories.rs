//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., the in-memory store).

use async_trait::async_trait;

use crate::domain::entities::{Exoplanet, ExoplanetId};
use crate::error::DomainError;

/// Repository for Exoplanet entities
///
/// Identity is owned by the repository: `create` ignores any id on the input
/// and assigns the next one. Ids are never reused.
#[async_trait]
pub trait ExoplanetRepository: Send + Sync {
    /// Store a new exoplanet and return its assigned id
    async fn create(&self, exoplanet: Exoplanet) -> Result<ExoplanetId, DomainError>;

    /// Snapshot of all stored exoplanets, in no particular order
    async fn find_all(&self) -> Result<Vec<Exoplanet>, DomainError>;

    /// Find an exoplanet by ID
    async fn find_by_id(&self, id: &ExoplanetId) -> Result<Option<Exoplanet>, DomainError>;

    /// Replace the stored exoplanet with the same id
    ///
    /// Fails with `NotFound` when the id is not stored.
    async fn update(&self, exoplanet: Exoplanet) -> Result<Exoplanet, DomainError>;

    /// Remove an exoplanet
    ///
    /// Fails with `NotFound` when the id is not stored.
    async fn delete(&self, id: &ExoplanetId) -> Result<(), DomainError>;
}
