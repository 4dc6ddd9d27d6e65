//! In-memory adapter for ExoplanetRepository

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{Exoplanet, ExoplanetId};
use crate::domain::ports::ExoplanetRepository;
use crate::error::DomainError;

/// Records plus the id counter, guarded together
#[derive(Debug)]
struct Store {
    exoplanets: HashMap<ExoplanetId, Exoplanet>,
    next_id: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            exoplanets: HashMap::new(),
            next_id: 1,
        }
    }
}

/// In-memory implementation of ExoplanetRepository
#[derive(Debug, Default)]
pub struct InMemoryExoplanetRepository {
    store: RwLock<Store>,
}

impl InMemoryExoplanetRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(id: &ExoplanetId) -> DomainError {
    DomainError::NotFound(format!("Exoplanet {} not found", id))
}

#[async_trait]
impl ExoplanetRepository for InMemoryExoplanetRepository {
    async fn create(&self, mut exoplanet: Exoplanet) -> Result<ExoplanetId, DomainError> {
        let mut store = self.store.write().await;

        let id = ExoplanetId(store.next_id);
        store.next_id += 1;

        exoplanet.id = id;
        store.exoplanets.insert(id, exoplanet);

        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<Exoplanet>, DomainError> {
        let store = self.store.read().await;
        Ok(store.exoplanets.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &ExoplanetId) -> Result<Option<Exoplanet>, DomainError> {
        let store = self.store.read().await;
        Ok(store.exoplanets.get(id).cloned())
    }

    async fn update(&self, exoplanet: Exoplanet) -> Result<Exoplanet, DomainError> {
        let mut store = self.store.write().await;

        let slot = store
            .exoplanets
            .get_mut(&exoplanet.id)
            .ok_or_else(|| not_found(&exoplanet.id))?;
        *slot = exoplanet.clone();

        Ok(exoplanet)
    }

    async fn delete(&self, id: &ExoplanetId) -> Result<(), DomainError> {
        let mut store = self.store.write().await;

        store
            .exoplanets
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }
}
