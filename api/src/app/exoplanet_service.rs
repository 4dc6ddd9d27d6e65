//! Exoplanet service
//!
//! CRUD over the exoplanet catalogue plus trip fuel estimates.
//! Callers are expected to validate records before `add` and `update`.

use std::sync::Arc;

use crate::domain::entities::{Exoplanet, ExoplanetId};
use crate::domain::fuel;
use crate::domain::ports::ExoplanetRepository;
use crate::error::{AppError, DomainError};

/// Service for managing exoplanets
pub struct ExoplanetService<ER>
where
    ER: ExoplanetRepository,
{
    exoplanets: Arc<ER>,
}

impl<ER> ExoplanetService<ER>
where
    ER: ExoplanetRepository,
{
    pub fn new(exoplanets: Arc<ER>) -> Self {
        Self { exoplanets }
    }

    /// Store a new exoplanet and return its assigned id
    pub async fn add(&self, exoplanet: Exoplanet) -> Result<ExoplanetId, AppError> {
        Ok(self.exoplanets.create(exoplanet).await?)
    }

    /// List every stored exoplanet
    pub async fn list(&self) -> Result<Vec<Exoplanet>, AppError> {
        Ok(self.exoplanets.find_all().await?)
    }

    /// Get an exoplanet by ID
    pub async fn get(&self, id: &ExoplanetId) -> Result<Exoplanet, AppError> {
        self.exoplanets
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Exoplanet {} not found", id)).into())
    }

    /// Replace an existing exoplanet; the record's id selects the target
    pub async fn update(&self, exoplanet: Exoplanet) -> Result<Exoplanet, AppError> {
        Ok(self.exoplanets.update(exoplanet).await?)
    }

    /// Delete an exoplanet
    pub async fn delete(&self, id: &ExoplanetId) -> Result<(), AppError> {
        self.exoplanets.delete(id).await?;
        Ok(())
    }

    /// Estimate fuel for a trip to the given exoplanet
    pub async fn estimate_fuel(
        &self,
        id: &ExoplanetId,
        crew_capacity: i64,
    ) -> Result<f64, AppError> {
        let exoplanet = self.get(id).await?;
        Ok(fuel::estimate_fuel(&exoplanet, crew_capacity)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryExoplanetRepository;
    use crate::domain::entities::PlanetType;
    use crate::test_utils::{assert_close, gas_giant, terrestrial};

    fn create_service() -> ExoplanetService<InMemoryExoplanetRepository> {
        ExoplanetService::new(Arc::new(InMemoryExoplanetRepository::new()))
    }

    #[tokio::test]
    async fn add_then_get_returns_input_with_id() {
        let service = create_service();
        let planet = terrestrial();

        let id = service.add(planet.clone()).await.unwrap();
        let stored = service.get(&id).await.unwrap();

        assert_eq!(stored, Exoplanet { id, ..planet });
    }

    #[tokio::test]
    async fn add_returns_increasing_ids() {
        let service = create_service();

        let ids = [
            service.add(gas_giant()).await.unwrap(),
            service.add(gas_giant()).await.unwrap(),
            service.add(terrestrial()).await.unwrap(),
        ];

        assert_eq!(ids, [ExoplanetId(1), ExoplanetId(2), ExoplanetId(3)]);
    }

    #[tokio::test]
    async fn get_not_found() {
        let service = create_service();

        let result = service.get(&ExoplanetId(5)).await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn list_counts_adds_minus_deletes() {
        let service = create_service();
        let a = service.add(gas_giant()).await.unwrap();
        service.add(terrestrial()).await.unwrap();
        service.add(gas_giant()).await.unwrap();
        service.delete(&a).await.unwrap();

        assert_eq!(service.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn list_empty() {
        let service = create_service();
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_replaces_record() {
        let service = create_service();
        let id = service.add(gas_giant()).await.unwrap();

        let updated = Exoplanet {
            id,
            name: "Renamed".to_string(),
            ..terrestrial()
        };
        let result = service.update(updated.clone()).await.unwrap();

        assert_eq!(result, updated);
        assert_eq!(service.get(&id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn update_not_found() {
        let service = create_service();
        service.add(gas_giant()).await.unwrap();

        let result = service
            .update(Exoplanet {
                id: ExoplanetId(7),
                ..gas_giant()
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::NotFound(_)))
        ));
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_then_get_not_found() {
        let service = create_service();
        let id = service.add(gas_giant()).await.unwrap();

        service.delete(&id).await.unwrap();

        assert!(service.get(&id).await.is_err());
    }

    #[tokio::test]
    async fn delete_not_found() {
        let service = create_service();

        let result = service.delete(&ExoplanetId(1)).await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn estimate_fuel_gas_giant() {
        let service = create_service();
        let id = service
            .add(Exoplanet {
                radius: 10.0,
                distance: 1000,
                ..gas_giant()
            })
            .await
            .unwrap();

        let fuel = service.estimate_fuel(&id, 5).await.unwrap();

        assert_close(fuel, 200_000_000.0);
    }

    #[tokio::test]
    async fn estimate_fuel_terrestrial() {
        let service = create_service();
        let id = service
            .add(Exoplanet {
                radius: 5.0,
                mass: Some(3.0),
                distance: 500,
                ..terrestrial()
            })
            .await
            .unwrap();

        let fuel = service.estimate_fuel(&id, 2).await.unwrap();

        assert_close(fuel, 69_444.444_444_444);
    }

    #[tokio::test]
    async fn estimate_fuel_not_found() {
        let service = create_service();

        let result = service.estimate_fuel(&ExoplanetId(3), 1).await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn estimate_fuel_unknown_type_is_invalid() {
        // `add` does not validate, so an unsupported type can reach storage
        let service = create_service();
        let id = service
            .add(Exoplanet {
                kind: PlanetType::from("IceGiant"),
                ..gas_giant()
            })
            .await
            .unwrap();

        let result = service.estimate_fuel(&id, 1).await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::Validation(_)))
        ));
    }

    #[tokio::test]
    async fn estimate_fuel_terrestrial_without_mass_is_invalid() {
        let service = create_service();
        let id = service.add(terrestrial()).await.unwrap();
        service
            .update(Exoplanet {
                id,
                mass: None,
                ..terrestrial()
            })
            .await
            .unwrap();

        let result = service.estimate_fuel(&id, 1).await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::Validation(_)))
        ));
    }
}
