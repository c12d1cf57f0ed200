//! Servicio de configuraciones guardadas ("My Garage")
//!
//! Lectura-modificación-escritura completa del almacén bajo un mutex, de modo
//! que dentro del proceso cada escritura es visible para la siguiente lectura.

use chrono::{DateTime, Utc};
use std::sync::Mutex;
use uuid::Uuid;

use crate::dto::configuration_dto::CreateConfigurationRequest;
use crate::models::finance_configuration::sort_newest_first;
use crate::models::FinanceConfiguration;
use crate::repositories::{ConfigurationStore, StoreError};
use crate::services::payment_calculator;
use crate::utils::errors::{not_found_error, AppResult};

pub struct ConfigurationService {
    store: Box<dyn ConfigurationStore>,
    write_lock: Mutex<()>,
}

impl ConfigurationService {
    pub fn new(store: Box<dyn ConfigurationStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Configuraciones guardadas, la más reciente primero
    pub fn list(&self) -> AppResult<Vec<FinanceConfiguration>> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::Poisoned)?;
        let mut configs = self.store.load()?;
        sort_newest_first(&mut configs);
        Ok(configs)
    }

    pub fn create(&self, request: CreateConfigurationRequest) -> AppResult<FinanceConfiguration> {
        self.create_at(request, Utc::now())
    }

    /// Calcula el pago del escenario y guarda la instantánea
    pub fn create_at(
        &self,
        request: CreateConfigurationRequest,
        now: DateTime<Utc>,
    ) -> AppResult<FinanceConfiguration> {
        let result = payment_calculator::calculate(&request.scenario);

        let configuration_name = request
            .configuration_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| format!("{} - {}", request.vehicle_model, now.format("%Y-%m-%d")));

        let config = FinanceConfiguration {
            id: Uuid::new_v4(),
            vehicle_id: request.vehicle_id,
            vehicle_model: request.vehicle_model,
            configuration_name,
            scenario: request.scenario,
            monthly_payment: result.monthly_payment(),
            total_cost: result.total_cost(),
            created_at: now,
        };

        let _guard = self.write_lock.lock().map_err(|_| StoreError::Poisoned)?;
        let mut configs = self.store.load()?;
        configs.push(config.clone());
        self.store.save(&configs)?;

        log::info!("💾 Configuración guardada: {} ({})", config.configuration_name, config.id);
        Ok(config)
    }

    pub fn delete(&self, id: Uuid) -> AppResult<()> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::Poisoned)?;
        let mut configs = self.store.load()?;
        let before = configs.len();
        configs.retain(|c| c.id != id);

        if configs.len() == before {
            return Err(not_found_error("Configuration"));
        }

        self.store.save(&configs)?;
        log::info!("🗑️ Configuración eliminada: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaymentScenario;
    use crate::repositories::{InMemoryStore, JsonFileStore};
    use crate::utils::errors::AppError;
    use chrono::TimeZone;

    fn request(model: &str, name: Option<&str>) -> CreateConfigurationRequest {
        CreateConfigurationRequest {
            vehicle_id: Some("camry-2025-xse".to_string()),
            vehicle_model: model.to_string(),
            configuration_name: name.map(str::to_string),
            scenario: PaymentScenario::purchase(30000.0, 5000.0, 5.0, 60),
        }
    }

    #[test]
    fn test_create_computes_snapshot_and_default_name() {
        let service = ConfigurationService::new(Box::new(InMemoryStore::default()));
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 10, 0, 0).unwrap();

        let config = service.create_at(request("Camry XSE", None), now).unwrap();
        assert_eq!(config.configuration_name, "Camry XSE - 2025-03-14");
        assert_eq!(config.monthly_payment, 517);
        assert_eq!(config.total_cost, 36024);
        assert_eq!(config.created_at, now);

        let named = service
            .create_at(request("Camry XSE", Some("Weekend car")), now)
            .unwrap();
        assert_eq!(named.configuration_name, "Weekend car");
    }

    #[test]
    fn test_list_is_newest_first() {
        let service = ConfigurationService::new(Box::new(InMemoryStore::default()));
        let older = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let newer = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();

        service.create_at(request("Prius LE", None), older).unwrap();
        service.create_at(request("RAV4 Hybrid XLE", None), newer).unwrap();

        let listed = service.list().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].vehicle_model, "RAV4 Hybrid XLE");
        assert_eq!(listed[1].vehicle_model, "Prius LE");
    }

    #[test]
    fn test_delete_known_and_unknown() {
        let service = ConfigurationService::new(Box::new(InMemoryStore::default()));
        let config = service.create(request("Prius LE", None)).unwrap();

        service.delete(config.id).unwrap();
        assert!(service.list().unwrap().is_empty());

        let err = service.delete(config.id).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_read_your_writes_through_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("configs.json");
        let service = ConfigurationService::new(Box::new(JsonFileStore::new(&path)));

        let config = service.create(request("Highlander XLE", None)).unwrap();
        assert_eq!(service.list().unwrap(), vec![config.clone()]);

        // otra instancia sobre el mismo fichero ve la misma lista
        let reopened = ConfigurationService::new(Box::new(JsonFileStore::new(&path)));
        assert_eq!(reopened.list().unwrap(), vec![config]);
    }
}
