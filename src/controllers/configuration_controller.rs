use std::sync::Arc;
use validator::Validate;

use crate::dto::configuration_dto::CreateConfigurationRequest;
use crate::models::FinanceConfiguration;
use crate::services::ConfigurationService;
use crate::utils::errors::AppError;
use crate::utils::validation::parse_uuid;

/// El almacén hace E/S de ficheros síncrona bajo un mutex: cada operación
/// se ejecuta en el pool bloqueante de tokio, fuera de los workers async
pub struct ConfigurationController {
    service: Arc<ConfigurationService>,
}

impl ConfigurationController {
    pub fn new(service: Arc<ConfigurationService>) -> Self {
        Self { service }
    }

    pub async fn list(&self) -> Result<Vec<FinanceConfiguration>, AppError> {
        let service = self.service.clone();
        run_blocking(move || service.list()).await
    }

    pub async fn create(
        &self,
        request: CreateConfigurationRequest,
    ) -> Result<FinanceConfiguration, AppError> {
        request.validate()?;
        let service = self.service.clone();
        run_blocking(move || service.create(request)).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let id = parse_uuid(id)?;
        let service = self.service.clone();
        run_blocking(move || service.delete(id)).await
    }
}

async fn run_blocking<T, F>(task: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task).await.map_err(|e| {
        tracing::error!("❌ Tarea de almacenamiento abortada: {}", e);
        AppError::Internal(format!("Storage task failed: {}", e))
    })?
}
