//! Almacenamiento de configuraciones de financiación
//!
//! La lista completa se lee y escribe de una vez (blob JSON), igual que
//! el localStorage del navegador. Dos implementaciones: fichero y memoria.

use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

use crate::models::FinanceConfiguration;
use crate::utils::errors::AppError;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid stored data: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Store lock poisoned")]
    Poisoned,
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Storage(e.to_string())
    }
}

/// Almacén clave-valor de configuraciones guardadas
pub trait ConfigurationStore: Send + Sync {
    fn load(&self) -> Result<Vec<FinanceConfiguration>, StoreError>;
    fn save(&self, configs: &[FinanceConfiguration]) -> Result<(), StoreError>;
}

/// Fichero JSON con la lista completa. Si no existe, la lista está vacía.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl ConfigurationStore for JsonFileStore {
    fn load(&self) -> Result<Vec<FinanceConfiguration>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(Vec::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn save(&self, configs: &[FinanceConfiguration]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }
        let raw = serde_json::to_string_pretty(configs)?;
        std::fs::write(&self.path, raw).map_err(|e| self.io_error(e))?;
        log::debug!("💾 {} configuraciones guardadas en {}", configs.len(), self.path.display());
        Ok(())
    }
}

/// Almacén en memoria (tests y entornos sin disco)
#[derive(Default)]
pub struct InMemoryStore {
    configs: RwLock<Vec<FinanceConfiguration>>,
}

impl ConfigurationStore for InMemoryStore {
    fn load(&self) -> Result<Vec<FinanceConfiguration>, StoreError> {
        let configs = self.configs.read().map_err(|_| StoreError::Poisoned)?;
        Ok(configs.clone())
    }

    fn save(&self, configs: &[FinanceConfiguration]) -> Result<(), StoreError> {
        let mut stored = self.configs.write().map_err(|_| StoreError::Poisoned)?;
        *stored = configs.to_vec();
        Ok(())
    }
}
