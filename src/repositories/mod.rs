//! Repositorios de datos
//!
//! Acceso al catálogo estático y al almacén de configuraciones guardadas.

pub mod catalog_repository;
pub mod configuration_repository;

pub use catalog_repository::CatalogRepository;
pub use configuration_repository::{ConfigurationStore, InMemoryStore, JsonFileStore, StoreError};
