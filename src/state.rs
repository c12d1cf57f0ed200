//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. El catálogo es de sólo lectura; las
//! configuraciones guardadas se serializan dentro de su servicio.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::{CatalogRepository, ConfigurationStore};
use crate::services::{ChatService, ConfigurationService, ReplyGenerator};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub catalog: Arc<CatalogRepository>,
    pub chat: Arc<ChatService>,
    pub configurations: Arc<ConfigurationService>,
}

impl AppState {
    pub fn new(
        config: EnvironmentConfig,
        catalog: CatalogRepository,
        assistant: Arc<dyn ReplyGenerator>,
        store: Box<dyn ConfigurationStore>,
    ) -> Self {
        let catalog = Arc::new(catalog);
        let chat = ChatService::new(
            catalog.clone(),
            assistant,
            config.assistant_timeout,
            config.assistant_name.clone(),
        );

        Self {
            config,
            catalog,
            chat: Arc::new(chat),
            configurations: Arc::new(ConfigurationService::new(store)),
        }
    }
}
