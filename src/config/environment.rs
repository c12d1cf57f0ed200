//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub log_level: tracing::Level,
    // Datos estáticos del catálogo
    pub vehicles_data_path: PathBuf,
    pub dealers_data_path: PathBuf,
    pub configurations_path: PathBuf,
    // Asistente externo (OpenAI)
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub assistant_timeout: Duration,
    pub assistant_name: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3001,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            log_level: tracing::Level::DEBUG,
            vehicles_data_path: PathBuf::from("data/vehicles.json"),
            dealers_data_path: PathBuf::from("data/dealers.json"),
            configurations_path: PathBuf::from("data/finance_configurations.json"),
            openai_api_key: None,
            openai_base_url: "https://api.openai.com/v1".to_string(),
            openai_model: "gpt-4o-mini".to_string(),
            assistant_timeout: Duration::from_secs(15),
            assistant_name: "Toyota Sensei".to_string(),
        }
    }
}

impl EnvironmentConfig {
    /// Construir la configuración desde variables de entorno.
    /// Las variables ausentes toman el valor por defecto; las mal formadas son error.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let environment = env::var("ENVIRONMENT").unwrap_or(defaults.environment);

        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("PORT must be a valid number, got '{}'", value))?,
            Err(_) => defaults.port,
        };

        let assistant_timeout = match env::var("ASSISTANT_TIMEOUT_SECS") {
            Ok(value) => Duration::from_secs(value.parse().with_context(|| {
                format!("ASSISTANT_TIMEOUT_SECS must be a valid number, got '{}'", value)
            })?),
            Err(_) => defaults.assistant_timeout,
        };

        let default_level = if environment == "development" {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };
        let log_level = match env::var("LOG_LEVEL") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("LOG_LEVEL must be a tracing level, got '{}'", value))?,
            Err(_) => default_level,
        };

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        // Una clave vacía equivale a no tener clave
        let openai_api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        Ok(Self {
            environment,
            port,
            host: env::var("HOST").unwrap_or(defaults.host),
            cors_origins,
            log_level,
            vehicles_data_path: env::var("VEHICLES_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.vehicles_data_path),
            dealers_data_path: env::var("DEALERS_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.dealers_data_path),
            configurations_path: env::var("CONFIGURATIONS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.configurations_path),
            openai_api_key,
            openai_base_url: env::var("OPENAI_BASE_URL").unwrap_or(defaults.openai_base_url),
            openai_model: env::var("OPENAI_MODEL").unwrap_or(defaults.openai_model),
            assistant_timeout,
            assistant_name: env::var("ASSISTANT_NAME").unwrap_or(defaults.assistant_name),
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_development() {
        let config = EnvironmentConfig::default();
        assert!(config.is_development());
        assert!(!config.is_production());
        assert_eq!(config.server_url(), "0.0.0.0:3001");
        assert!(config.openai_api_key.is_none());
    }
}
