use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};
use dotenvy::dotenv;

use showroom::config::environment::EnvironmentConfig;
use showroom::repositories::{CatalogRepository, JsonFileStore};
use showroom::services::{DisabledAssistant, OpenAiAssistant, ReplyGenerator};
use showroom::{create_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚗 Showroom API - Catálogo, Finanzas y Asistente");
    info!("================================================");

    // Catálogo estático (con copia integrada si faltan los ficheros)
    let catalog = CatalogRepository::load(&config.vehicles_data_path, &config.dealers_data_path)?;

    let assistant = build_assistant(&config);
    let store = Box::new(JsonFileStore::new(config.configurations_path.clone()));

    if config.is_production() && config.cors_origins.is_empty() {
        warn!("⚠️ CORS permisivo en producción: define CORS_ORIGINS");
    }

    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::new(config, catalog, assistant, store);
    let app = create_app(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🚙 Vehículos:");
    info!("   GET  /api/vehicles - Catálogo completo");
    info!("   GET  /api/vehicles/:id - Obtener vehículo");
    info!("   POST /api/vehicles/search - Búsqueda en lenguaje natural");
    info!("   POST /api/compare - Comparar dos vehículos");
    info!("🏢 Concesionarios:");
    info!("   GET  /api/dealers?zip= - Concesionarios cercanos");
    info!("   GET  /api/dealers/:id - Obtener concesionario");
    info!("   POST /api/request-offers - Ofertas de concesionarios");
    info!("💰 Finanzas:");
    info!("   POST /api/calculate-payment - Compra, leasing o suscripción");
    info!("   POST /api/finance/scenarios - Comparar los tres escenarios");
    info!("   POST /api/finance/budget-fit - Planes preconfigurados");
    info!("   POST /api/finance/budget-check - Salud del presupuesto");
    info!("   GET  /api/configurations - Configuraciones guardadas");
    info!("   POST /api/configurations - Guardar configuración");
    info!("   DELETE /api/configurations/:id - Eliminar configuración");
    info!("💬 Asistente:");
    info!("   POST /api/chat - Chat con respuesta local de respaldo");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Asistente externo si hay clave; si no, sólo respuestas locales
fn build_assistant(config: &EnvironmentConfig) -> Arc<dyn ReplyGenerator> {
    let Some(api_key) = config.openai_api_key.clone() else {
        info!("💡 OPENAI_API_KEY no definida: el chat usará respuestas locales");
        return Arc::new(DisabledAssistant);
    };

    match OpenAiAssistant::new(
        api_key,
        config.openai_base_url.clone(),
        config.openai_model.clone(),
        config.assistant_timeout,
    ) {
        Ok(assistant) => {
            info!("🤖 Asistente externo activo ({})", config.openai_model);
            Arc::new(assistant)
        }
        Err(e) => {
            warn!("⚠️ No se pudo crear el cliente del asistente, usando respuestas locales: {}", e);
            Arc::new(DisabledAssistant)
        }
    }
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo escuchar Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo escuchar SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
