//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación: interpretación
//! de consultas, filtrado y comparación del catálogo, cálculo de pagos, chat
//! con el asistente externo, ofertas y configuraciones guardadas.

pub mod assistant_client;
pub mod chat_service;
pub mod comparison_service;
pub mod configuration_service;
pub mod offer_service;
pub mod payment_calculator;
pub mod query_parser;
pub mod vehicle_filter;

pub use assistant_client::{DisabledAssistant, OpenAiAssistant, ReplyGenerator, UpstreamError};
pub use chat_service::ChatService;
pub use configuration_service::ConfigurationService;
