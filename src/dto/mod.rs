//! DTOs: cuerpos de petición y respuesta de la API

pub mod chat_dto;
pub mod configuration_dto;
pub mod dealer_dto;
pub mod finance_dto;
pub mod vehicle_dto;
