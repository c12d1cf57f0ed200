//! Controladores: orquestan cada petición entre DTOs, servicios y repositorios

pub mod configuration_controller;
pub mod dealer_controller;
pub mod finance_controller;
pub mod vehicle_controller;
