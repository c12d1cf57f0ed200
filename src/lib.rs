//! API del showroom: catálogo de vehículos, búsqueda en lenguaje natural,
//! comparación, calculadora de pagos, ofertas de concesionarios y chat.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_app;
pub use state::AppState;
