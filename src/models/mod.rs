//! Modelos del sistema
//!
//! Este módulo contiene los modelos de dominio: catálogo de vehículos,
//! concesionarios, filtros de búsqueda y escenarios de pago.

pub mod dealer;
pub mod filter;
pub mod finance_configuration;
pub mod payment;
pub mod vehicle;

pub use dealer::Dealer;
pub use filter::FilterRecord;
pub use finance_configuration::FinanceConfiguration;
pub use payment::*;
pub use vehicle::{Drivetrain, FuelType, Vehicle};
