//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación
//! y formato de importes.

pub mod errors;
pub mod format;
pub mod validation;

pub use errors::*;
