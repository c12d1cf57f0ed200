//! Modelo de Vehicle
//!
//! Vehículo del catálogo. Se carga una sola vez al arrancar y nunca se modifica.
//! Los nombres de campos en JSON siguen el formato camelCase del frontend.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tracción del vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Drivetrain {
    #[serde(rename = "FWD")]
    Fwd,
    #[serde(rename = "AWD")]
    Awd,
    #[serde(rename = "4WD")]
    FourWd,
}

impl Drivetrain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Drivetrain::Fwd => "FWD",
            Drivetrain::Awd => "AWD",
            Drivetrain::FourWd => "4WD",
        }
    }
}

impl fmt::Display for Drivetrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tipo de combustible
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FuelType {
    Gasoline,
    Hybrid,
    #[serde(rename = "Plug-in Hybrid")]
    PlugInHybrid,
    Electric,
}

impl FuelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Gasoline => "Gasoline",
            FuelType::Hybrid => "Hybrid",
            FuelType::PlugInHybrid => "Plug-in Hybrid",
            FuelType::Electric => "Electric",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vehicle principal del catálogo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: u16,
    pub price: u32,
    pub mpg: f64,
    pub city_mpg: f64,
    pub highway_mpg: f64,
    pub seats: u8,
    pub drivetrain: Drivetrain,
    /// Categoría libre: "Sedan", "Compact SUV", "Midsize Truck"...
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub engine: String,
    pub horsepower: u32,
    pub transmission: String,
    pub fuel_type: FuelType,
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Vehicle {
    /// Nombre para mostrar: "Toyota Camry XSE"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}
