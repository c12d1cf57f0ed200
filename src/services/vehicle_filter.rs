//! Filtrado del catálogo con un `FilterRecord`
//!
//! Conserva el orden del catálogo y no modifica nada. Un resultado vacío no es error.

use crate::models::{FilterRecord, Vehicle};

/// Tipo genérico: cualquier vehículo cuyo tipo contenga "SUV"
const GENERIC_SUV: &str = "SUV";

/// Vehículos que cumplen todas las dimensiones fijadas del filtro
pub fn filter<'a>(vehicles: &'a [Vehicle], filters: &FilterRecord) -> Vec<&'a Vehicle> {
    vehicles.iter().filter(|v| matches(v, filters)).collect()
}

/// Igual que `filter` pero devolviendo copias (para respuestas JSON)
pub fn filter_owned(vehicles: &[Vehicle], filters: &FilterRecord) -> Vec<Vehicle> {
    filter(vehicles, filters).into_iter().cloned().collect()
}

pub fn matches(vehicle: &Vehicle, filters: &FilterRecord) -> bool {
    // "SUV" se compara por subcadena; cualquier otro tipo exige igualdad exacta
    // ("Compact SUV" no incluye "Midsize SUV")
    if let Some(vehicle_type) = &filters.vehicle_type {
        let type_ok = if vehicle_type == GENERIC_SUV {
            vehicle.vehicle_type.contains(GENERIC_SUV)
        } else {
            &vehicle.vehicle_type == vehicle_type
        };
        if !type_ok {
            return false;
        }
    }

    if let Some(drivetrain) = filters.drivetrain {
        if vehicle.drivetrain != drivetrain {
            return false;
        }
    }

    if let Some(fuel_type) = filters.fuel_type {
        if vehicle.fuel_type != fuel_type {
            return false;
        }
    }

    let price = u64::from(vehicle.price);
    if filters.min_price.is_some_and(|min| price < min) {
        return false;
    }
    if filters.max_price.is_some_and(|max| price > max) {
        return false;
    }

    if filters.min_mpg.is_some_and(|min| vehicle.mpg < f64::from(min)) {
        return false;
    }

    if let Some(make) = &filters.make {
        if !vehicle.make.eq_ignore_ascii_case(make) {
            return false;
        }
    }

    if let Some(model) = &filters.model {
        if !vehicle.model.to_lowercase().contains(&model.to_lowercase()) {
            return false;
        }
    }

    true
}
