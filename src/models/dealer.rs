//! Modelo de concesionario (datos estáticos)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dealer {
    pub id: String,
    pub name: String,
    pub zip: String,
    pub city: String,
    pub state: String,
    pub lat: f64,
    pub lng: f64,
    pub phone: String,
}

impl Dealer {
    /// Ubicación corta: "Dallas, TX"
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}
