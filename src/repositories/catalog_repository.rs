//! Repositorio del catálogo (vehículos y concesionarios)
//!
//! El catálogo se carga una vez al arrancar desde los ficheros JSON configurados.
//! Si un fichero no existe o no es válido se usa la copia incluida en el binario.
//! Después de cargarse es de solo lectura y se comparte vía `Arc`.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{info, warn};

use crate::models::{Dealer, Vehicle};

const BUILTIN_VEHICLES: &str = include_str!("../../data/vehicles.json");
const BUILTIN_DEALERS: &str = include_str!("../../data/dealers.json");

/// Longitud del prefijo de código postal usado para "cercanía"
const ZIP_PREFIX_LEN: usize = 3;

#[derive(Debug, Clone)]
pub struct CatalogRepository {
    vehicles: Vec<Vehicle>,
    dealers: Vec<Dealer>,
}

impl CatalogRepository {
    pub fn new(vehicles: Vec<Vehicle>, dealers: Vec<Dealer>) -> Self {
        Self { vehicles, dealers }
    }

    /// Catálogo incluido en el binario
    pub fn builtin() -> Result<Self> {
        let vehicles = serde_json::from_str(BUILTIN_VEHICLES)
            .context("built-in vehicle catalog is not valid JSON")?;
        let dealers = serde_json::from_str(BUILTIN_DEALERS)
            .context("built-in dealer list is not valid JSON")?;
        Ok(Self::new(vehicles, dealers))
    }

    /// Cargar desde ficheros, con fallback por fichero al catálogo incluido
    pub fn load(vehicles_path: &Path, dealers_path: &Path) -> Result<Self> {
        let builtin = Self::builtin()?;

        let vehicles = load_or_fallback(vehicles_path, "vehicles", builtin.vehicles);
        let dealers = load_or_fallback(dealers_path, "dealers", builtin.dealers);

        info!(
            "📚 Catálogo listo: {} vehículos, {} concesionarios",
            vehicles.len(),
            dealers.len()
        );
        Ok(Self::new(vehicles, dealers))
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn find_vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn dealers(&self) -> &[Dealer] {
        &self.dealers
    }

    pub fn find_dealer(&self, id: &str) -> Option<&Dealer> {
        self.dealers.iter().find(|d| d.id == id)
    }

    /// Concesionarios cuyo código postal comparte los 3 primeros caracteres.
    /// Sin zip, o sin coincidencias, devuelve la lista completa.
    pub fn dealers_near(&self, zip: Option<&str>) -> Vec<&Dealer> {
        let zip = zip.map(str::trim).unwrap_or_default();
        if zip.is_empty() {
            return self.dealers.iter().collect();
        }

        let prefix: String = zip.chars().take(ZIP_PREFIX_LEN).collect();
        let nearby: Vec<&Dealer> = self
            .dealers
            .iter()
            .filter(|d| d.zip.starts_with(&prefix))
            .collect();

        if nearby.is_empty() {
            self.dealers.iter().collect()
        } else {
            nearby
        }
    }
}

fn load_or_fallback<T: DeserializeOwned>(path: &Path, label: &str, fallback: Vec<T>) -> Vec<T> {
    let parsed = std::fs::read_to_string(path)
        .map_err(anyhow::Error::from)
        .and_then(|raw| serde_json::from_str::<Vec<T>>(&raw).map_err(anyhow::Error::from));

    match parsed {
        Ok(items) => {
            info!("✅ {} cargados desde {}", label, path.display());
            items
        }
        Err(e) => {
            warn!(
                "⚠️ No se pudo cargar {} desde {} ({}), usando datos incluidos",
                label,
                path.display(),
                e
            );
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = CatalogRepository::builtin().unwrap();
        assert_eq!(catalog.vehicles().len(), 13);
        assert_eq!(catalog.dealers().len(), 4);
        assert!(catalog.find_vehicle("camry-2025-xse").is_some());
        assert!(catalog.find_vehicle("nope").is_none());
    }

    #[test]
    fn test_vehicle_ids_are_unique() {
        let catalog = CatalogRepository::builtin().unwrap();
        let mut ids: Vec<&str> = catalog.vehicles().iter().map(|v| v.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.vehicles().len());
    }

    #[test]
    fn test_missing_file_falls_back_to_builtin() {
        let catalog = CatalogRepository::load(
            Path::new("/definitely/not/here/vehicles.json"),
            Path::new("/definitely/not/here/dealers.json"),
        )
        .unwrap();
        assert_eq!(catalog.vehicles().len(), 13);
        assert_eq!(catalog.dealers().len(), 4);
    }

    #[test]
    fn test_load_from_file() {
        let builtin = CatalogRepository::builtin().unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let subset = &builtin.vehicles()[..2];
        write!(file, "{}", serde_json::to_string(subset).unwrap()).unwrap();

        let catalog =
            CatalogRepository::load(file.path(), Path::new("/definitely/not/here.json")).unwrap();
        assert_eq!(catalog.vehicles().len(), 2);
        assert_eq!(catalog.vehicles()[0].id, builtin.vehicles()[0].id);
    }

    #[test]
    fn test_fractional_mpg_loads_from_file() {
        let builtin = CatalogRepository::builtin().unwrap();
        let mut subset = builtin.vehicles()[..2].to_vec();
        subset[0].mpg = 32.5;
        subset[0].city_mpg = 29.4;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&subset).unwrap()).unwrap();

        let catalog =
            CatalogRepository::load(file.path(), Path::new("/definitely/not/here.json")).unwrap();
        assert_eq!(catalog.vehicles().len(), 2);
        assert_eq!(catalog.vehicles()[0].mpg, 32.5);
        assert_eq!(catalog.vehicles()[0].city_mpg, 29.4);
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let catalog = CatalogRepository::load(file.path(), file.path()).unwrap();
        assert_eq!(catalog.vehicles().len(), 13);
    }

    #[test]
    fn test_dealers_near_prefix() {
        let catalog = CatalogRepository::builtin().unwrap();
        let near = catalog.dealers_near(Some("75034"));
        // prefijo 750: Plano, Frisco e Irving; Dallas (75201) queda fuera
        let ids: Vec<&str> = near.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["plano-toyota", "frisco-toyota", "irving-toyota"]);

        let near = catalog.dealers_near(Some("75299"));
        assert_eq!(near.len(), 1);
        assert_eq!(near[0].id, "dallas-toyota");

        let dealers = vec![
            Dealer {
                id: "a".into(),
                name: "A".into(),
                zip: "75201".into(),
                city: "Dallas".into(),
                state: "TX".into(),
                lat: 0.0,
                lng: 0.0,
                phone: "".into(),
            },
            Dealer {
                id: "b".into(),
                name: "B".into(),
                zip: "10001".into(),
                city: "New York".into(),
                state: "NY".into(),
                lat: 0.0,
                lng: 0.0,
                phone: "".into(),
            },
        ];
        let catalog = CatalogRepository::new(vec![], dealers);
        let near = catalog.dealers_near(Some("10018"));
        assert_eq!(near.len(), 1);
        assert_eq!(near[0].id, "b");

        // sin coincidencia: lista completa
        assert_eq!(catalog.dealers_near(Some("99999")).len(), 2);
        assert_eq!(catalog.dealers_near(None).len(), 2);
        assert_eq!(catalog.dealers_near(Some("")).len(), 2);
    }
}
