//! Ofertas simuladas de concesionarios
//!
//! El generador aleatorio se inyecta para que las pruebas sean deterministas.

use rand::Rng;
use std::ops::Range;

use crate::dto::dealer_dto::DealerOffer;
use crate::models::{Dealer, Vehicle};

/// Concesionarios que reciben la solicitud
pub const MAX_OFFERS: usize = 3;
pub const DISCOUNT_RANGE: Range<i64> = 500..2_500;
pub const FEES_RANGE: Range<i64> = 800..2_300;

pub fn generate_offers<R: Rng>(
    vehicle: &Vehicle,
    dealers: &[&Dealer],
    rng: &mut R,
) -> Vec<DealerOffer> {
    let original_price = i64::from(vehicle.price);

    dealers
        .iter()
        .take(MAX_OFFERS)
        .map(|dealer| {
            let discount = rng.gen_range(DISCOUNT_RANGE);
            let fees = rng.gen_range(FEES_RANGE);

            DealerOffer {
                dealer_id: dealer.id.clone(),
                dealer_name: dealer.name.clone(),
                dealer_location: dealer.location(),
                dealer_phone: dealer.phone.clone(),
                original_price,
                discount,
                fees,
                final_price: original_price - discount + fees,
                savings: (discount - fees).max(0),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::CatalogRepository;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_offers_respect_ranges_and_arithmetic() {
        let catalog = CatalogRepository::builtin().unwrap();
        let vehicle = catalog.find_vehicle("camry-hybrid-2025-le").unwrap();
        let dealers = catalog.dealers_near(Some("75034"));

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let offers = generate_offers(vehicle, &dealers, &mut rng);
            assert_eq!(offers.len(), MAX_OFFERS);

            for offer in offers {
                assert!(DISCOUNT_RANGE.contains(&offer.discount));
                assert!(FEES_RANGE.contains(&offer.fees));
                assert_eq!(offer.original_price, 30_000);
                assert_eq!(offer.final_price, 30_000 - offer.discount + offer.fees);
                assert_eq!(offer.savings, (offer.discount - offer.fees).max(0));
            }
        }
    }

    #[test]
    fn test_same_seed_same_offers() {
        let catalog = CatalogRepository::builtin().unwrap();
        let vehicle = catalog.find_vehicle("prius-2025-le").unwrap();
        let dealers = catalog.dealers_near(None);

        let first = generate_offers(vehicle, &dealers, &mut StdRng::seed_from_u64(7));
        let second = generate_offers(vehicle, &dealers, &mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
        assert_eq!(first[0].dealer_id, "dallas-toyota");
        assert_eq!(first[0].dealer_location, "Dallas, TX");
    }

    #[test]
    fn test_fewer_dealers_than_limit() {
        let catalog = CatalogRepository::builtin().unwrap();
        let vehicle = catalog.find_vehicle("prius-2025-le").unwrap();
        let dealers: Vec<&Dealer> = catalog.dealers().iter().take(1).collect();

        let offers = generate_offers(vehicle, &dealers, &mut StdRng::seed_from_u64(1));
        assert_eq!(offers.len(), 1);
    }
}
