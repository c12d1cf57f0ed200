//! Intérprete de consultas en lenguaje natural
//!
//! Convierte texto libre ("hybrid SUVs under $40k") en un `FilterRecord`.
//! Es una función total: nunca falla, lo que no reconoce queda sin restricción.
//!
//! Cada dimensión se evalúa de forma independiente con una lista ordenada de reglas.
//! El orden es parte del comportamiento observable:
//! - tipo, combustible, precio, marca y modelo: gana la primera regla que aplica
//! - tracción: se evalúan todas y la última que aplica sobrescribe (AWD → 4WD → FWD)

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::models::{Drivetrain, FilterRecord, FuelType};

lazy_static! {
    // "under $40,000", "under 35k", "under $30 thousand"
    static ref UNDER_PRICE_REGEX: Regex =
        Regex::new(r"(?i)under\s*\$?(\d{1,3}(?:,\d{3})+|\d+)\s*(k|thousand)?\b").unwrap();

    // "$30,000 - $40,000", "30k-45k"
    static ref PRICE_RANGE_REGEX: Regex = Regex::new(
        r"(?i)\$?(\d{1,3}(?:,\d{3})+|\d+)\s*(k|thousand)?\s*-\s*\$?(\d{1,3}(?:,\d{3})+|\d+)\s*(k|thousand)?\b"
    )
    .unwrap();

    static ref BUDGET_REGEX: Regex = Regex::new(r"(?i)affordable|cheap|budget").unwrap();
    static ref LUXURY_REGEX: Regex = Regex::new(r"(?i)luxury|premium|high-end").unwrap();

    static ref MPG_REGEX: Regex = Regex::new(r"(?i)(\d+)\s*mpg").unwrap();

    // marcas y modelos anclados al inicio de palabra: "affordable" no es "ford",
    // pero "mazda3" y "rav4s" siguen coincidiendo
    static ref MAKE_PATTERNS: Vec<(Regex, &'static str)> = MAKES
        .iter()
        .map(|make| (word_start_pattern(&[*make]).unwrap(), *make))
        .collect();

    static ref MODEL_PATTERNS: Vec<(Regex, &'static str)> = MODELS
        .iter()
        .map(|model| (word_start_pattern(&[model.replace(' ', "").as_str(), *model]).unwrap(), *model))
        .collect();
}

/// Precio máximo implícito en "affordable", "cheap", "budget"
pub const BUDGET_MAX_PRICE: u64 = 30_000;
/// Precio mínimo implícito en "luxury", "premium", "high-end"
pub const LUXURY_MIN_PRICE: u64 = 50_000;
/// MPG mínimo implícito en "efficient", "good gas mileage"
pub const EFFICIENT_MIN_MPG: u32 = 35;

const SUV_KEYWORDS: &[&str] = &["suv", "sport utility"];

/// Refinamientos del tipo SUV, se aplican en orden y el último que coincide gana
const SUV_REFINEMENTS: &[(&[&str], &str)] = &[
    (&["compact"], "Compact SUV"),
    (&["midsize", "mid-size"], "Midsize SUV"),
    (&["full-size", "full size"], "Full-Size SUV"),
];

/// Tipos distintos de SUV, primera coincidencia gana
const TYPE_RULES: &[(&[&str], &str)] = &[
    (&["sedan"], "Sedan"),
    (&["truck"], "Midsize Truck"),
    (&["compact"], "Compact"),
];

const DRIVETRAIN_RULES: &[(&[&str], Drivetrain)] = &[
    (&["awd", "all-wheel drive"], Drivetrain::Awd),
    (&["4wd", "four-wheel drive", "4 wheel"], Drivetrain::FourWd),
    (&["fwd", "front-wheel drive"], Drivetrain::Fwd),
];

const PLUG_IN_KEYWORDS: &[&str] = &["plug-in", "plugin", "phev"];

/// Reglas de combustible cuando no aparece "hybrid", primera coincidencia gana
const FUEL_RULES: &[(&[&str], FuelType)] = &[
    (&["electric", "ev"], FuelType::Electric),
    (&["gas", "gasoline"], FuelType::Gasoline),
];

const EFFICIENCY_KEYWORDS: &[&str] = &["efficient", "good gas mileage"];

const MAKES: &[&str] = &["toyota", "mazda", "honda", "ford", "chevrolet", "nissan"];

const MODELS: &[&str] = &[
    "camry",
    "corolla",
    "rav4",
    "prius",
    "highlander",
    "accord",
    "mazda3",
    "mazda 3",
    "explorer",
];

/// Límites de precio producidos por una regla
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct PriceBounds {
    min: Option<u64>,
    max: Option<u64>,
}

type PriceRule = fn(&str) -> Option<PriceBounds>;

/// Reglas de precio en orden; sólo se aplica la primera que coincide
const PRICE_RULES: &[PriceRule] = &[under_price, price_range, budget_price, luxury_price];

/// Interpretar una consulta libre
pub fn parse(query: &str) -> FilterRecord {
    let q = query.to_lowercase();
    let price = PRICE_RULES
        .iter()
        .find_map(|rule| rule(&q))
        .unwrap_or_default();

    FilterRecord {
        vehicle_type: parse_type(&q),
        drivetrain: parse_drivetrain(&q),
        fuel_type: parse_fuel_type(&q),
        min_price: price.min,
        max_price: price.max,
        min_mpg: parse_min_mpg(&q),
        make: parse_make(&q),
        model: parse_model(&q),
    }
}

fn contains_any(q: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| q.contains(k))
}

fn parse_type(q: &str) -> Option<String> {
    if contains_any(q, SUV_KEYWORDS) {
        let refined = SUV_REFINEMENTS
            .iter()
            .filter(|(keywords, _)| contains_any(q, keywords))
            .last()
            .map(|(_, refined)| *refined)
            .unwrap_or("SUV");
        return Some(refined.to_string());
    }

    TYPE_RULES
        .iter()
        .find(|(keywords, _)| contains_any(q, keywords))
        .map(|(_, vehicle_type)| vehicle_type.to_string())
}

fn parse_drivetrain(q: &str) -> Option<Drivetrain> {
    DRIVETRAIN_RULES
        .iter()
        .filter(|(keywords, _)| contains_any(q, keywords))
        .last()
        .map(|(_, drivetrain)| *drivetrain)
}

fn parse_fuel_type(q: &str) -> Option<FuelType> {
    if q.contains("hybrid") {
        return if contains_any(q, PLUG_IN_KEYWORDS) {
            Some(FuelType::PlugInHybrid)
        } else {
            Some(FuelType::Hybrid)
        };
    }

    FUEL_RULES
        .iter()
        .find(|(keywords, _)| contains_any(q, keywords))
        .map(|(_, fuel)| *fuel)
}

/// Importe de un grupo capturado, escalado x1000 si lleva sufijo "k"/"thousand"
fn amount(caps: &Captures, digits: usize, suffix: usize) -> Option<u64> {
    let value: u64 = caps.get(digits)?.as_str().replace(',', "").parse().ok()?;
    if caps.get(suffix).is_some() {
        value.checked_mul(1000)
    } else {
        Some(value)
    }
}

// Una regla cuyo patrón coincide consume el precio aunque el importe no sea
// representable; las reglas siguientes ya no se evalúan.
fn under_price(q: &str) -> Option<PriceBounds> {
    let caps = UNDER_PRICE_REGEX.captures(q)?;
    Some(PriceBounds {
        min: None,
        max: amount(&caps, 1, 2),
    })
}

/// Los extremos se toman en el orden escrito, sin reordenar ("$45k - $30k")
fn price_range(q: &str) -> Option<PriceBounds> {
    let caps = PRICE_RANGE_REGEX.captures(q)?;
    Some(PriceBounds {
        min: amount(&caps, 1, 2),
        max: amount(&caps, 3, 4),
    })
}

fn budget_price(q: &str) -> Option<PriceBounds> {
    BUDGET_REGEX.is_match(q).then_some(PriceBounds {
        min: None,
        max: Some(BUDGET_MAX_PRICE),
    })
}

fn luxury_price(q: &str) -> Option<PriceBounds> {
    LUXURY_REGEX.is_match(q).then_some(PriceBounds {
        min: Some(LUXURY_MIN_PRICE),
        max: None,
    })
}

fn parse_min_mpg(q: &str) -> Option<u32> {
    if let Some(caps) = MPG_REGEX.captures(q) {
        // un número que no cabe en u32 se ignora
        if let Ok(mpg) = caps[1].parse() {
            return Some(mpg);
        }
    }
    contains_any(q, EFFICIENCY_KEYWORDS).then_some(EFFICIENT_MIN_MPG)
}

fn word_start_pattern(alternatives: &[&str]) -> Result<Regex, regex::Error> {
    let alternation = alternatives
        .iter()
        .map(|alt| regex::escape(alt))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{})", alternation))
}

fn parse_make(q: &str) -> Option<String> {
    MAKE_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(q))
        .map(|(_, make)| capitalize(make))
}

// Gana el primero del vocabulario, no el primero en el texto
fn parse_model(q: &str) -> Option<String> {
    MODEL_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(q))
        .map(|(_, model)| model.to_string())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hybrid_suvs_under_price() {
        let filters = parse("Show me hybrid SUVs under $40,000");
        assert_eq!(
            filters,
            FilterRecord {
                vehicle_type: Some("SUV".to_string()),
                fuel_type: Some(FuelType::Hybrid),
                max_price: Some(40_000),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_affordable_sedan() {
        let filters = parse("affordable sedan");
        assert_eq!(
            filters,
            FilterRecord {
                vehicle_type: Some("Sedan".to_string()),
                max_price: Some(30_000),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_luxury_awd_truck() {
        let filters = parse("luxury AWD truck");
        assert_eq!(
            filters,
            FilterRecord {
                vehicle_type: Some("Midsize Truck".to_string()),
                drivetrain: Some(Drivetrain::Awd),
                min_price: Some(50_000),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_empty_query_has_no_constraints() {
        assert!(parse("").is_empty());
        assert!(parse("hello there").is_empty());
    }

    #[test]
    fn test_suv_refinements() {
        assert_eq!(parse("compact suv").vehicle_type.as_deref(), Some("Compact SUV"));
        assert_eq!(parse("mid-size SUV").vehicle_type.as_deref(), Some("Midsize SUV"));
        assert_eq!(parse("full size sport utility").vehicle_type.as_deref(), Some("Full-Size SUV"));
        // el último refinamiento que coincide gana
        assert_eq!(
            parse("compact or full-size suv").vehicle_type.as_deref(),
            Some("Full-Size SUV")
        );
    }

    #[test]
    fn test_type_priority() {
        assert_eq!(parse("sedan or truck").vehicle_type.as_deref(), Some("Sedan"));
        assert_eq!(parse("a compact truck").vehicle_type.as_deref(), Some("Midsize Truck"));
        assert_eq!(parse("compact car").vehicle_type.as_deref(), Some("Compact"));
        assert_eq!(parse("suv not a sedan").vehicle_type.as_deref(), Some("SUV"));
    }

    #[test]
    fn test_drivetrain_last_match_wins() {
        assert_eq!(parse("awd").drivetrain, Some(Drivetrain::Awd));
        assert_eq!(parse("all-wheel drive or 4WD").drivetrain, Some(Drivetrain::FourWd));
        assert_eq!(parse("awd or fwd").drivetrain, Some(Drivetrain::Fwd));
        assert_eq!(parse("4 wheel drive").drivetrain, Some(Drivetrain::FourWd));
    }

    #[test]
    fn test_fuel_type_branches() {
        assert_eq!(parse("plug-in hybrid").fuel_type, Some(FuelType::PlugInHybrid));
        assert_eq!(parse("PHEV hybrid").fuel_type, Some(FuelType::PlugInHybrid));
        // sin "hybrid", "plug-in" no basta
        assert_eq!(parse("plug-in car").fuel_type, None);
        assert_eq!(parse("electric car").fuel_type, Some(FuelType::Electric));
        assert_eq!(parse("gasoline engine").fuel_type, Some(FuelType::Gasoline));
        // hybrid tiene prioridad sobre electric
        assert_eq!(parse("hybrid or electric").fuel_type, Some(FuelType::Hybrid));
    }

    #[test]
    fn test_price_rules() {
        assert_eq!(parse("under 35k").max_price, Some(35_000));
        assert_eq!(parse("under $30 thousand").max_price, Some(30_000));
        assert_eq!(parse("under 25000").max_price, Some(25_000));

        let range = parse("between $30k - $45k");
        assert_eq!(range.min_price, Some(30_000));
        assert_eq!(range.max_price, Some(45_000));

        let range = parse("$30,000-$40,000");
        assert_eq!(range.min_price, Some(30_000));
        assert_eq!(range.max_price, Some(40_000));

        // sufijos independientes por lado
        let mixed = parse("25k - 40000");
        assert_eq!(mixed.min_price, Some(25_000));
        assert_eq!(mixed.max_price, Some(40_000));
    }

    #[test]
    fn test_price_first_rule_wins() {
        // "under" antes que "luxury": no se fija mínimo
        let filters = parse("luxury under $60,000");
        assert_eq!(filters.max_price, Some(60_000));
        assert_eq!(filters.min_price, None);

        let filters = parse("cheap premium");
        assert_eq!(filters.max_price, Some(30_000));
        assert_eq!(filters.min_price, None);
    }

    #[test]
    fn test_mpg() {
        assert_eq!(parse("at least 40 mpg").min_mpg, Some(40));
        assert_eq!(parse("50mpg please").min_mpg, Some(50));
        assert_eq!(parse("something efficient").min_mpg, Some(35));
        assert_eq!(parse("good gas mileage").min_mpg, Some(35));
        assert_eq!(parse("fast").min_mpg, None);
    }

    #[test]
    fn test_make_and_model() {
        let filters = parse("Toyota Camry");
        assert_eq!(filters.make.as_deref(), Some("Toyota"));
        assert_eq!(filters.model.as_deref(), Some("camry"));

        assert_eq!(parse("a chevrolet").make.as_deref(), Some("Chevrolet"));
        assert_eq!(parse("RAV4 please").model.as_deref(), Some("rav4"));
        assert_eq!(parse("mazda3").model.as_deref(), Some("mazda3"));
        assert_eq!(parse("the mazda 3").model.as_deref(), Some("mazda 3"));
        // vocabulario en orden: camry antes que accord
        assert_eq!(parse("accord or camry").model.as_deref(), Some("camry"));
    }

    #[test]
    fn test_make_needs_word_start() {
        // "affordable" contiene "ford"
        assert_eq!(parse("affordable sedan").make, None);
        assert_eq!(parse("an affordable Ford").make.as_deref(), Some("Ford"));
        assert_eq!(parse("mazda3 hatchback").make.as_deref(), Some("Mazda"));
        assert_eq!(parse("two hondas").make.as_deref(), Some("Honda"));
        assert_eq!(parse("the rav4s").model.as_deref(), Some("rav4"));
        assert_eq!(parse("unaccordingly").model, None);
    }

    #[test]
    fn test_inverted_range_is_kept_as_written() {
        let filters = parse("$45k - $30k");
        assert_eq!(filters.min_price, Some(45_000));
        assert_eq!(filters.max_price, Some(30_000));
    }

    #[test]
    fn test_overflowing_under_amount_still_wins() {
        // el patrón "under" coincide: "cheap" ya no fija un máximo
        let filters = parse("cheap under 99999999999999999999999");
        assert_eq!(filters.max_price, None);
        assert_eq!(filters.min_price, None);

        let filters = parse("luxury under 99999999999999999999k");
        assert_eq!(filters.min_price, None);
    }
}
