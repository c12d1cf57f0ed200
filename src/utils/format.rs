//! Formato de importes para textos del asistente

/// Precio con separador de miles: 30000 -> "30,000"
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Diferencia con signo explícito: +2,000 / -4 / 0
pub fn format_signed(value: i64) -> String {
    let magnitude = format_thousands(value.unsigned_abs());
    match value.signum() {
        1 => format!("+{}", magnitude),
        -1 => format!("-{}", magnitude),
        _ => magnitude,
    }
}

/// Igual que `format_signed` para magnitudes fraccionarias (MPG): +2.5 / -4 / 0
pub fn format_signed_decimal(value: f64) -> String {
    if value > 0.0 {
        format!("+{}", value)
    } else if value < 0.0 {
        format!("{}", value)
    } else {
        "0".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(30000), "30,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_signed() {
        assert_eq!(format_signed(2000), "+2,000");
        assert_eq!(format_signed(-4), "-4");
        assert_eq!(format_signed(0), "0");
    }

    #[test]
    fn test_format_signed_decimal() {
        assert_eq!(format_signed_decimal(2.5), "+2.5");
        assert_eq!(format_signed_decimal(-4.0), "-4");
        assert_eq!(format_signed_decimal(-0.0), "0");
    }
}
