use once_cell::sync::Lazy;
use regex::Regex;

use crate::config;

/// Amounts written as "2k", "1,5K" or "3.5k", in thousands of BRL.
static THOUSANDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+(?:[.,]\d+)?)k").expect("thousands pattern is valid"));

/// Turns a price label into an hour estimate at the configured hourly rate.
///
/// One amount gives `≈ Nh`, two or more give a range built from the first
/// two, and a label without amounts is left for manual analysis.
pub fn estimate_hours_label(price: &str) -> String {
    let amounts: Vec<f64> = THOUSANDS
        .captures_iter(price)
        .filter_map(|caps| caps[1].replace(',', ".").parse().ok())
        .collect();

    match amounts.as_slice() {
        [] => "Sob análise".to_string(),
        [single] => format!("≈ {}h", to_hours(*single)),
        [low, high, ..] => format!("≈ {}h a {}h", to_hours(*low), to_hours(*high)),
    }
}

fn to_hours(thousands: f64) -> i64 {
    (thousands * 1000.0 / config::HOURLY_RATE).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_amount() {
        assert_eq!(estimate_hours_label("R$ 3k"), "≈ 15h");
        assert_eq!(estimate_hours_label("a partir de 4K"), "≈ 20h");
    }

    #[test]
    fn range_uses_first_two_amounts() {
        assert_eq!(estimate_hours_label("R$ 2k – 4k"), "≈ 10h a 20h");
        assert_eq!(estimate_hours_label("1k - 2k - 9k"), "≈ 5h a 10h");
    }

    #[test]
    fn decimal_comma_and_rounding() {
        assert_eq!(estimate_hours_label("R$ 1,5k"), "≈ 8h");
        assert_eq!(estimate_hours_label("R$ 2.2k"), "≈ 11h");
    }

    #[test]
    fn no_amount_needs_analysis() {
        assert_eq!(estimate_hours_label("Sob consulta"), "Sob análise");
        assert_eq!(estimate_hours_label(""), "Sob análise");
    }
}
