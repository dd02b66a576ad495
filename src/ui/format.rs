// ---------------------------------------------------------------------------
// Display formatting for metrics and cards
// ---------------------------------------------------------------------------

pub const PRICE_UNAVAILABLE: &str = "Price not available";

/// Price rounded to whole euros, e.g. `€180`.
pub fn format_price(price: f64) -> String {
    format!("€{price:.0}")
}

/// Average price metric, `N/A` when undefined.
pub fn format_avg_price(avg: Option<f64>) -> String {
    avg.map_or_else(|| "N/A".to_string(), format_price)
}

/// Count with thousands separators, e.g. `1,234`.
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_get_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn prices_round_to_whole_units() {
        assert_eq!(format_price(179.6), "€180");
        assert_eq!(format_avg_price(Some(75.0)), "€75");
        assert_eq!(format_avg_price(None), "N/A");
    }
}
