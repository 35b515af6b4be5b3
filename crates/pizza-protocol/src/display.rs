//! Text shown in the dashboard tables

/// Currency sign printed after revenue figures
pub const CURRENCY: &str = "₿";

/// Revenue cell text, e.g. `"1,234.5 ₿"`
///
/// Figures are grouped by thousands and rounded to at most three decimals.
/// A missing or non-finite figure prints the currency sign alone.
pub fn revenue_label(revenue: Option<f64>) -> String {
    match revenue {
        Some(value) if value.is_finite() => format!("{} {CURRENCY}", grouped_decimal(value)),
        _ => CURRENCY.to_string(),
    }
}

fn grouped_decimal(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let negative = value.is_sign_negative() && (whole != "0" || !fraction.is_empty());
    let sign = if negative { "-" } else { "" };
    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction}")
    }
}
