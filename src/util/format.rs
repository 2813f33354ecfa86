//! Display formatting: Indian-locale currency and fixed-point quantities.

/// Formats a rupee amount with the Indian digit grouping (₹12,34,567.89).
/// Non-finite values render as ₹0.00 so a degenerate computation never leaks
/// NaN into the UI.
pub fn format_inr(value: f64) -> String {
    format!("₹{}", grouped_amount(value))
}

/// ASCII variant for PDF text; Helvetica/WinAnsi cannot encode U+20B9.
pub fn format_inr_ascii(value: f64) -> String {
    format!("Rs {}", grouped_amount(value))
}

fn grouped_amount(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let rupees = cents / 100;
    let fraction = cents % 100;

    let digits = rupees.to_string();
    let grouped = group_indian(&digits);
    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{fraction:02}")
}

// Indian grouping: the last three digits form one group, everything above
// groups in pairs (1,23,45,678).
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let head_bytes = head.as_bytes();
    let mut end = head_bytes.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Fixed-point display for physical quantities (meters, percentages).
pub fn format_number(value: f64, decimals: usize) -> String {
    if value.is_finite() {
        format!("{value:.decimals$}")
    } else {
        format!("{:.decimals$}", 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indian_grouping() {
        assert_eq!(format_inr(0.0), "₹0.00");
        assert_eq!(format_inr(494.52), "₹494.52");
        assert_eq!(format_inr(1234.5), "₹1,234.50");
        assert_eq!(format_inr(1234567.891), "₹12,34,567.89");
        assert_eq!(format_inr(100000.0), "₹1,00,000.00");
    }

    #[test]
    fn nan_renders_as_zero() {
        assert_eq!(format_inr(f64::NAN), "₹0.00");
        assert_eq!(format_number(f64::INFINITY, 2), "0.00");
    }

    #[test]
    fn negative_amounts_keep_grouping() {
        assert_eq!(format_inr(-1234.5), "₹-1,234.50");
    }

    #[test]
    fn ascii_variant_for_reports() {
        assert_eq!(format_inr_ascii(395.61), "Rs 395.61");
    }
}
