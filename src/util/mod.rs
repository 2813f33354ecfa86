use std::sync::atomic::{AtomicU64, Ordering};

pub mod assets;
pub mod format;

static ID_COUNTER: AtomicU64 = AtomicU64::new(1);

pub fn generate_id(prefix: &str) -> String {
    format!("{prefix}-{}", next_id())
}

/// Monotonically increasing id source for user-managed list entries.
pub fn next_id() -> u64 {
    ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Boundary coercion for numeric form fields: anything that does not parse
/// becomes 0 instead of an error. Part of every field's contract.
pub fn parse_or_zero(input: &str) -> f64 {
    input.trim().parse().unwrap_or(0.0)
}

/// Same coercion for whole-number fields (quantities).
pub fn parse_count(input: &str) -> u32 {
    input.trim().parse().unwrap_or(0)
}

/// Rounds to two decimals, the precision of every persisted monetary field.
pub fn round2(value: f64) -> f64 {
    if value.is_finite() {
        (value * 100.0).round() / 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_coerces_to_zero() {
        assert_eq!(parse_or_zero(""), 0.0);
        assert_eq!(parse_or_zero("abc"), 0.0);
        assert_eq!(parse_or_zero(" 12.5 "), 12.5);
        assert_eq!(parse_count("-3"), 0);
        assert_eq!(parse_count("42"), 42);
    }

    #[test]
    fn round2_guards_non_finite() {
        assert_eq!(round2(1.005 + 1.0), 2.01);
        assert_eq!(round2(f64::NAN), 0.0);
        assert_eq!(round2(f64::INFINITY), 0.0);
    }

    #[test]
    fn ids_are_strictly_increasing() {
        let a = next_id();
        let b = next_id();
        assert!(b > a);
    }
}
