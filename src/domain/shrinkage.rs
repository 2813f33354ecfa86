//! Fabric loss after processing, for a whole length of cloth.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShrinkageSummary {
    pub loss_m: f64,
    pub usable_m: f64,
    /// Meters lost per meter of raw cloth; 0 for an empty length.
    pub loss_per_meter: f64,
}

pub fn shrinkage_summary(total_length_m: f64, shrinkage_pct: f64) -> ShrinkageSummary {
    let loss_m = total_length_m * (shrinkage_pct / 100.0);
    let usable_m = total_length_m - loss_m;
    let loss_per_meter = if total_length_m > 0.0 {
        loss_m / total_length_m
    } else {
        0.0
    };

    ShrinkageSummary {
        loss_m,
        usable_m,
        loss_per_meter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usable_plus_loss_equals_total() {
        let summary = shrinkage_summary(250.0, 4.0);
        assert_eq!(summary.loss_m, 10.0);
        assert_eq!(summary.usable_m, 240.0);
        assert_eq!(summary.loss_per_meter, 0.04);
    }

    #[test]
    fn empty_length_never_divides_by_zero() {
        let summary = shrinkage_summary(0.0, 5.0);
        assert_eq!(summary.loss_per_meter, 0.0);
        assert!(summary.loss_per_meter.is_finite());
    }
}
