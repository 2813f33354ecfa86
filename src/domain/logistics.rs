//! Two-stage delivery cost apportionment.
//!
//! Stage 1 (market to factory) covers the whole raw purchase, so only the
//! slice sent for processing is attributed to this lot. Stage 2 belongs to
//! the lot entirely. The combined cost spreads across the produced sizes by
//! their equivalent-unit weight factors.

use super::entities::ScarfSize;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogisticsInputs {
    pub total_raw_fabric_m: f64,
    pub stage1_delivery_cost: f64,
    pub fabric_for_processing_m: f64,
    pub stage2_delivery_cost: f64,
    pub qty_90: u32,
    pub qty_50: u32,
}

impl Default for LogisticsInputs {
    fn default() -> Self {
        Self {
            total_raw_fabric_m: 1000.0,
            stage1_delivery_cost: 200.0,
            fabric_for_processing_m: 165.0,
            stage2_delivery_cost: 122.0,
            qty_90: 100,
            qty_50: 50,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LogisticsBreakdown {
    pub stage1_cost_for_lot: f64,
    pub total_lot_cost: f64,
    pub equivalent_units: f64,
    pub per_piece_90: f64,
    pub per_piece_50: f64,
}

pub fn apportion_delivery(inputs: &LogisticsInputs) -> LogisticsBreakdown {
    let stage1_cost_for_lot = if inputs.total_raw_fabric_m > 0.0 {
        (inputs.fabric_for_processing_m / inputs.total_raw_fabric_m) * inputs.stage1_delivery_cost
    } else {
        0.0
    };
    let total_lot_cost = stage1_cost_for_lot + inputs.stage2_delivery_cost;

    let equivalent_units = inputs.qty_90 as f64 * ScarfSize::Square90.weight_factor()
        + inputs.qty_50 as f64 * ScarfSize::Square50.weight_factor();

    let per_equivalent_unit = if equivalent_units > 0.0 {
        total_lot_cost / equivalent_units
    } else {
        0.0
    };

    LogisticsBreakdown {
        stage1_cost_for_lot,
        total_lot_cost,
        equivalent_units,
        per_piece_90: per_equivalent_unit * ScarfSize::Square90.weight_factor(),
        per_piece_50: per_equivalent_unit * ScarfSize::Square50.weight_factor(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn worked_lot_example() {
        let breakdown = apportion_delivery(&LogisticsInputs::default());

        // 165/1000 of the 200 stage-1 bill
        assert!(approx(breakdown.stage1_cost_for_lot, 33.0));
        assert!(approx(breakdown.total_lot_cost, 155.0));
        assert!(approx(breakdown.equivalent_units, 113.25));
        assert!(approx(breakdown.per_piece_90, 155.0 / 113.25));
        assert!(approx(breakdown.per_piece_50, 155.0 / 113.25 * 0.265));
    }

    #[test]
    fn zero_raw_fabric_short_circuits_stage1() {
        let inputs = LogisticsInputs {
            total_raw_fabric_m: 0.0,
            ..LogisticsInputs::default()
        };
        let breakdown = apportion_delivery(&inputs);
        assert_eq!(breakdown.stage1_cost_for_lot, 0.0);
        assert!(approx(breakdown.total_lot_cost, 122.0));
        assert!(breakdown.per_piece_90.is_finite());
    }

    #[test]
    fn zero_equivalent_units_yield_zero_per_piece() {
        let inputs = LogisticsInputs {
            qty_90: 0,
            qty_50: 0,
            ..LogisticsInputs::default()
        };
        let breakdown = apportion_delivery(&inputs);
        assert_eq!(breakdown.per_piece_90, 0.0);
        assert_eq!(breakdown.per_piece_50, 0.0);
    }
}
