//! Per-piece cost and selling price derivation.
//!
//! A fixed chain of formulas: raw material through production, finishing,
//! overheads, and margin. Recomputed synchronously on every input change.

use super::entities::{SavedPrice, ScarfSize};

#[derive(Clone, Debug, PartialEq)]
pub struct CostInputs {
    pub size: ScarfSize,
    /// Meters of fabric consumed per piece. Filled from the size preset but
    /// kept explicit so a custom length can flow through the same chain.
    pub fabric_per_piece_m: f64,
    pub fabric_price: f64,
    pub printing_price: f64,
    pub shrinkage_pct: f64,

    pub cutting_cost: f64,
    pub stitching_cost: f64,
    pub ironing_cost: f64,
    pub packaging_cost: f64,
    pub delivery_cost: f64,

    pub defective_pct: f64,
    pub returns_pct: f64,
    pub dead_stock_pct: f64,
    pub office_maintenance_pct: f64,
    pub agent_commission_pct: f64,
    pub sales_offer_pct: f64,
    /// Flat per-piece amount, not a percentage.
    pub advertisement_cost: f64,
    pub profit_margin_pct: f64,
}

impl CostInputs {
    /// Workshop defaults with the preset for `size` already applied.
    pub fn for_size(size: ScarfSize) -> Self {
        let mut inputs = Self {
            size,
            fabric_per_piece_m: 0.0,
            fabric_price: 38.0,
            printing_price: 20.0,
            shrinkage_pct: 2.0,
            cutting_cost: 2.0,
            stitching_cost: 0.0,
            ironing_cost: 0.0,
            packaging_cost: 0.0,
            delivery_cost: 69.0,
            defective_pct: 2.0,
            returns_pct: 10.0,
            dead_stock_pct: 5.0,
            office_maintenance_pct: 10.0,
            agent_commission_pct: 0.0,
            sales_offer_pct: 0.0,
            advertisement_cost: 5.0,
            profit_margin_pct: 25.0,
        };
        inputs.apply_preset(size);
        inputs
    }

    /// Switching the size selector replaces the preset-backed fields and
    /// leaves everything the user typed untouched.
    pub fn apply_preset(&mut self, size: ScarfSize) {
        let preset = size.preset();
        self.size = size;
        self.fabric_per_piece_m = preset.fabric_per_piece_m;
        self.stitching_cost = preset.stitching_cost;
        self.ironing_cost = preset.ironing_cost;
        self.packaging_cost = preset.packaging_cost;
    }

    pub fn overhead_pct_total(&self) -> f64 {
        self.defective_pct
            + self.returns_pct
            + self.dead_stock_pct
            + self.office_maintenance_pct
            + self.agent_commission_pct
            + self.sales_offer_pct
    }
}

impl Default for CostInputs {
    fn default() -> Self {
        Self::for_size(ScarfSize::Square90)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CostBreakdown {
    pub fabric_cost: f64,
    pub printing_cost: f64,
    pub production_cost: f64,
    pub finished_cost: f64,
    pub percentage_overheads_value: f64,
    pub overhead_value: f64,
    pub grand_total: f64,
    pub profit: f64,
    pub selling_price: f64,
}

impl CostBreakdown {
    /// Snapshot persisted by the Save action for the combo offer screen.
    pub fn saved_price(&self) -> SavedPrice {
        SavedPrice {
            selling_price: self.selling_price,
            base_cost: self.grand_total,
            production_cost: self.production_cost,
            overhead_cost: self.overhead_value,
        }
        .rounded()
    }
}

pub fn compute_cost(inputs: &CostInputs) -> CostBreakdown {
    let fabric_cost =
        inputs.fabric_per_piece_m * inputs.fabric_price * (1.0 + inputs.shrinkage_pct / 100.0);
    let printing_cost = inputs.printing_price * inputs.fabric_per_piece_m;
    let production_cost = fabric_cost
        + printing_cost
        + inputs.cutting_cost
        + inputs.stitching_cost
        + inputs.ironing_cost;
    let finished_cost = production_cost + inputs.packaging_cost + inputs.delivery_cost;

    let percentage_overheads_value = finished_cost * (inputs.overhead_pct_total() / 100.0);
    let overhead_value = percentage_overheads_value + inputs.advertisement_cost;
    let grand_total = finished_cost + overhead_value;

    let profit = grand_total * (inputs.profit_margin_pct / 100.0);
    let selling_price = grand_total + profit;

    CostBreakdown {
        fabric_cost,
        printing_cost,
        production_cost,
        finished_cost,
        percentage_overheads_value,
        overhead_value,
        grand_total,
        profit,
        selling_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn default_inputs_follow_the_chain() {
        let breakdown = compute_cost(&CostInputs::default());

        // 1m * 38/m * 1.02 shrinkage
        assert!(approx(breakdown.fabric_cost, 38.76));
        assert!(approx(breakdown.printing_cost, 20.0));
        // fabric + printing + cutting 2 + stitching 15 + ironing 2
        assert!(approx(breakdown.production_cost, 77.76));
        // + packaging 5 + delivery 69
        assert!(approx(breakdown.finished_cost, 151.76));
        // 27% of finished + 5 flat advertisement
        assert!(approx(breakdown.overhead_value, 151.76 * 0.27 + 5.0));
        assert!(approx(breakdown.grand_total, 151.76 + breakdown.overhead_value));
        assert!(approx(breakdown.selling_price, breakdown.grand_total * 1.25));
    }

    #[test]
    fn cost_chain_is_monotone_for_non_negative_inputs() {
        let breakdown = compute_cost(&CostInputs::default());
        assert!(breakdown.selling_price >= breakdown.grand_total);
        assert!(breakdown.grand_total >= breakdown.finished_cost);
        assert!(breakdown.finished_cost >= breakdown.production_cost);
        assert!(breakdown.production_cost >= 0.0);
    }

    #[test]
    fn advertisement_is_a_flat_addend() {
        let mut inputs = CostInputs::default();
        inputs.defective_pct = 0.0;
        inputs.returns_pct = 0.0;
        inputs.dead_stock_pct = 0.0;
        inputs.office_maintenance_pct = 0.0;
        inputs.agent_commission_pct = 0.0;
        inputs.sales_offer_pct = 0.0;
        inputs.advertisement_cost = 5.0;

        let breakdown = compute_cost(&inputs);
        assert!(approx(breakdown.overhead_value, 5.0));
    }

    #[test]
    fn recomputation_is_bit_identical() {
        let inputs = CostInputs::for_size(ScarfSize::Square50);
        assert_eq!(compute_cost(&inputs), compute_cost(&inputs));
    }

    #[test]
    fn preset_switch_keeps_user_entered_fields() {
        let mut inputs = CostInputs::default();
        inputs.fabric_price = 44.0;
        inputs.apply_preset(ScarfSize::Square50);

        assert_eq!(inputs.fabric_price, 44.0);
        assert_eq!(inputs.stitching_cost, 8.0);
        assert_eq!(inputs.packaging_cost, 4.0);
        assert_eq!(inputs.fabric_per_piece_m, 0.27);
    }

    #[test]
    fn saved_price_snapshot_is_rounded() {
        let breakdown = compute_cost(&CostInputs::default());
        let saved = breakdown.saved_price();
        assert_eq!(saved.production_cost, 77.76);
        assert!(approx(saved.base_cost * 100.0, (saved.base_cost * 100.0).round()));
    }
}
