//! Bundled-sale pricing: two sizes sold together at a discount off their
//! summed individual prices.

use super::entities::{SavedPrice, ScarfSize};
use crate::util::round2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComboInputs {
    pub qty_90: u32,
    pub qty_50: u32,
    pub discount_pct: f64,
    pub price_90: f64,
    pub cost_90: f64,
    pub price_50: f64,
    pub cost_50: f64,
    pub packaging_cost: f64,
    pub delivery_cost: f64,
}

impl Default for ComboInputs {
    fn default() -> Self {
        Self {
            qty_90: 1,
            qty_50: 1,
            discount_pct: 10.0,
            price_90: 494.52,
            cost_90: 395.61,
            price_50: 210.51,
            cost_50: 168.41,
            packaging_cost: 11.0,
            delivery_cost: 69.0,
        }
    }
}

impl ComboInputs {
    /// Pre-populates one size's price and cost from a saved snapshot,
    /// keeping the two-decimal precision of the stored record.
    pub fn apply_saved(&mut self, size: ScarfSize, saved: &SavedPrice) {
        let saved = saved.rounded();
        match size {
            ScarfSize::Square90 => {
                self.price_90 = round2(saved.selling_price);
                self.cost_90 = round2(saved.base_cost);
            }
            ScarfSize::Square50 => {
                self.price_50 = round2(saved.selling_price);
                self.cost_50 = round2(saved.base_cost);
            }
        }
    }
}

/// Production/overhead split behind a saved unit cost. Not part of the
/// pricing math; shown next to the cost field it explains.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SavedCostSplit {
    pub production_cost: f64,
    pub overhead_cost: f64,
}

impl SavedCostSplit {
    pub fn from_saved(saved: &SavedPrice) -> Self {
        Self {
            production_cost: round2(saved.production_cost),
            overhead_cost: round2(saved.overhead_cost),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ComboBreakdown {
    pub total_pieces: u32,
    pub total_individual_price: f64,
    pub total_cost: f64,
    pub discount_amount: f64,
    pub final_combo_price: f64,
    pub customer_saving: f64,
    pub profit: f64,
}

pub fn price_combo(inputs: &ComboInputs) -> ComboBreakdown {
    let total_pieces = inputs.qty_90.saturating_add(inputs.qty_50);

    let total_individual_price =
        inputs.qty_90 as f64 * inputs.price_90 + inputs.qty_50 as f64 * inputs.price_50;
    let total_cost = inputs.qty_90 as f64 * inputs.cost_90
        + inputs.qty_50 as f64 * inputs.cost_50
        + inputs.packaging_cost
        + inputs.delivery_cost;

    let discount_amount = total_individual_price * (inputs.discount_pct / 100.0);
    let final_combo_price = total_individual_price - discount_amount;

    ComboBreakdown {
        total_pieces,
        total_individual_price,
        total_cost,
        discount_amount,
        final_combo_price,
        customer_saving: discount_amount,
        profit: final_combo_price - total_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn default_combo() {
        let breakdown = price_combo(&ComboInputs::default());
        assert_eq!(breakdown.total_pieces, 2);
        assert!(approx(breakdown.total_individual_price, 705.03));
        assert!(approx(breakdown.total_cost, 395.61 + 168.41 + 11.0 + 69.0));
        assert!(approx(breakdown.discount_amount, 70.503));
        assert!(approx(breakdown.final_combo_price, 705.03 - 70.503));
        assert!(approx(
            breakdown.profit,
            breakdown.final_combo_price - breakdown.total_cost
        ));
    }

    #[test]
    fn zero_discount_means_no_saving() {
        let inputs = ComboInputs {
            discount_pct: 0.0,
            ..ComboInputs::default()
        };
        let breakdown = price_combo(&inputs);
        assert_eq!(breakdown.final_combo_price, breakdown.total_individual_price);
        assert_eq!(breakdown.customer_saving, 0.0);
    }

    #[test]
    fn piece_count_saturates_instead_of_overflowing() {
        let inputs = ComboInputs {
            qty_90: u32::MAX,
            qty_50: 2,
            ..ComboInputs::default()
        };
        let breakdown = price_combo(&inputs);
        assert_eq!(breakdown.total_pieces, u32::MAX);
        assert!(breakdown.total_cost.is_finite());
    }

    #[test]
    fn cost_split_prefill_keeps_two_decimals() {
        let saved = SavedPrice {
            selling_price: 494.52,
            base_cost: 395.61,
            production_cost: 77.7649,
            overhead_cost: 45.9752,
        };
        let split = SavedCostSplit::from_saved(&saved);
        assert_eq!(split.production_cost, 77.76);
        assert_eq!(split.overhead_cost, 45.98);
    }

    #[test]
    fn saved_snapshot_prefills_with_two_decimals() {
        let mut inputs = ComboInputs::default();
        inputs.apply_saved(
            ScarfSize::Square90,
            &SavedPrice {
                selling_price: 247.16952,
                base_cost: 197.73521,
                production_cost: 77.76,
                overhead_cost: 45.98,
            },
        );
        assert_eq!(inputs.price_90, 247.17);
        assert_eq!(inputs.cost_90, 197.74);
        // The other size keeps its assumptions.
        assert_eq!(inputs.price_50, 210.51);
    }
}
