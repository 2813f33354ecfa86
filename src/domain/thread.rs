//! Sewing thread consumption and reel purchasing for a mixed batch.

use super::entities::ScarfSize;

pub const INCH_TO_METER: f64 = 0.0254;

/// Reel lengths the supplier sells.
pub const REEL_LENGTHS_M: [u32; 2] = [300, 800];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThreadInputs {
    pub qty_90: u32,
    pub qty_50: u32,
    pub reel_length_m: u32,
    pub wastage_inches: f64,
    pub reel_price_retail: f64,
    pub reel_price_bulk: f64,
}

impl Default for ThreadInputs {
    fn default() -> Self {
        Self {
            qty_90: 100,
            qty_50: 50,
            reel_length_m: 800,
            wastage_inches: 12.0,
            reel_price_retail: 7.0,
            reel_price_bulk: 6.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ThreadPlan {
    pub wastage_m: f64,
    /// Meters of thread per piece, per size (double-run hem over the
    /// perimeter plus the wastage allowance).
    pub consumption_90_m: f64,
    pub consumption_50_m: f64,
    pub thread_90_m: f64,
    pub thread_50_m: f64,
    pub total_thread_m: f64,
    pub reels_needed: u32,
    pub remaining_thread_m: f64,
    pub cost_retail: f64,
    pub cost_bulk: f64,
    /// Whole pieces one reel covers, per size.
    pub capacity_90: u32,
    pub capacity_50: u32,
}

fn consumption_m(size: ScarfSize, wastage_m: f64) -> f64 {
    ((size.side_cm() * 4.0) / 100.0) * 2.0 + wastage_m
}

pub fn plan_thread(inputs: &ThreadInputs) -> ThreadPlan {
    // A zero-length reel would divide everything by zero; report an empty plan.
    if inputs.reel_length_m == 0 {
        return ThreadPlan::default();
    }
    let reel_length = inputs.reel_length_m as f64;

    let wastage_m = inputs.wastage_inches * INCH_TO_METER;
    let consumption_90_m = consumption_m(ScarfSize::Square90, wastage_m);
    let consumption_50_m = consumption_m(ScarfSize::Square50, wastage_m);

    let thread_90_m = inputs.qty_90 as f64 * consumption_90_m;
    let thread_50_m = inputs.qty_50 as f64 * consumption_50_m;
    let total_thread_m = thread_90_m + thread_50_m;

    let reels_needed = (total_thread_m / reel_length).ceil() as u32;
    let remaining_thread_m = reels_needed as f64 * reel_length - total_thread_m;

    ThreadPlan {
        wastage_m,
        consumption_90_m,
        consumption_50_m,
        thread_90_m,
        thread_50_m,
        total_thread_m,
        reels_needed,
        remaining_thread_m,
        cost_retail: reels_needed as f64 * inputs.reel_price_retail,
        cost_bulk: reels_needed as f64 * inputs.reel_price_bulk,
        capacity_90: (reel_length / consumption_90_m).floor() as u32,
        capacity_50: (reel_length / consumption_50_m).floor() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn batch_of_mixed_sizes() {
        let plan = plan_thread(&ThreadInputs::default());

        assert!(approx(plan.wastage_m, 0.3048));
        assert!(approx(plan.consumption_90_m, 7.5048));
        assert!(approx(plan.consumption_50_m, 4.3048));
        assert!(approx(plan.thread_90_m, 750.48));
        assert!(approx(plan.thread_50_m, 215.24));
        assert!(approx(plan.total_thread_m, 965.72));
        assert_eq!(plan.reels_needed, 2);
        assert!(approx(plan.remaining_thread_m, 634.28));
        assert!(approx(plan.cost_retail, 14.0));
        assert!(approx(plan.cost_bulk, 12.0));
    }

    #[test]
    fn per_reel_capacity_uses_floor_division() {
        let plan = plan_thread(&ThreadInputs::default());
        assert_eq!(plan.capacity_90, 106);
        assert_eq!(plan.capacity_50, 185);
    }

    #[test]
    fn zero_reel_length_yields_an_empty_plan() {
        let inputs = ThreadInputs {
            reel_length_m: 0,
            ..ThreadInputs::default()
        };
        assert_eq!(plan_thread(&inputs), ThreadPlan::default());
    }

    #[test]
    fn empty_batch_needs_no_reels() {
        let inputs = ThreadInputs {
            qty_90: 0,
            qty_50: 0,
            ..ThreadInputs::default()
        };
        let plan = plan_thread(&inputs);
        assert_eq!(plan.reels_needed, 0);
        assert_eq!(plan.cost_retail, 0.0);
    }
}
