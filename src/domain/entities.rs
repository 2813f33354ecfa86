use serde::{Deserialize, Serialize};

use crate::util::round2;

/// The two scarf sizes the workshop produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScarfSize {
    #[default]
    Square90,
    Square50,
}

impl ScarfSize {
    pub const ALL: [ScarfSize; 2] = [ScarfSize::Square90, ScarfSize::Square50];

    pub fn label(&self) -> &'static str {
        match self {
            ScarfSize::Square90 => "90x90 cm",
            ScarfSize::Square50 => "50x50 cm",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.label() == label)
    }

    /// Side length in centimeters (scarves are square).
    pub fn side_cm(&self) -> f64 {
        match self {
            ScarfSize::Square90 => 90.0,
            ScarfSize::Square50 => 50.0,
        }
    }

    /// Relative fabric consumption, used to apportion shared delivery cost
    /// across a mixed lot. The large scarf is the reference unit.
    pub fn weight_factor(&self) -> f64 {
        match self {
            ScarfSize::Square90 => 1.0,
            ScarfSize::Square50 => 0.265,
        }
    }

    pub fn preset(&self) -> SizePreset {
        match self {
            ScarfSize::Square90 => SizePreset {
                printing_size: "93.54x93.54 cm",
                stitching_cost: 15.0,
                ironing_cost: 2.0,
                packaging_cost: 5.0,
                fabric_per_piece_m: 1.0,
            },
            ScarfSize::Square50 => SizePreset {
                printing_size: "53.54x53.54 cm",
                stitching_cost: 8.0,
                ironing_cost: 1.0,
                packaging_cost: 4.0,
                // Two 53.54 cm panels per meter of width, four pieces across.
                fabric_per_piece_m: 0.27,
            },
        }
    }
}

/// Named configuration applied when the size selector changes: printing size
/// plus the default operational costs and fabric length for that size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizePreset {
    pub printing_size: &'static str,
    pub stitching_cost: f64,
    pub ironing_cost: f64,
    pub packaging_cost: f64,
    pub fabric_per_piece_m: f64,
}

/// Pricing snapshot written by the cost calculator's Save action and read by
/// the combo offer screen. Field names match the stored JSON records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPrice {
    pub selling_price: f64,
    pub base_cost: f64,
    pub production_cost: f64,
    pub overhead_cost: f64,
}

impl SavedPrice {
    /// Every persisted monetary field carries two-decimal precision.
    pub fn rounded(&self) -> Self {
        Self {
            selling_price: round2(self.selling_price),
            base_cost: round2(self.base_cost),
            production_cost: round2(self.production_cost),
            overhead_cost: round2(self.overhead_cost),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_labels_round_trip() {
        for size in ScarfSize::ALL {
            assert_eq!(ScarfSize::from_label(size.label()), Some(size));
        }
        assert_eq!(ScarfSize::from_label("70x70 cm"), None);
    }

    #[test]
    fn saved_price_serializes_with_original_field_names() {
        let record = SavedPrice {
            selling_price: 494.52,
            base_cost: 395.61,
            production_cost: 77.76,
            overhead_cost: 45.98,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"sellingPrice\""));
        assert!(json.contains("\"baseCost\""));
        assert!(json.contains("\"productionCost\""));
        assert!(json.contains("\"overheadCost\""));
    }

    #[test]
    fn rounding_clamps_to_two_decimals() {
        let record = SavedPrice {
            selling_price: 247.16952,
            base_cost: 197.73521,
            production_cost: 77.759999,
            overhead_cost: 45.9752,
        };
        let rounded = record.rounded();
        assert_eq!(rounded.selling_price, 247.17);
        assert_eq!(rounded.base_cost, 197.74);
        assert_eq!(rounded.production_cost, 77.76);
        assert_eq!(rounded.overhead_cost, 45.98);
    }
}
