//! Fabric length planning: how many meters a batch of scarf panels needs.
//!
//! Panels are cut in rows across the roll. Pieces per row come from floor
//! division over the effective panel width, rows from ceiling division over
//! the quantity; the trailing gap is not part of the last row.

use thiserror::Error;

/// A standard roll width the market actually stocks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FabricWidth {
    pub label: &'static str,
    pub cm: f64,
}

pub const FABRIC_WIDTHS: [FabricWidth; 12] = [
    FabricWidth { label: "36 inches / 91cm", cm: 91.0 },
    FabricWidth { label: "40 inches / 102cm", cm: 102.0 },
    FabricWidth { label: "42 inches / 107cm", cm: 107.0 },
    FabricWidth { label: "44 inches / 112cm", cm: 112.0 },
    FabricWidth { label: "46 inches / 117cm", cm: 117.0 },
    FabricWidth { label: "50 inches / 127cm", cm: 127.0 },
    FabricWidth { label: "52 inches / 132cm", cm: 132.0 },
    FabricWidth { label: "54 inches / 137cm", cm: 137.0 },
    FabricWidth { label: "56 inches / 142cm", cm: 142.0 },
    FabricWidth { label: "58 inches / 147cm", cm: 147.0 },
    FabricWidth { label: "59 inches / 150cm", cm: 150.0 },
    FabricWidth { label: "60 inches / 152cm", cm: 152.0 },
];

/// One user-managed row in the sizes list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelEntry {
    pub id: u64,
    pub width_cm: f64,
    pub height_cm: f64,
    pub quantity: u32,
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Invalid inputs")]
    InvalidInputs,
    #[error("Invalid gap")]
    InvalidGap,
    #[error("Scarf wider than fabric")]
    PieceWiderThanFabric,
}

/// Result for a single entry. An errored entry contributes zero length but
/// never aborts the batch.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanelLayout {
    pub pieces_per_row: u32,
    pub rows: u32,
    pub length_m: f64,
    pub error: Option<LayoutError>,
}

impl PanelLayout {
    fn errored(error: LayoutError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }
}

pub fn layout_entry(entry: &PanelEntry, fabric_width_cm: f64, gap_cm: f64) -> PanelLayout {
    if entry.width_cm <= 0.0
        || entry.height_cm <= 0.0
        || entry.quantity == 0
        || fabric_width_cm <= 0.0
    {
        return PanelLayout::errored(LayoutError::InvalidInputs);
    }

    let effective_width = entry.width_cm + gap_cm;
    if effective_width <= 0.0 {
        return PanelLayout::errored(LayoutError::InvalidGap);
    }

    let pieces_per_row = ((fabric_width_cm + gap_cm) / effective_width).floor() as i64;
    if pieces_per_row <= 0 {
        return PanelLayout::errored(LayoutError::PieceWiderThanFabric);
    }
    let pieces_per_row = pieces_per_row as u32;

    let rows = entry.quantity.div_ceil(pieces_per_row);
    let length_cm = rows as f64 * (entry.height_cm + gap_cm) - gap_cm;

    PanelLayout {
        pieces_per_row,
        rows,
        length_m: length_cm / 100.0,
        error: None,
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConsumptionSummary {
    /// Per-entry layouts in list order, keyed by entry id.
    pub layouts: Vec<(u64, PanelLayout)>,
    pub total_before_shrinkage_m: f64,
    pub shrinkage_allowance_m: f64,
    pub total_with_shrinkage_m: f64,
}

pub fn plan_consumption(
    entries: &[PanelEntry],
    fabric_width_cm: f64,
    gap_cm: f64,
    shrinkage_pct: f64,
) -> ConsumptionSummary {
    let layouts: Vec<(u64, PanelLayout)> = entries
        .iter()
        .map(|entry| (entry.id, layout_entry(entry, fabric_width_cm, gap_cm)))
        .collect();

    let total_before_shrinkage_m: f64 = layouts
        .iter()
        .filter(|(_, layout)| layout.error.is_none())
        .map(|(_, layout)| layout.length_m)
        .sum();

    let total_with_shrinkage_m = total_before_shrinkage_m * (1.0 + shrinkage_pct / 100.0);

    ConsumptionSummary {
        layouts,
        total_before_shrinkage_m,
        shrinkage_allowance_m: total_with_shrinkage_m - total_before_shrinkage_m,
        total_with_shrinkage_m,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    fn entry(width: f64, height: f64, quantity: u32) -> PanelEntry {
        PanelEntry {
            id: 1,
            width_cm: width,
            height_cm: height,
            quantity,
        }
    }

    #[test]
    fn ninety_cm_panels_on_a_107_roll() {
        let layout = layout_entry(&entry(90.0, 90.0, 100), 107.0, 0.7);
        assert_eq!(layout.error, None);
        assert_eq!(layout.pieces_per_row, 1);
        assert_eq!(layout.rows, 100);
        // 100 rows * 90.7cm minus the trailing gap
        assert!(approx(layout.length_m, (100.0 * 90.7 - 0.7) / 100.0));
    }

    #[test]
    fn two_small_panels_share_a_row() {
        let layout = layout_entry(&entry(50.0, 50.0, 100), 107.0, 0.7);
        assert_eq!(layout.pieces_per_row, 2);
        assert_eq!(layout.rows, 50);
        assert!(approx(layout.length_m, (50.0 * 50.7 - 0.7) / 100.0));
    }

    #[test]
    fn piece_wider_than_fabric_is_flagged_not_fatal() {
        let layout = layout_entry(&entry(160.0, 90.0, 10), 107.0, 0.7);
        assert_eq!(layout.error, Some(LayoutError::PieceWiderThanFabric));
        assert_eq!(layout.length_m, 0.0);
    }

    #[test]
    fn degenerate_dimensions_are_flagged() {
        for bad in [
            entry(0.0, 90.0, 100),
            entry(90.0, 0.0, 100),
            entry(90.0, 90.0, 0),
        ] {
            let layout = layout_entry(&bad, 107.0, 0.7);
            assert_eq!(layout.error, Some(LayoutError::InvalidInputs));
        }
        let layout = layout_entry(&entry(90.0, 90.0, 100), 0.0, 0.7);
        assert_eq!(layout.error, Some(LayoutError::InvalidInputs));
    }

    #[test]
    fn negative_gap_swallowing_the_panel_is_flagged() {
        let layout = layout_entry(&entry(90.0, 90.0, 100), 107.0, -95.0);
        assert_eq!(layout.error, Some(LayoutError::InvalidGap));
    }

    #[test]
    fn aggregate_skips_errored_entries_and_applies_shrinkage() {
        let entries = [
            PanelEntry { id: 1, width_cm: 90.0, height_cm: 90.0, quantity: 100 },
            PanelEntry { id: 2, width_cm: 160.0, height_cm: 90.0, quantity: 10 },
        ];
        let summary = plan_consumption(&entries, 107.0, 0.7, 2.0);

        let expected_base = (100.0 * 90.7 - 0.7) / 100.0;
        assert!(approx(summary.total_before_shrinkage_m, expected_base));
        assert!(approx(summary.total_with_shrinkage_m, expected_base * 1.02));
        assert!(approx(
            summary.shrinkage_allowance_m,
            summary.total_with_shrinkage_m - summary.total_before_shrinkage_m
        ));
        assert_eq!(summary.layouts.len(), 2);
        assert!(summary.layouts[1].1.error.is_some());
    }
}
