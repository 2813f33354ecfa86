//! One-shot PDF reports for the cost and combo screens.
//!
//! Rendering happens fully in memory; the file is only written once the
//! whole document assembled, so a failed export never leaves a partial
//! file behind.

use std::{fs, io, path::PathBuf};

use printpdf::{BuiltinFont, Mm, PdfDocument};
use thiserror::Error;

use crate::domain::{ComboBreakdown, ComboInputs, CostBreakdown, CostInputs};
use crate::util::format::{format_inr_ascii, format_number};

pub const COST_REPORT_FILENAME: &str = "cost-calculation.pdf";
pub const COMBO_REPORT_FILENAME: &str = "combo-offer-analysis.pdf";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to assemble PDF: {0}")]
    Pdf(String),
    #[error("no writable export directory")]
    NoExportDir,
    #[error(transparent)]
    Io(#[from] io::Error),
}

enum Row {
    Section(&'static str),
    Item(String, String),
    Emphasis(String, String),
}

impl Row {
    fn item(label: impl Into<String>, value: impl Into<String>) -> Self {
        Row::Item(label.into(), value.into())
    }

    fn emphasis(label: impl Into<String>, value: impl Into<String>) -> Self {
        Row::Emphasis(label.into(), value.into())
    }
}

pub fn render_cost_report(
    inputs: &CostInputs,
    breakdown: &CostBreakdown,
) -> Result<Vec<u8>, ReportError> {
    let rows = vec![
        Row::Section("Product"),
        Row::item("Scarf size", inputs.size.label()),
        Row::item(
            "Fabric per piece",
            format!("{} m", format_number(inputs.fabric_per_piece_m, 2)),
        ),
        Row::item("Fabric price", format_inr_ascii(inputs.fabric_price)),
        Row::item("Printing price", format_inr_ascii(inputs.printing_price)),
        Row::item(
            "Shrinkage",
            format!("{}%", format_number(inputs.shrinkage_pct, 2)),
        ),
        Row::Section("Operational costs per piece"),
        Row::item("Cutting", format_inr_ascii(inputs.cutting_cost)),
        Row::item("Stitching", format_inr_ascii(inputs.stitching_cost)),
        Row::item("Ironing", format_inr_ascii(inputs.ironing_cost)),
        Row::item("Packaging", format_inr_ascii(inputs.packaging_cost)),
        Row::item("Delivery", format_inr_ascii(inputs.delivery_cost)),
        Row::Section("Overheads and margin"),
        Row::item(
            "Percentage overheads",
            format!("{}%", format_number(inputs.overhead_pct_total(), 2)),
        ),
        Row::item("Advertisement", format_inr_ascii(inputs.advertisement_cost)),
        Row::item(
            "Profit margin",
            format!("{}%", format_number(inputs.profit_margin_pct, 2)),
        ),
        Row::Section("Breakdown"),
        Row::item("Raw material cost", format_inr_ascii(breakdown.fabric_cost)),
        Row::item("Printing cost", format_inr_ascii(breakdown.printing_cost)),
        Row::item(
            "Production cost",
            format_inr_ascii(breakdown.production_cost),
        ),
        Row::item(
            "Finished product cost",
            format_inr_ascii(breakdown.finished_cost),
        ),
        Row::item("Overhead cost", format_inr_ascii(breakdown.overhead_value)),
        Row::item("Grand total cost", format_inr_ascii(breakdown.grand_total)),
        Row::item("Target profit", format_inr_ascii(breakdown.profit)),
        Row::emphasis(
            "Final selling price",
            format_inr_ascii(breakdown.selling_price),
        ),
    ];

    render_rows("Scarf Cost Calculation", &rows)
}

pub fn render_combo_report(
    inputs: &ComboInputs,
    breakdown: &ComboBreakdown,
) -> Result<Vec<u8>, ReportError> {
    let rows = vec![
        Row::Section("Combo configuration"),
        Row::item("90x90 cm scarves", inputs.qty_90.to_string()),
        Row::item("50x50 cm scarves", inputs.qty_50.to_string()),
        Row::item(
            "Combo discount",
            format!("{}%", format_number(inputs.discount_pct, 2)),
        ),
        Row::Section("Pricing assumptions"),
        Row::item("Selling price (90x90)", format_inr_ascii(inputs.price_90)),
        Row::item("Unit cost (90x90)", format_inr_ascii(inputs.cost_90)),
        Row::item("Selling price (50x50)", format_inr_ascii(inputs.price_50)),
        Row::item("Unit cost (50x50)", format_inr_ascii(inputs.cost_50)),
        Row::item("Combo packaging", format_inr_ascii(inputs.packaging_cost)),
        Row::item("Combo delivery", format_inr_ascii(inputs.delivery_cost)),
        Row::Section("Analysis"),
        Row::item(
            "Total individual price",
            format_inr_ascii(breakdown.total_individual_price),
        ),
        Row::item("Total cost", format_inr_ascii(breakdown.total_cost)),
        Row::item(
            "Customer saving",
            format_inr_ascii(breakdown.customer_saving),
        ),
        Row::item("Profit", format_inr_ascii(breakdown.profit)),
        Row::emphasis(
            "Final combo price",
            format_inr_ascii(breakdown.final_combo_price),
        ),
    ];

    render_rows("Combo Offer Analysis", &rows)
}

/// Writes an assembled report into the user's download directory (home as a
/// fallback) under its fixed filename, returning the full path.
pub fn export_report(filename: &str, bytes: &[u8]) -> Result<PathBuf, ReportError> {
    let dir = dirs::download_dir()
        .or_else(dirs::home_dir)
        .ok_or(ReportError::NoExportDir)?;
    let path = dir.join(filename);
    fs::write(&path, bytes)?;
    Ok(path)
}

fn render_rows(title: &str, rows: &[Row]) -> Result<Vec<u8>, ReportError> {
    // A4 portrait.
    let (doc, page, layer) = PdfDocument::new(title, Mm(210.0), Mm(297.0), "report");
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|err| ReportError::Pdf(err.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|err| ReportError::Pdf(err.to_string()))?;

    let layer = doc.get_page(page).get_layer(layer);

    let mut y = 277.0;
    layer.use_text(title, 16.0, Mm(16.0), Mm(y), &bold);
    y -= 12.0;

    for row in rows {
        match row {
            Row::Section(heading) => {
                y -= 3.0;
                layer.use_text(*heading, 12.0, Mm(16.0), Mm(y), &bold);
                y -= 7.0;
            }
            Row::Item(label, value) => {
                layer.use_text(label.as_str(), 10.0, Mm(20.0), Mm(y), &regular);
                layer.use_text(value.as_str(), 10.0, Mm(130.0), Mm(y), &regular);
                y -= 6.0;
            }
            Row::Emphasis(label, value) => {
                y -= 2.0;
                layer.use_text(label.as_str(), 12.0, Mm(20.0), Mm(y), &bold);
                layer.use_text(value.as_str(), 12.0, Mm(130.0), Mm(y), &bold);
                y -= 8.0;
            }
        }
    }

    doc.save_to_bytes()
        .map_err(|err| ReportError::Pdf(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{compute_cost, price_combo};

    #[test]
    fn cost_report_is_a_pdf() {
        let inputs = CostInputs::default();
        let breakdown = compute_cost(&inputs);
        let bytes = render_cost_report(&inputs, &breakdown).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn combo_report_is_a_pdf() {
        let inputs = ComboInputs::default();
        let breakdown = price_combo(&inputs);
        let bytes = render_combo_report(&inputs, &breakdown).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
