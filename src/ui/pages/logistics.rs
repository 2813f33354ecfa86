use dioxus::prelude::*;

use crate::{
    domain::{apportion_delivery, LogisticsInputs},
    ui::components::{
        cost_input::CostInput,
        result_row::{ResultPanel, ResultRow},
    },
    util::{format::format_inr, format::format_number, parse_count, parse_or_zero},
};

#[component]
pub fn FabricLogisticsPage() -> Element {
    let defaults = LogisticsInputs::default();

    let mut raw_fabric_input = use_signal(|| defaults.total_raw_fabric_m.to_string());
    let mut stage1_cost_input = use_signal(|| defaults.stage1_delivery_cost.to_string());
    let mut processing_input = use_signal(|| defaults.fabric_for_processing_m.to_string());
    let mut stage2_cost_input = use_signal(|| defaults.stage2_delivery_cost.to_string());
    let mut qty_90_input = use_signal(|| defaults.qty_90.to_string());
    let mut qty_50_input = use_signal(|| defaults.qty_50.to_string());

    let inputs = LogisticsInputs {
        total_raw_fabric_m: parse_or_zero(&raw_fabric_input()),
        stage1_delivery_cost: parse_or_zero(&stage1_cost_input()),
        fabric_for_processing_m: parse_or_zero(&processing_input()),
        stage2_delivery_cost: parse_or_zero(&stage2_cost_input()),
        qty_90: parse_count(&qty_90_input()),
        qty_50: parse_count(&qty_50_input()),
    };
    let breakdown = apportion_delivery(&inputs);

    rsx! {
        div { class: "page",
            section { class: "panel",
                h2 { "Stage 1: market to factory" }
                div { class: "field-grid",
                    CostInput {
                        label: "Total raw fabric bought",
                        value: raw_fabric_input(),
                        oninput: move |raw: String| raw_fabric_input.set(raw),
                        unit: "m",
                    }
                    CostInput {
                        label: "Stage 1 delivery cost",
                        value: stage1_cost_input(),
                        oninput: move |raw: String| stage1_cost_input.set(raw),
                        unit: "₹",
                    }
                    CostInput {
                        label: "Fabric sent for processing",
                        value: processing_input(),
                        oninput: move |raw: String| processing_input.set(raw),
                        unit: "m",
                    }
                }
            }

            section { class: "panel",
                h2 { "Stage 2: processor to workshop" }
                div { class: "field-grid",
                    CostInput {
                        label: "Stage 2 delivery cost",
                        value: stage2_cost_input(),
                        oninput: move |raw: String| stage2_cost_input.set(raw),
                        unit: "₹",
                    }
                    CostInput {
                        label: "90x90 cm scarves produced",
                        value: qty_90_input(),
                        oninput: move |raw: String| qty_90_input.set(raw),
                        unit: "pcs",
                    }
                    CostInput {
                        label: "50x50 cm scarves produced",
                        value: qty_50_input(),
                        oninput: move |raw: String| qty_50_input.set(raw),
                        unit: "pcs",
                    }
                }
            }

            section { class: "panel",
                h2 { "Apportionment" }
                ResultRow {
                    label: "Stage 1 cost for this lot",
                    value: format_inr(breakdown.stage1_cost_for_lot),
                }
                ResultRow {
                    label: "Total delivery cost for the lot",
                    value: format_inr(breakdown.total_lot_cost),
                    emphasized: true,
                }
                ResultRow {
                    label: "Equivalent units",
                    value: format_number(breakdown.equivalent_units, 2),
                }
                ResultPanel {
                    title: "Delivery cost per 90x90 piece",
                    value: format_inr(breakdown.per_piece_90),
                    description: format!(
                        "{} per 50x50 piece",
                        format_inr(breakdown.per_piece_50),
                    ),
                }
            }
        }
    }
}
