use dioxus::prelude::*;

use crate::{
    domain::{plan_thread, ThreadInputs, REEL_LENGTHS_M},
    ui::components::{
        cost_input::CostInput,
        result_row::{ResultPanel, ResultRow},
    },
    util::{format::format_inr, format::format_number, parse_count, parse_or_zero},
};

#[component]
pub fn SewingThreadsPage() -> Element {
    let defaults = ThreadInputs::default();

    let mut qty_90_input = use_signal(|| defaults.qty_90.to_string());
    let mut qty_50_input = use_signal(|| defaults.qty_50.to_string());
    let mut reel_length = use_signal(|| defaults.reel_length_m);
    let mut wastage_input = use_signal(|| defaults.wastage_inches.to_string());

    let inputs = ThreadInputs {
        qty_90: parse_count(&qty_90_input()),
        qty_50: parse_count(&qty_50_input()),
        reel_length_m: reel_length(),
        wastage_inches: parse_or_zero(&wastage_input()),
        ..defaults
    };
    let plan = plan_thread(&inputs);

    rsx! {
        div { class: "page",
            section { class: "panel",
                h2 { "Batch" }
                div { class: "field-grid",
                    CostInput {
                        label: "90x90 cm scarves",
                        value: qty_90_input(),
                        oninput: move |raw: String| qty_90_input.set(raw),
                        unit: "pcs",
                    }
                    CostInput {
                        label: "50x50 cm scarves",
                        value: qty_50_input(),
                        oninput: move |raw: String| qty_50_input.set(raw),
                        unit: "pcs",
                    }
                    div { class: "field",
                        label { class: "field-label", "Reel length" }
                        select {
                            class: "field-input",
                            onchange: move |evt| {
                                if let Ok(length) = evt.value().parse::<u32>() {
                                    reel_length.set(length);
                                }
                            },
                            for length in REEL_LENGTHS_M {
                                option {
                                    value: "{length}",
                                    selected: length == reel_length(),
                                    "{length} m"
                                }
                            }
                        }
                    }
                    CostInput {
                        label: "Wastage per piece",
                        value: wastage_input(),
                        oninput: move |raw: String| wastage_input.set(raw),
                        unit: "in",
                    }
                }
            }

            section { class: "panel",
                h2 { "Thread consumption" }
                ResultRow {
                    label: "Per 90x90 piece",
                    value: format!("{} m", format_number(plan.consumption_90_m, 4)),
                }
                ResultRow {
                    label: "Per 50x50 piece",
                    value: format!("{} m", format_number(plan.consumption_50_m, 4)),
                }
                ResultRow {
                    label: "90x90 batch",
                    value: format!("{} m", format_number(plan.thread_90_m, 2)),
                }
                ResultRow {
                    label: "50x50 batch",
                    value: format!("{} m", format_number(plan.thread_50_m, 2)),
                }
                ResultRow {
                    label: "Total thread",
                    value: format!("{} m", format_number(plan.total_thread_m, 2)),
                    emphasized: true,
                }
            }

            section { class: "panel",
                h2 { "Purchasing" }
                ResultPanel {
                    title: "Reels to buy",
                    value: plan.reels_needed.to_string(),
                    description: format!(
                        "{} m left over after the batch",
                        format_number(plan.remaining_thread_m, 2),
                    ),
                }
                ResultRow {
                    label: "Retail ({format_inr(inputs.reel_price_retail)}/reel)",
                    value: format_inr(plan.cost_retail),
                }
                ResultRow {
                    label: "Bulk ({format_inr(inputs.reel_price_bulk)}/reel)",
                    value: format_inr(plan.cost_bulk),
                }
                ResultRow {
                    label: "One reel covers",
                    value: format!(
                        "{} pcs of 90x90 or {} pcs of 50x50",
                        plan.capacity_90, plan.capacity_50,
                    ),
                }
            }
        }
    }
}
