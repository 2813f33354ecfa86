use dioxus::prelude::*;

use crate::{
    domain::{price_combo, ComboInputs, SavedCostSplit, SavedPrice, ScarfSize},
    infra::{
        pdf,
        store::{self, Store},
    },
    ui::components::{
        cost_input::CostInput,
        result_row::{ResultPanel, ResultRow},
        toast::{push_toast, ToastKind, ToastMessage},
    },
    util::{format::format_inr, format::format_number, parse_count, parse_or_zero},
};

#[component]
pub fn ComboOfferPage() -> Element {
    let store = use_context::<Signal<Store>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    // Saved snapshots from the cost screen pre-fill the per-size figures
    // once, on mount; after that the fields are the user's to edit. The
    // production/overhead split behind each saved cost rides along for
    // display under the cost fields.
    let (initial, split_90, split_50, prefilled) = use_hook(|| {
        let mut inputs = ComboInputs::default();
        let mut split_90 = SavedCostSplit::default();
        let mut split_50 = SavedCostSplit::default();
        let mut prefilled = false;
        let st = store.peek();
        if let Some(saved) = st.get_record::<SavedPrice>(store::KEY_PRICE_90) {
            inputs.apply_saved(ScarfSize::Square90, &saved);
            split_90 = SavedCostSplit::from_saved(&saved);
            prefilled = true;
        }
        if let Some(saved) = st.get_record::<SavedPrice>(store::KEY_PRICE_50) {
            inputs.apply_saved(ScarfSize::Square50, &saved);
            split_50 = SavedCostSplit::from_saved(&saved);
            prefilled = true;
        }
        (inputs, split_90, split_50, prefilled)
    });

    let mut qty_90_input = use_signal(|| initial.qty_90.to_string());
    let mut qty_50_input = use_signal(|| initial.qty_50.to_string());
    let mut discount_input = use_signal(|| initial.discount_pct.to_string());
    let mut price_90_input = use_signal(|| format!("{:.2}", initial.price_90));
    let mut cost_90_input = use_signal(|| format!("{:.2}", initial.cost_90));
    let mut price_50_input = use_signal(|| format!("{:.2}", initial.price_50));
    let mut cost_50_input = use_signal(|| format!("{:.2}", initial.cost_50));
    let mut packaging_input = use_signal(|| initial.packaging_cost.to_string());
    let mut delivery_input = use_signal(|| initial.delivery_cost.to_string());

    let inputs = ComboInputs {
        qty_90: parse_count(&qty_90_input()),
        qty_50: parse_count(&qty_50_input()),
        discount_pct: parse_or_zero(&discount_input()),
        price_90: parse_or_zero(&price_90_input()),
        cost_90: parse_or_zero(&cost_90_input()),
        price_50: parse_or_zero(&price_50_input()),
        cost_50: parse_or_zero(&cost_50_input()),
        packaging_cost: parse_or_zero(&packaging_input()),
        delivery_cost: parse_or_zero(&delivery_input()),
    };
    let breakdown = price_combo(&inputs);
    let profit_class = if breakdown.profit < 0.0 {
        "result-row result-row-loss"
    } else {
        "result-row"
    };

    let on_download = {
        let toasts = toasts.clone();
        let inputs = inputs;
        move |_| {
            match pdf::render_combo_report(&inputs, &breakdown)
                .and_then(|bytes| pdf::export_report(pdf::COMBO_REPORT_FILENAME, &bytes))
            {
                Ok(path) => push_toast(
                    toasts.clone(),
                    ToastKind::Success,
                    format!("Report saved to {}", path.display()),
                ),
                Err(err) => println!("Combo report export failed: {err}"),
            }
        }
    };

    rsx! {
        div { class: "page",
            section { class: "panel",
                h2 { "Combo configuration" }
                if prefilled {
                    p { class: "panel-note", "Prices and costs pre-filled from the cost screen." }
                }
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
                    CostInput {
                        label: "Combo discount",
                        value: discount_input(),
                        oninput: move |raw: String| discount_input.set(raw),
                        unit: "%",
                    }
                }
            }

            section { class: "panel",
                h2 { "Per-size pricing" }
                div { class: "field-grid",
                    CostInput {
                        label: "Selling price (90x90)",
                        value: price_90_input(),
                        oninput: move |raw: String| price_90_input.set(raw),
                        unit: "₹",
                    }
                    CostInput {
                        label: "Unit cost (90x90)",
                        value: cost_90_input(),
                        oninput: move |raw: String| cost_90_input.set(raw),
                        unit: "₹",
                        description: format!(
                            "production {} + overhead {}",
                            format_inr(split_90.production_cost),
                            format_inr(split_90.overhead_cost),
                        ),
                    }
                    CostInput {
                        label: "Selling price (50x50)",
                        value: price_50_input(),
                        oninput: move |raw: String| price_50_input.set(raw),
                        unit: "₹",
                    }
                    CostInput {
                        label: "Unit cost (50x50)",
                        value: cost_50_input(),
                        oninput: move |raw: String| cost_50_input.set(raw),
                        unit: "₹",
                        description: format!(
                            "production {} + overhead {}",
                            format_inr(split_50.production_cost),
                            format_inr(split_50.overhead_cost),
                        ),
                    }
                    CostInput {
                        label: "Combo packaging",
                        value: packaging_input(),
                        oninput: move |raw: String| packaging_input.set(raw),
                        unit: "₹",
                    }
                    CostInput {
                        label: "Combo delivery",
                        value: delivery_input(),
                        oninput: move |raw: String| delivery_input.set(raw),
                        unit: "₹",
                    }
                }
            }

            section { class: "panel",
                h2 { "Analysis" }
                ResultRow {
                    label: "Pieces in the combo",
                    value: breakdown.total_pieces.to_string(),
                }
                ResultRow {
                    label: "Total individual price",
                    value: format_inr(breakdown.total_individual_price),
                }
                ResultRow {
                    label: "Total cost",
                    value: format_inr(breakdown.total_cost),
                }
                ResultRow {
                    label: "Customer saves",
                    value: format!(
                        "{} ({}%)",
                        format_inr(breakdown.customer_saving),
                        format_number(inputs.discount_pct, 2),
                    ),
                }
                div { class: "{profit_class}",
                    span { class: "result-label", "Profit" }
                    span { class: "result-value", "{format_inr(breakdown.profit)}" }
                }
                ResultPanel {
                    title: "Final combo price",
                    value: format_inr(breakdown.final_combo_price),
                    description: format!("{} pieces per combo", breakdown.total_pieces),
                }
                div { class: "panel-actions",
                    button { class: "btn", onclick: on_download, "Download PDF" }
                }
            }
        }
    }
}
