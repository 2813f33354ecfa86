use dioxus::prelude::*;

use crate::{
    domain::{compute_cost, CostInputs, ScarfSize},
    infra::{
        pdf,
        store::{self, Store},
    },
    ui::{
        components::{
            cost_input::CostInput,
            result_row::{ResultPanel, ResultRow},
            toast::{push_toast, ToastKind, ToastMessage},
        },
        pages::{use_shared_shrinkage, write_shared_shrinkage},
    },
    util::{format::format_inr, format::format_number, parse_or_zero},
};

#[component]
pub fn CostPage() -> Element {
    let store = use_context::<Signal<Store>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let defaults = CostInputs::default();

    let mut size = use_signal(|| defaults.size);
    let mut fabric_price_input = use_signal(|| defaults.fabric_price.to_string());
    let mut printing_price_input = use_signal(|| defaults.printing_price.to_string());
    let mut shrinkage_input = use_shared_shrinkage(defaults.shrinkage_pct);

    let mut cutting_input = use_signal(|| defaults.cutting_cost.to_string());
    let mut stitching_input = use_signal(|| defaults.stitching_cost.to_string());
    let mut ironing_input = use_signal(|| defaults.ironing_cost.to_string());
    let mut packaging_input = use_signal(|| defaults.packaging_cost.to_string());
    let mut delivery_input = use_signal(|| defaults.delivery_cost.to_string());

    let mut defective_input = use_signal(|| defaults.defective_pct.to_string());
    let mut returns_input = use_signal(|| defaults.returns_pct.to_string());
    let mut dead_stock_input = use_signal(|| defaults.dead_stock_pct.to_string());
    let mut office_input = use_signal(|| defaults.office_maintenance_pct.to_string());
    let mut commission_input = use_signal(|| defaults.agent_commission_pct.to_string());
    let mut sales_offer_input = use_signal(|| defaults.sales_offer_pct.to_string());
    let mut advertisement_input = use_signal(|| defaults.advertisement_cost.to_string());
    let mut margin_input = use_signal(|| defaults.profit_margin_pct.to_string());

    let preset = size().preset();
    let inputs = CostInputs {
        size: size(),
        fabric_per_piece_m: preset.fabric_per_piece_m,
        fabric_price: parse_or_zero(&fabric_price_input()),
        printing_price: parse_or_zero(&printing_price_input()),
        shrinkage_pct: parse_or_zero(&shrinkage_input()),
        cutting_cost: parse_or_zero(&cutting_input()),
        stitching_cost: parse_or_zero(&stitching_input()),
        ironing_cost: parse_or_zero(&ironing_input()),
        packaging_cost: parse_or_zero(&packaging_input()),
        delivery_cost: parse_or_zero(&delivery_input()),
        defective_pct: parse_or_zero(&defective_input()),
        returns_pct: parse_or_zero(&returns_input()),
        dead_stock_pct: parse_or_zero(&dead_stock_input()),
        office_maintenance_pct: parse_or_zero(&office_input()),
        agent_commission_pct: parse_or_zero(&commission_input()),
        sales_offer_pct: parse_or_zero(&sales_offer_input()),
        advertisement_cost: parse_or_zero(&advertisement_input()),
        profit_margin_pct: parse_or_zero(&margin_input()),
    };
    let breakdown = compute_cost(&inputs);

    let on_size_change = move |evt: FormEvent| {
        if let Some(new_size) = ScarfSize::from_label(&evt.value()) {
            size.set(new_size);
            // The preset replaces its own fields; everything else the user
            // typed stays put.
            let preset = new_size.preset();
            stitching_input.set(preset.stitching_cost.to_string());
            ironing_input.set(preset.ironing_cost.to_string());
            packaging_input.set(preset.packaging_cost.to_string());
        }
    };

    let on_save = {
        let mut store = store.clone();
        let toasts = toasts.clone();
        let current_size = inputs.size;
        move |_| {
            store.with_mut(|st| {
                st.set_record(store::price_key(current_size), &breakdown.saved_price())
            });
            push_toast(
                toasts.clone(),
                ToastKind::Success,
                format!(
                    "Saved {} pricing for the combo offer screen.",
                    current_size.label()
                ),
            );
        }
    };

    let on_download = {
        let mut store = store.clone();
        let toasts = toasts.clone();
        let inputs = inputs.clone();
        move |_| {
            // Download implies save, so the combo screen always sees the
            // figures that went into the report.
            store.with_mut(|st| {
                st.set_record(store::price_key(inputs.size), &breakdown.saved_price())
            });
            match pdf::render_cost_report(&inputs, &breakdown)
                .and_then(|bytes| pdf::export_report(pdf::COST_REPORT_FILENAME, &bytes))
            {
                Ok(path) => push_toast(
                    toasts.clone(),
                    ToastKind::Success,
                    format!("Report saved to {}", path.display()),
                ),
                Err(err) => println!("Cost report export failed: {err}"),
            }
        }
    };

    rsx! {
        div { class: "page",
            section { class: "panel",
                h2 { "Product" }
                div { class: "field-grid",
                    div { class: "field",
                        label { class: "field-label", "Scarf size" }
                        select {
                            class: "field-input",
                            onchange: on_size_change,
                            for option_size in ScarfSize::ALL {
                                option {
                                    value: option_size.label(),
                                    selected: option_size == size(),
                                    "{option_size.label()}"
                                }
                            }
                        }
                    }
                    CostInput {
                        label: "Printing size",
                        value: preset.printing_size.to_string(),
                        oninput: move |_| {},
                        disabled: true,
                    }
                    CostInput {
                        label: "Fabric per piece",
                        value: format_number(preset.fabric_per_piece_m, 2),
                        oninput: move |_| {},
                        unit: "m",
                        disabled: true,
                    }
                    CostInput {
                        label: "Fabric price",
                        value: fabric_price_input(),
                        oninput: move |raw: String| fabric_price_input.set(raw),
                        unit: "₹/m",
                    }
                    CostInput {
                        label: "Printing price",
                        value: printing_price_input(),
                        oninput: move |raw: String| printing_price_input.set(raw),
                        unit: "₹/m",
                    }
                    CostInput {
                        label: "Shrinkage",
                        value: shrinkage_input(),
                        oninput: move |raw: String| {
                            shrinkage_input.set(raw.clone());
                            write_shared_shrinkage(store, &raw);
                        },
                        unit: "%",
                    }
                }
            }

            section { class: "panel",
                h2 { "Operational costs per piece" }
                div { class: "field-grid",
                    CostInput {
                        label: "Cutting",
                        value: cutting_input(),
                        oninput: move |raw: String| cutting_input.set(raw),
                        unit: "₹",
                    }
                    CostInput {
                        label: "Stitching",
                        value: stitching_input(),
                        oninput: move |raw: String| stitching_input.set(raw),
                        unit: "₹",
                    }
                    CostInput {
                        label: "Ironing",
                        value: ironing_input(),
                        oninput: move |raw: String| ironing_input.set(raw),
                        unit: "₹",
                    }
                    CostInput {
                        label: "Packaging",
                        value: packaging_input(),
                        oninput: move |raw: String| packaging_input.set(raw),
                        unit: "₹",
                    }
                    CostInput {
                        label: "Delivery",
                        value: delivery_input(),
                        oninput: move |raw: String| delivery_input.set(raw),
                        unit: "₹",
                    }
                }
            }

            section { class: "panel",
                h2 { "Overheads and margin" }
                div { class: "field-grid",
                    CostInput {
                        label: "Defective pieces",
                        value: defective_input(),
                        oninput: move |raw: String| defective_input.set(raw),
                        unit: "%",
                    }
                    CostInput {
                        label: "Returns",
                        value: returns_input(),
                        oninput: move |raw: String| returns_input.set(raw),
                        unit: "%",
                    }
                    CostInput {
                        label: "Dead stock",
                        value: dead_stock_input(),
                        oninput: move |raw: String| dead_stock_input.set(raw),
                        unit: "%",
                    }
                    CostInput {
                        label: "Office maintenance",
                        value: office_input(),
                        oninput: move |raw: String| office_input.set(raw),
                        unit: "%",
                    }
                    CostInput {
                        label: "Agent commission",
                        value: commission_input(),
                        oninput: move |raw: String| commission_input.set(raw),
                        unit: "%",
                    }
                    CostInput {
                        label: "Sales offer",
                        value: sales_offer_input(),
                        oninput: move |raw: String| sales_offer_input.set(raw),
                        unit: "%",
                    }
                    CostInput {
                        label: "Advertisement",
                        value: advertisement_input(),
                        oninput: move |raw: String| advertisement_input.set(raw),
                        unit: "₹",
                    }
                    CostInput {
                        label: "Profit margin",
                        value: margin_input(),
                        oninput: move |raw: String| margin_input.set(raw),
                        unit: "%",
                    }
                }
                p { class: "panel-note",
                    "Percentage overheads total {format_number(inputs.overhead_pct_total(), 2)}% of finished cost."
                }
            }

            section { class: "panel",
                h2 { "Breakdown" }
                ResultRow { label: "Raw material cost", value: format_inr(breakdown.fabric_cost) }
                ResultRow { label: "Printing cost", value: format_inr(breakdown.printing_cost) }
                ResultRow { label: "Production cost", value: format_inr(breakdown.production_cost) }
                ResultRow { label: "Finished product cost", value: format_inr(breakdown.finished_cost) }
                ResultRow { label: "Percentage overheads", value: format_inr(breakdown.percentage_overheads_value) }
                ResultRow { label: "Total overhead cost", value: format_inr(breakdown.overhead_value) }
                ResultRow { label: "Grand total cost", value: format_inr(breakdown.grand_total), emphasized: true }
                ResultRow { label: "Target profit", value: format_inr(breakdown.profit) }
                ResultPanel {
                    title: "Final selling price",
                    value: format_inr(breakdown.selling_price),
                    description: format!(
                        "{} at a {}% margin",
                        size().label(),
                        format_number(inputs.profit_margin_pct, 2),
                    ),
                }
                div { class: "panel-actions",
                    button { class: "btn btn-primary", onclick: on_save, "Save for Combo Offer" }
                    button { class: "btn", onclick: on_download, "Download PDF" }
                }
            }
        }
    }
}
