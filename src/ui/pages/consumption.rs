use dioxus::prelude::*;

use crate::{
    domain::{plan_consumption, FabricWidth, PanelEntry, PanelLayout, FABRIC_WIDTHS},
    infra::store::Store,
    ui::{
        components::{
            cost_input::CostInput,
            result_row::{ResultPanel, ResultRow},
        },
        pages::{use_shared_shrinkage, write_shared_shrinkage},
    },
    util::{format::format_number, next_id, parse_count, parse_or_zero},
};

// 42 inches is the roll the workshop usually buys.
const DEFAULT_WIDTH_INDEX: usize = 2;

#[component]
pub fn FabricConsumptionPage() -> Element {
    let store = use_context::<Signal<Store>>();

    let mut fabric_width = use_signal(|| FABRIC_WIDTHS[DEFAULT_WIDTH_INDEX]);
    let mut gap_input = use_signal(|| "0.7".to_string());
    let mut shrinkage_input = use_shared_shrinkage(2.0);
    let mut entries = use_signal(|| {
        vec![PanelEntry {
            id: next_id(),
            width_cm: 90.0,
            height_cm: 90.0,
            quantity: 100,
        }]
    });

    let summary = plan_consumption(
        &entries(),
        fabric_width().cm,
        parse_or_zero(&gap_input()),
        parse_or_zero(&shrinkage_input()),
    );
    let rows: Vec<(PanelEntry, PanelLayout)> = entries()
        .into_iter()
        .zip(summary.layouts.iter().map(|(_, layout)| *layout))
        .collect();
    let entry_count = rows.len();

    let on_add = move |_| {
        entries.with_mut(|list| {
            list.push(PanelEntry {
                id: next_id(),
                width_cm: 50.0,
                height_cm: 50.0,
                quantity: 100,
            });
        });
    };

    rsx! {
        div { class: "page",
            section { class: "panel",
                h2 { "Fabric" }
                div { class: "field-grid",
                    div { class: "field",
                        label { class: "field-label", "Fabric width" }
                        select {
                            class: "field-input",
                            onchange: move |evt| {
                                if let Some(width) = FABRIC_WIDTHS
                                    .iter()
                                    .find(|candidate| candidate.label == evt.value())
                                {
                                    fabric_width.set(*width);
                                }
                            },
                            for width in FABRIC_WIDTHS {
                                option {
                                    value: width.label,
                                    selected: width == fabric_width(),
                                    "{width.label}"
                                }
                            }
                        }
                    }
                    CostInput {
                        label: "Gap between pieces",
                        value: gap_input(),
                        oninput: move |raw: String| gap_input.set(raw),
                        unit: "cm",
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
                h2 { "Scarf panels" }
                for (entry, layout) in rows {
                    EntryRow {
                        entry,
                        layout,
                        removable: entry_count > 1,
                        entries: entries.clone(),
                    }
                }
                div { class: "panel-actions",
                    button { class: "btn", onclick: on_add, "Add Panel Size" }
                }
            }

            section { class: "panel",
                h2 { "Total consumption" }
                ResultRow {
                    label: "Fabric before shrinkage",
                    value: format!("{} m", format_number(summary.total_before_shrinkage_m, 2)),
                }
                ResultRow {
                    label: "Shrinkage allowance",
                    value: format!("{} m", format_number(summary.shrinkage_allowance_m, 2)),
                }
                ResultPanel {
                    title: "Fabric to buy",
                    value: format!("{} m", format_number(summary.total_with_shrinkage_m, 2)),
                    description: format!("on a {} roll", fabric_width().label),
                }
            }
        }
    }
}

#[component]
fn EntryRow(
    entry: PanelEntry,
    layout: PanelLayout,
    removable: bool,
    entries: Signal<Vec<PanelEntry>>,
) -> Element {
    let id = entry.id;
    let mut entries = entries;

    let result = match layout.error {
        Some(error) => error.to_string(),
        None => format!(
            "{} per row × {} rows = {} m",
            layout.pieces_per_row,
            layout.rows,
            format_number(layout.length_m, 2),
        ),
    };
    let result_class = if layout.error.is_some() {
        "entry-result entry-result-error"
    } else {
        "entry-result"
    };

    rsx! {
        div { class: "entry-row",
            CostInput {
                label: "Width",
                value: entry.width_cm.to_string(),
                oninput: move |raw: String| {
                    let value = parse_or_zero(&raw);
                    entries.with_mut(|list| {
                        if let Some(item) = list.iter_mut().find(|item| item.id == id) {
                            item.width_cm = value;
                        }
                    });
                },
                unit: "cm",
            }
            CostInput {
                label: "Height",
                value: entry.height_cm.to_string(),
                oninput: move |raw: String| {
                    let value = parse_or_zero(&raw);
                    entries.with_mut(|list| {
                        if let Some(item) = list.iter_mut().find(|item| item.id == id) {
                            item.height_cm = value;
                        }
                    });
                },
                unit: "cm",
            }
            CostInput {
                label: "Quantity",
                value: entry.quantity.to_string(),
                oninput: move |raw: String| {
                    let value = parse_count(&raw);
                    entries.with_mut(|list| {
                        if let Some(item) = list.iter_mut().find(|item| item.id == id) {
                            item.quantity = value;
                        }
                    });
                },
                unit: "pcs",
            }
            p { class: "{result_class}", "{result}" }
            if removable {
                button {
                    class: "btn btn-danger",
                    onclick: move |_| {
                        entries.with_mut(|list| list.retain(|item| item.id != id));
                    },
                    "Remove"
                }
            }
        }
    }
}
