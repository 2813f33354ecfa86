use dioxus::prelude::*;

use crate::{
    domain::{shrinkage_summary, ShrinkageSummary},
    ui::components::{
        cost_input::CostInput,
        result_row::{ResultPanel, ResultRow},
    },
    util::{format::format_number, parse_or_zero},
};

/// The report is scratch space: both fields start empty and Reset clears
/// them again. Nothing here touches the shared store, so a what-if
/// percentage never disturbs the cost or consumption screens.
#[derive(Clone, Debug, Default, PartialEq)]
struct ReportDraft {
    length_input: String,
    shrinkage_input: String,
}

impl ReportDraft {
    fn total_length_m(&self) -> f64 {
        parse_or_zero(&self.length_input)
    }

    fn summary(&self) -> ShrinkageSummary {
        shrinkage_summary(self.total_length_m(), parse_or_zero(&self.shrinkage_input))
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[component]
pub fn ShrinkageReportPage() -> Element {
    let mut draft = use_signal(ReportDraft::default);

    let summary = draft().summary();
    let total_length_m = draft().total_length_m();

    let on_reset = move |_| draft.with_mut(ReportDraft::reset);

    rsx! {
        div { class: "page",
            section { class: "panel",
                h2 { "Cloth" }
                div { class: "field-grid",
                    CostInput {
                        label: "Total cloth length",
                        value: draft().length_input,
                        oninput: move |raw: String| draft.with_mut(|d| d.length_input = raw),
                        unit: "m",
                    }
                    CostInput {
                        label: "Shrinkage",
                        value: draft().shrinkage_input,
                        oninput: move |raw: String| draft.with_mut(|d| d.shrinkage_input = raw),
                        unit: "%",
                    }
                }
                div { class: "panel-actions",
                    button { class: "btn", onclick: on_reset, "Reset" }
                }
            }

            section { class: "panel",
                h2 { "After processing" }
                ResultRow {
                    label: "Fabric lost to shrinkage",
                    value: format!("{} m", format_number(summary.loss_m, 2)),
                }
                ResultRow {
                    label: "Loss per meter of raw cloth",
                    value: format!("{} m", format_number(summary.loss_per_meter, 4)),
                }
                ResultPanel {
                    title: "Usable fabric",
                    value: format!("{} m", format_number(summary.usable_m, 2)),
                    description: format!(
                        "out of {} m of raw cloth",
                        format_number(total_length_m, 2),
                    ),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::store::{self, Store};

    #[test]
    fn draft_math_matches_the_calculator() {
        let draft = ReportDraft {
            length_input: "250".into(),
            shrinkage_input: "4".into(),
        };
        let summary = draft.summary();
        assert_eq!(summary.loss_m, 10.0);
        assert_eq!(summary.usable_m, 240.0);
    }

    #[test]
    fn reset_restores_the_empty_fields() {
        let mut draft = ReportDraft {
            length_input: "100".into(),
            shrinkage_input: "4".into(),
        };
        draft.reset();
        assert_eq!(draft, ReportDraft::default());
        assert_eq!(draft.total_length_m(), 0.0);
    }

    #[test]
    fn report_edits_never_reach_the_shared_store() {
        let store = Store::in_memory();

        let mut draft = ReportDraft::default();
        draft.length_input = "250".into();
        draft.shrinkage_input = "4".into();
        let _ = draft.summary();
        draft.reset();

        assert_eq!(store.revision(), 0);
        assert!(store.get_raw(store::KEY_SHRINKAGE).is_none());
    }
}
