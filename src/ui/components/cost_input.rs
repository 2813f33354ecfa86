use dioxus::prelude::*;

/// Labeled numeric field. The raw text stays with the page; anything that
/// fails to parse is treated as zero by the calculators.
#[component]
pub fn CostInput(
    label: String,
    value: String,
    oninput: EventHandler<String>,
    unit: Option<&'static str>,
    disabled: Option<bool>,
    description: Option<String>,
) -> Element {
    let disabled = disabled.unwrap_or(false);

    rsx! {
        div { class: "field",
            label { class: "field-label", "{label}" }
            div { class: "field-control",
                input {
                    class: "field-input",
                    inputmode: "decimal",
                    value: "{value}",
                    disabled,
                    oninput: move |evt| oninput.call(evt.value()),
                }
                if let Some(unit) = unit {
                    span { class: "field-unit", "{unit}" }
                }
            }
            if let Some(description) = description {
                p { class: "field-note", "{description}" }
            }
        }
    }
}
