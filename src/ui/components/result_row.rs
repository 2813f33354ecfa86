use dioxus::prelude::*;

#[component]
pub fn ResultRow(label: String, value: String, emphasized: Option<bool>) -> Element {
    let class = if emphasized.unwrap_or(false) {
        "result-row result-row-emphasized"
    } else {
        "result-row"
    };

    rsx! {
        div { class: class,
            span { class: "result-label", "{label}" }
            span { class: "result-value", "{value}" }
        }
    }
}

/// Large headline figure, used for the final number of each screen.
#[component]
pub fn ResultPanel(title: String, value: String, description: Option<String>) -> Element {
    rsx! {
        div { class: "result-panel",
            h3 { "{title}" }
            p { class: "result-panel-value", "{value}" }
            if let Some(desc) = description {
                p { class: "result-panel-note", "{desc}" }
            }
        }
    }
}
