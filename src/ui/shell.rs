use dioxus::prelude::*;

use crate::app::{version_label, Route, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "shell",
            header { class: "shell-header",
                div { class: "shell-brand",
                    h1 { "{APP_NAME}" }
                    p { class: "shell-version", "{version_label()}" }
                }
                nav { class: "shell-nav",
                    NavButton {
                        active: matches!(current_route, Route::Cost {}),
                        onclick: move |_| { nav.push(Route::Cost {}); },
                        label: "Cost",
                    }
                    NavButton {
                        active: matches!(current_route, Route::FabricConsumption {}),
                        onclick: move |_| { nav.push(Route::FabricConsumption {}); },
                        label: "Fabric Consumption",
                    }
                    NavButton {
                        active: matches!(current_route, Route::SewingThreads {}),
                        onclick: move |_| { nav.push(Route::SewingThreads {}); },
                        label: "Sewing Threads",
                    }
                    NavButton {
                        active: matches!(current_route, Route::FabricLogistics {}),
                        onclick: move |_| { nav.push(Route::FabricLogistics {}); },
                        label: "Fabric Logistics",
                    }
                    NavButton {
                        active: matches!(current_route, Route::ComboOffer {}),
                        onclick: move |_| { nav.push(Route::ComboOffer {}); },
                        label: "Combo Offer",
                    }
                    NavButton {
                        active: matches!(current_route, Route::ShrinkageReport {}),
                        onclick: move |_| { nav.push(Route::ShrinkageReport {}); },
                        label: "Shrinkage Report",
                    }
                }
            }
            main { class: "shell-main",
                {children}
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active { "nav-btn nav-btn-active" } else { "nav-btn" };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
