use dioxus::prelude::*;

use crate::{
    infra::store::Store,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{
            ComboOfferPage, CostPage, FabricConsumptionPage, FabricLogisticsPage,
            SewingThreadsPage, ShrinkageReportPage,
        },
        shell::Shell,
    },
    util::assets,
};

pub const APP_NAME: &str = "Scarf Costing Studio";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

pub fn version_label() -> String {
    if let Some(tag) = GIT_TAG {
        tag.to_string()
    } else {
        format!("v{APP_VERSION}")
    }
}

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Cost {},
    #[route("/fabric-consumption")]
    FabricConsumption {},
    #[route("/sewing-threads")]
    SewingThreads {},
    #[route("/fabric-logistics")]
    FabricLogistics {},
    #[route("/combo-offer")]
    ComboOffer {},
    #[route("/shrinkage-report")]
    ShrinkageReport {},
}

#[component]
pub fn App() -> Element {
    // The shared store is the only cross-screen state; every page reads and
    // writes it through this signal.
    let store = use_signal(Store::open);
    use_context_provider(|| store.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    rsx! {
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Cost() -> Element {
    rsx! { Shell { CostPage {} } }
}

#[component]
pub fn FabricConsumption() -> Element {
    rsx! { Shell { FabricConsumptionPage {} } }
}

#[component]
pub fn SewingThreads() -> Element {
    rsx! { Shell { SewingThreadsPage {} } }
}

#[component]
pub fn FabricLogistics() -> Element {
    rsx! { Shell { FabricLogisticsPage {} } }
}

#[component]
pub fn ComboOffer() -> Element {
    rsx! { Shell { ComboOfferPage {} } }
}

#[component]
pub fn ShrinkageReport() -> Element {
    rsx! { Shell { ShrinkageReportPage {} } }
}
