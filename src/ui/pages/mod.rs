mod combo;
mod consumption;
mod cost;
mod logistics;
mod shrinkage;
mod thread;

pub use combo::ComboOfferPage;
pub use consumption::FabricConsumptionPage;
pub use cost::CostPage;
pub use logistics::FabricLogisticsPage;
pub use shrinkage::ShrinkageReportPage;
pub use thread::SewingThreadsPage;

use dioxus::prelude::*;

use crate::{
    infra::store::{self, Store},
    util::parse_or_zero,
};

/// Shrinkage percentage as raw input text, seeded from the shared store and
/// kept in sync with it: the store revision is watched so an edit on one
/// screen shows up on every other open screen.
pub(crate) fn use_shared_shrinkage(default_pct: f64) -> Signal<String> {
    let store = use_context::<Signal<Store>>();
    let mut value = use_signal(|| {
        store
            .peek()
            .get_number(store::KEY_SHRINKAGE)
            .map(|stored| stored.to_string())
            .unwrap_or_else(|| default_pct.to_string())
    });
    let mut seen_revision = use_signal(|| store.peek().revision());

    use_effect(move || {
        let revision = store.read().revision();
        if revision == *seen_revision.peek() {
            return;
        }
        seen_revision.set(revision);
        if let Some(stored) = store.peek().get_number(store::KEY_SHRINKAGE) {
            // Only rewrite the field when the parsed value actually moved, so
            // the screen the user is typing on never fights its own input.
            if parse_or_zero(&value.peek()) != stored {
                value.set(stored.to_string());
            }
        }
    });

    value
}

pub(crate) fn write_shared_shrinkage(mut store: Signal<Store>, raw: &str) {
    let pct = parse_or_zero(raw);
    store.with_mut(|st| st.set_number(store::KEY_SHRINKAGE, pct));
}
