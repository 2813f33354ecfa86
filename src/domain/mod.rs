//! Pure calculation models for the costing screens live here.

pub mod combo;
pub mod consumption;
pub mod costing;
pub mod entities;
pub mod logistics;
pub mod shrinkage;
pub mod thread;

#[allow(unused_imports)]
pub use entities::{SavedPrice, ScarfSize, SizePreset};

#[allow(unused_imports)]
pub use costing::{compute_cost, CostBreakdown, CostInputs};

#[allow(unused_imports)]
pub use consumption::{
    layout_entry, plan_consumption, ConsumptionSummary, FabricWidth, LayoutError, PanelEntry,
    PanelLayout, FABRIC_WIDTHS,
};

#[allow(unused_imports)]
pub use thread::{plan_thread, ThreadInputs, ThreadPlan, INCH_TO_METER, REEL_LENGTHS_M};

#[allow(unused_imports)]
pub use logistics::{apportion_delivery, LogisticsBreakdown, LogisticsInputs};

#[allow(unused_imports)]
pub use combo::{price_combo, ComboBreakdown, ComboInputs, SavedCostSplit};

#[allow(unused_imports)]
pub use shrinkage::{shrinkage_summary, ShrinkageSummary};
