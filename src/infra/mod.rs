pub mod pdf;
pub mod store;
