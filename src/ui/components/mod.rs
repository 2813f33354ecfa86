pub mod cost_input;
pub mod result_row;
pub mod toast;
