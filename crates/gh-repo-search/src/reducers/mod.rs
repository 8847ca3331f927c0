pub mod app_reducer;
pub mod search_input_reducer;
pub mod search_reducer;
pub mod status_bar_reducer;
