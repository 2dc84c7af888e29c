pub mod api;
pub mod search_state;
pub mod validation;
pub mod ui;
