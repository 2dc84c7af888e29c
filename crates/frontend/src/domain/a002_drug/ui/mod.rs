pub mod form;
pub mod search;
