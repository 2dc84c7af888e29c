pub mod api_utils;
pub mod config;
pub mod date_utils;
pub mod export;
pub mod number_format;
pub mod page_utils;
pub mod stock_level;
