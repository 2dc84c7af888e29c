pub mod api;
pub mod banner;
pub mod poller;
pub mod ui;
