pub mod total;
pub mod ui;
