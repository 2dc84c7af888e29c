pub mod a001_alerts;
pub mod a002_drug;
pub mod a003_sale;
