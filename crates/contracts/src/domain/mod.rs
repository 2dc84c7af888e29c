pub mod a001_alerts;
pub mod a002_drug;
