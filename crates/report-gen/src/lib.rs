pub mod csv_report;
pub mod chart;

pub use csv_report::*;
pub use chart::*;
