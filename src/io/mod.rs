pub mod charts;
pub mod csv;
pub mod json;
pub mod report;
