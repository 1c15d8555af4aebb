pub mod accounts;
pub mod categories;
pub mod charts;
pub mod csv_io;
pub mod period_filter;
pub mod report;
pub mod rollups;
pub mod validation;
