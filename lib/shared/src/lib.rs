pub mod library;
pub mod report;
