pub mod aggregation;
pub mod splitter;
