pub mod interval;
pub mod project;
pub mod raw_entry;
