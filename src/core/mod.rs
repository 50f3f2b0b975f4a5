pub mod calculator;
pub mod logic;
pub mod summary;
pub mod zone;
