pub mod formatting;
pub mod path;

pub use formatting::{hours2, hours2readable};
