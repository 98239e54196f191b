//! Turn-based battle between two creatures.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
