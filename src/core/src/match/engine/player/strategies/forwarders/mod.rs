pub mod modes;
pub mod strategy;

pub use modes::*;
pub use strategy::*;
