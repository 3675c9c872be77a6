pub mod dribble;
pub mod steering;

pub use dribble::*;
pub use steering::*;
