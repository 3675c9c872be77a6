pub mod engine;
pub mod team;

pub use engine::*;
pub use team::*;
