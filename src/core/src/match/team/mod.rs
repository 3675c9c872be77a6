pub mod controller;
pub mod error;
pub mod team;

pub use controller::*;
pub use error::*;
pub use team::*;
