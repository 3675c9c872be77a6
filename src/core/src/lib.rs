pub mod r#match;
pub mod shared;

pub use r#match::*;
pub use shared::*;
