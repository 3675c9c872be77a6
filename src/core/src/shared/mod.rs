pub mod coin;
pub mod geometry;
pub mod vector;

pub use coin::*;
pub use geometry::*;
pub use vector::*;
