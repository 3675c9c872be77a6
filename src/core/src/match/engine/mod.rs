pub mod ball;
pub mod clock;
pub mod config;
pub mod engine;
pub mod entity;
pub mod field;
pub mod input;
pub mod player;
pub mod snapshot;
pub mod state;
pub mod tuning;

pub use ball::*;
pub use clock::*;
pub use config::*;
pub use engine::*;
pub use entity::*;
pub use field::*;
pub use input::*;
pub use player::*;
pub use snapshot::*;
pub use state::*;
pub use tuning::*;
