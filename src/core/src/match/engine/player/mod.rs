pub mod behaviours;
pub mod context;
pub mod player;
pub mod positions;
pub mod state;
pub mod strategies;

pub use behaviours::*;
pub use context::*;
pub use player::*;
pub use positions::*;
pub use state::*;

pub use strategies::{defenders, forwarders, goalkeepers, midfielders};
