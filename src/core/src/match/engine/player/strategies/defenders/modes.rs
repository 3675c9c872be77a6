use std::fmt::{Display, Formatter};

pub const WATCHING_FAR_RANGE: f32 = 300.0;
pub const WATCHING_RANGE: f32 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefenderState {
    WatchingFar,
    Watching,
    Defensive,
}

impl DefenderState {
    pub fn from_ball_distance(distance: f32) -> Self {
        if distance > WATCHING_FAR_RANGE {
            DefenderState::WatchingFar
        } else if distance > WATCHING_RANGE {
            DefenderState::Watching
        } else {
            DefenderState::Defensive
        }
    }
}

impl Display for DefenderState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DefenderState::WatchingFar => write!(f, "WATCHING_FAR"),
            DefenderState::Watching => write!(f, "WATCHING"),
            DefenderState::Defensive => write!(f, "DEFENSIVE"),
        }
    }
}
