use std::fmt::{Display, Formatter};

pub const WATCHING_FAR_RANGE: f32 = 300.0;
pub const WATCHING_RANGE: f32 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MidfielderState {
    WatchingFar,
    Watching,
    OnTheOffence,
}

impl MidfielderState {
    pub fn from_ball_distance(distance: f32) -> Self {
        if distance > WATCHING_FAR_RANGE {
            MidfielderState::WatchingFar
        } else if distance > WATCHING_RANGE {
            MidfielderState::Watching
        } else {
            MidfielderState::OnTheOffence
        }
    }
}

impl Display for MidfielderState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MidfielderState::WatchingFar => write!(f, "WATCHING_FAR"),
            MidfielderState::Watching => write!(f, "WATCHING"),
            MidfielderState::OnTheOffence => write!(f, "ON_THE_OFFENCE"),
        }
    }
}
