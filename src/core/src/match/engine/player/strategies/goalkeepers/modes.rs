use std::fmt::{Display, Formatter};

pub const WATCHING_FAR_RANGE: f32 = 300.0;
pub const WATCHING_RANGE: f32 = 150.0;
pub const ALERT_RANGE: f32 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalkeeperState {
    WatchingFar,
    Watching,
    Alert,
    Defensive,
}

impl GoalkeeperState {
    pub fn from_ball_distance(distance: f32) -> Self {
        if distance > WATCHING_FAR_RANGE {
            GoalkeeperState::WatchingFar
        } else if distance > WATCHING_RANGE {
            GoalkeeperState::Watching
        } else if distance > ALERT_RANGE {
            GoalkeeperState::Alert
        } else {
            GoalkeeperState::Defensive
        }
    }
}

impl Display for GoalkeeperState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GoalkeeperState::WatchingFar => write!(f, "WATCHING_FAR"),
            GoalkeeperState::Watching => write!(f, "WATCHING"),
            GoalkeeperState::Alert => write!(f, "ALERT"),
            GoalkeeperState::Defensive => write!(f, "DEFENSIVE"),
        }
    }
}
