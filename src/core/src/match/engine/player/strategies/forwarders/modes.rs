use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForwardState {
    Positioning,
    ChasingBall,
    Shooting,
}

impl Display for ForwardState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ForwardState::Positioning => write!(f, "POSITIONING"),
            ForwardState::ChasingBall => write!(f, "CHASING_BALL"),
            ForwardState::Shooting => write!(f, "SHOOTING"),
        }
    }
}
