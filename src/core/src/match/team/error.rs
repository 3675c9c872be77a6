use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamError {
    /// Controllers supply every player except the goalkeeper.
    InvalidRosterSize { expected: usize, actual: usize },
    GoalkeeperSupplied { index: u32 },
    /// Two players of a match share an index.
    DuplicateIndex { index: u32 },
}

impl Display for TeamError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamError::InvalidRosterSize { expected, actual } => write!(
                f,
                "teams must be {} players plus a goalkeeper, controller returned {}",
                expected, actual
            ),
            TeamError::GoalkeeperSupplied { index } => write!(
                f,
                "controller supplied a goalkeeper (player #{}), the team adds its own",
                index
            ),
            TeamError::DuplicateIndex { index } => write!(
                f,
                "player index {} is used twice, indices must be unique across the match",
                index
            ),
        }
    }
}

impl Error for TeamError {}
