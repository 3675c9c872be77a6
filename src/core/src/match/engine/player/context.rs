use crate::r#match::{Ball, MatchField, MatchObjectsPositions, MatchStage, Tuning};

/// Everything a single player reads (and the ball it may kick) during one frame.
pub struct PlayerTickContext<'a> {
    /// Frame time in milliseconds.
    pub dt: f32,
    pub stage: MatchStage,
    pub ball: &'a mut Ball,
    pub positions: &'a MatchObjectsPositions,
    pub field: &'a MatchField,
    pub tuning: &'a Tuning,
}

impl PlayerTickContext<'_> {
    pub fn dt_seconds(&self) -> f32 {
        self.dt / 1000.0
    }
}
