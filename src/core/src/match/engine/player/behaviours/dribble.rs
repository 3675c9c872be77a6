use crate::r#match::{Tuning, DRIBBLE_ANGLE};
use crate::shared::{angle_difference, calculate_angle, to_radians, Vector2D};

pub const DRIBBLE_DISTANCE: f32 = 30.0;

/// Decides whether the ball sits inside a player's dribble cone.
pub struct DribbleDetector {
    half_angle: f32,
}

impl DribbleDetector {
    pub fn new(tuning: &Tuning) -> Self {
        DribbleDetector {
            half_angle: to_radians(tuning.read(&DRIBBLE_ANGLE)) / 2.0,
        }
    }

    pub fn is_dribbling(&self, position: Vector2D, facing: f32, ball: Vector2D) -> bool {
        if position.distance(ball) > DRIBBLE_DISTANCE {
            return false;
        }

        let bearing = calculate_angle(position, ball);
        angle_difference(bearing, facing).abs() <= self.half_angle
    }
}
