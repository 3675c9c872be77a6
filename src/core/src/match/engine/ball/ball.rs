use crate::r#match::MovableEntity;
use crate::shared::Vector2D;

pub const BALL_RADIUS: f32 = 8.0;

const FRICTION: f32 = 0.02;
const GOAL_FRICTION: f32 = 0.4;

#[derive(Debug, Clone)]
pub struct Ball {
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub radius: f32,
    in_goal: bool,
}

impl Ball {
    pub fn new(position: Vector2D) -> Self {
        Ball {
            position,
            velocity: Vector2D::zero(),
            radius: BALL_RADIUS,
            in_goal: false,
        }
    }

    pub fn with_coord(field_width: f32, field_height: f32) -> Self {
        Ball::new(Vector2D::new(field_width / 2.0, field_height / 2.0))
    }

    pub fn in_goal(&self) -> bool {
        self.in_goal
    }

    pub fn set_in_goal(&mut self, in_goal: bool) {
        self.in_goal = in_goal;
    }

    /// Replaces the velocity; kicks never accumulate.
    pub fn kick(&mut self, force: Vector2D) {
        self.velocity = force;
    }

    pub fn center_on(&mut self, point: Vector2D) {
        self.position = point;
    }

    /// Velocity is a per-frame displacement, so `_dt` does not scale it.
    pub fn update(&mut self, _dt: f32) {
        self.move_to();
        self.apply_friction();
    }

    fn move_to(&mut self) {
        if self.velocity.is_finite() {
            self.position += self.velocity;
        }
    }

    fn apply_friction(&mut self) {
        if self.velocity.is_zero() {
            return;
        }

        let scaled = self.velocity.scale(self.friction_coefficient());
        self.velocity += scaled.reflect(scaled.normalize_or_zero());
    }

    fn friction_coefficient(&self) -> f32 {
        if self.in_goal { GOAL_FRICTION } else { FRICTION }
    }
}

impl MovableEntity for Ball {
    fn position(&self) -> Vector2D {
        self.position
    }

    fn velocity(&self) -> Vector2D {
        self.velocity
    }

    fn set_position(&mut self, position: Vector2D) {
        self.position = position;
    }

    fn set_velocity(&mut self, velocity: Vector2D) {
        self.velocity = velocity;
    }
}
