use crate::shared::Vector2D;

/// Position + velocity state shared by the ball and every player.
pub trait MovableEntity {
    fn position(&self) -> Vector2D;

    fn velocity(&self) -> Vector2D;

    fn set_position(&mut self, position: Vector2D);

    fn set_velocity(&mut self, velocity: Vector2D);

    fn stop(&mut self) {
        self.set_velocity(Vector2D::zero());
    }

    fn distance_to(&self, point: Vector2D) -> f32 {
        self.position().distance(point)
    }
}
