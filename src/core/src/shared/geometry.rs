use crate::shared::Vector2D;
use std::f32::consts::PI;

pub const FULL_TURN: f32 = 2.0 * PI;

pub struct Facing;

impl Facing {
    pub const RIGHT: f32 = 0.0;
    pub const DOWN: f32 = PI / 2.0;
    pub const LEFT: f32 = PI;
    pub const UP: f32 = 3.0 * PI / 2.0;
}

pub fn to_radians(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

/// Bearing from `from` to `to`, in radians (`atan2`, range [-π, π]).
pub fn calculate_angle(from: Vector2D, to: Vector2D) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Wraps any angle into [0, 2π).
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(FULL_TURN);
    if wrapped >= FULL_TURN { 0.0 } else { wrapped }
}

/// Signed smallest difference `a - b`, in [-π, π].
pub fn angle_difference(a: f32, b: f32) -> f32 {
    let diff = wrap_angle(a - b);
    if diff > PI { diff - FULL_TURN } else { diff }
}

/// Centres of `divisions` equal slices of `size`.
pub fn calculate_points(size: f32, divisions: usize) -> Vec<f32> {
    if divisions == 0 {
        return Vec::new();
    }

    let division_width = size / divisions as f32;
    let offset = division_width / 2.0;

    (0..divisions)
        .map(|i| i as f32 * division_width + offset)
        .collect()
}

/// Axis-aligned rectangle as `(x, y, width, height)` with `y` growing down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect { x, y, width, height }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vector2D {
        Vector2D::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_points_even_division() {
        assert_eq!(calculate_points(400.0, 4), vec![50.0, 150.0, 250.0, 350.0]);
        assert_eq!(calculate_points(100.0, 1), vec![50.0]);
        assert!(calculate_points(100.0, 0).is_empty());
    }

    #[test]
    fn test_wrap_angle() {
        assert!((wrap_angle(-PI / 2.0) - 3.0 * PI / 2.0).abs() < 1e-5);
        assert!((wrap_angle(5.0 * PI) - PI).abs() < 1e-4);
        assert_eq!(wrap_angle(0.0), 0.0);
    }

    #[test]
    fn test_angle_difference_crosses_zero() {
        let diff = angle_difference(0.1, FULL_TURN - 0.1);
        assert!((diff - 0.2).abs() < 1e-5);
    }

    #[test]
    fn test_calculate_angle() {
        let angle = calculate_angle(Vector2D::new(0.0, 0.0), Vector2D::new(0.0, 10.0));
        assert!((angle - Facing::DOWN).abs() < 1e-6);
    }
}
