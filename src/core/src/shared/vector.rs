use nalgebra::{Rotation2, Vector2};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::shared::geometry::to_radians;

/// Components below this magnitude are treated as zero.
pub const ZERO_THRESHOLD: f32 = 0.01;

/// 2D point / vector used by every simulated entity.
///
/// `==` compares coordinates rounded to the nearest integer (half up), which
/// is what waypoint arrival relies on. Use [`Vector2D::distance`] when an
/// exact comparison is needed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
}

impl Vector2D {
    pub const fn new(x: f32, y: f32) -> Self {
        Vector2D { x, y }
    }

    pub const fn zero() -> Self {
        Vector2D { x: 0.0, y: 0.0 }
    }

    pub const fn one() -> Self {
        Vector2D { x: 1.0, y: 1.0 }
    }

    /// Vector of length `speed` pointing along `direction` (radians).
    pub fn from_direction(direction: f32, speed: f32) -> Self {
        Vector2D::new(speed * direction.cos(), speed * direction.sin())
    }

    pub fn multiply(self, other: Vector2D) -> Self {
        Vector2D::new(self.x * other.x, self.y * other.y)
    }

    pub fn divide(self, other: Vector2D) -> Self {
        Vector2D::new(self.x / other.x, self.y / other.y)
    }

    pub fn scale(self, factor: f32) -> Self {
        Vector2D::new(self.x * factor, self.y * factor)
    }

    pub fn dot(self, other: Vector2D) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn magnitude(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(self, other: Vector2D) -> f32 {
        (other - self).magnitude()
    }

    pub fn is_zero(self) -> bool {
        self.x.abs() < ZERO_THRESHOLD && self.y.abs() < ZERO_THRESHOLD
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Unit vector. Undefined (NaN components) for a zero vector; callers
    /// check [`Vector2D::is_zero`] first or use [`Vector2D::normalize_or_zero`].
    pub fn normalize(self) -> Self {
        let magnitude = self.magnitude();
        Vector2D::new(self.x / magnitude, self.y / magnitude)
    }

    pub fn normalize_or_zero(self) -> Self {
        let magnitude = self.magnitude();
        if magnitude > 0.0 && magnitude.is_finite() {
            Vector2D::new(self.x / magnitude, self.y / magnitude)
        } else {
            Vector2D::zero()
        }
    }

    /// `v - 2(v·n)n`
    pub fn reflect(self, normal: Vector2D) -> Self {
        let dot = self.dot(normal);
        Vector2D::new(self.x - 2.0 * dot * normal.x, self.y - 2.0 * dot * normal.y)
    }

    /// Rotates counter-clockwise by `angle` given in DEGREES.
    pub fn rotate(self, angle: f32) -> Self {
        let rotation = Rotation2::new(to_radians(angle));
        (rotation * Vector2::from(self)).into()
    }

    pub fn lerp(self, target: Vector2D, t: f32) -> Self {
        Vector2D::new(
            self.x + (target.x - self.x) * t,
            self.y + (target.y - self.y) * t,
        )
    }

    pub fn middle_point(self, other: Vector2D) -> Self {
        Vector2D::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn rounded_eq(self, other: Vector2D) -> bool {
        round_half_up(self.x) == round_half_up(other.x)
            && round_half_up(self.y) == round_half_up(other.y)
    }
}

fn round_half_up(value: f32) -> f32 {
    (value + 0.5).floor()
}

impl PartialEq for Vector2D {
    fn eq(&self, other: &Self) -> bool {
        self.rounded_eq(*other)
    }
}

impl Display for Vector2D {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Vector2D) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector2D {
    fn sub_assign(&mut self, rhs: Vector2D) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f32> for Vector2D {
    type Output = Vector2D;

    fn mul(self, rhs: f32) -> Vector2D {
        self.scale(rhs)
    }
}

impl Div<Vector2D> for Vector2D {
    type Output = Vector2D;

    fn div(self, rhs: Vector2D) -> Vector2D {
        self.divide(rhs)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}

impl From<Vector2<f32>> for Vector2D {
    fn from(value: Vector2<f32>) -> Self {
        Vector2D::new(value.x, value.y)
    }
}

impl From<Vector2D> for Vector2<f32> {
    fn from(value: Vector2D) -> Self {
        Vector2::new(value.x, value.y)
    }
}
