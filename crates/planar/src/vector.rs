//! Integer 2D vectors with widened products.
//!
//! - `Vector`: exact `i32` components; used both as a displacement and as a
//!   position (a `Point` is a `Vector` tagged as a coordinate).
//! - `dot` and `cross` accumulate in `i64`. Callers that multiply two such
//!   products widen again to `i128`.
//!
//! Code cross-refs: `shapes::{Point, Line, Segment}`

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use nalgebra::Vector2;

/// Largest supported magnitude for coordinates, direction components and radii.
///
/// Pre: every value fed into a shape satisfies `|v| <= MAX_COORD`.
/// Post: differences fit `i32`, dot/cross products fit `i64`, products of two
/// cross products fit `i128`. No predicate in this crate can overflow.
pub const MAX_COORD: i32 = 1 << 29;

/// Integer 2-component vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector {
    pub x: i32,
    pub y: i32,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `x1·x2 + y1·y2`, widened.
    #[inline]
    pub fn dot(self, other: Vector) -> i64 {
        i64::from(self.x) * i64::from(other.x) + i64::from(self.y) * i64::from(other.y)
    }

    /// Signed parallelogram area `x1·y2 - x2·y1`, widened.
    /// Positive for self→other counterclockwise.
    #[inline]
    pub fn cross(self, other: Vector) -> i64 {
        i64::from(self.x) * i64::from(other.y) - i64::from(other.x) * i64::from(self.y)
    }

    #[inline]
    pub fn norm_squared(self) -> i64 {
        self.dot(self)
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Both components respect `MAX_COORD`.
    #[inline]
    pub fn within_bounds(self) -> bool {
        self.x.unsigned_abs() <= MAX_COORD as u32 && self.y.unsigned_abs() <= MAX_COORD as u32
    }

    /// Lossless widening for floating-point callers.
    #[inline]
    pub fn to_f64(self) -> Vector2<f64> {
        Vector2::new(f64::from(self.x), f64::from(self.y))
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({}, {})", self.x, self.y)
    }
}

impl Add for Vector {
    type Output = Vector;
    #[inline]
    fn add(self, rhs: Vector) -> Self::Output {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl Sub for Vector {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Vector) -> Self::Output {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}
impl Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Self::Output {
        Vector::new(-self.x, -self.y)
    }
}
impl Mul<i32> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, k: i32) -> Self::Output {
        Vector::new(self.x * k, self.y * k)
    }
}
impl Mul<Vector> for i32 {
    type Output = Vector;
    #[inline]
    fn mul(self, v: Vector) -> Self::Output {
        v * self
    }
}
impl AddAssign for Vector {
    #[inline]
    fn add_assign(&mut self, rhs: Vector) {
        *self = *self + rhs;
    }
}
impl SubAssign for Vector {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector) {
        *self = *self - rhs;
    }
}
impl MulAssign<i32> for Vector {
    #[inline]
    fn mul_assign(&mut self, k: i32) {
        *self = *self * k;
    }
}

impl From<(i32, i32)> for Vector {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Vector::new(x, y)
    }
}
impl From<Vector2<i32>> for Vector {
    #[inline]
    fn from(v: Vector2<i32>) -> Self {
        Vector::new(v.x, v.y)
    }
}
impl From<Vector> for Vector2<i32> {
    #[inline]
    fn from(v: Vector) -> Self {
        Vector2::new(v.x, v.y)
    }
}
