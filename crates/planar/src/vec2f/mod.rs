//! Single-precision 2D vectors (`Vec2f`).
//!
//! Functionally identical to `vec2d::Vec2d` modulo precision: same operation
//! table, same zero-division policy (`normalize` guards, `project_onto` does
//! not). Kept as a separate concrete type rather than a generic so both
//! instantiations stay monomorphic in tight loops.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 2D vector in single precision.
///
/// Plain value type: `Copy`, compared and copied component-wise. Self-aliasing
/// like `v += v` is well-defined and doubles `v`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2f {
    pub x: f32,
    pub y: f32,
}

impl Vec2f {
    /// The origin (0, 0).
    pub const ORIGIN: Vec2f = Vec2f { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Magnitude of the vector, `sqrt(x² + y²)`.
    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Squared magnitude; skips the sqrt for relative comparisons.
    #[inline]
    pub fn squared_length(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Scale to unit length in place. A zero vector stays zero (divisor falls
    /// back to 1), never NaN.
    #[inline]
    pub fn normalize(&mut self) {
        let mut len = self.length();
        if len == 0.0 {
            len = 1.0;
        }
        self.x /= len;
        self.y /= len;
    }

    /// Normalized copy; same zero-vector guard as [`Vec2f::normalize`].
    #[inline]
    #[must_use]
    pub fn normalized(self) -> Self {
        let mut v = self;
        v.normalize();
        v
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y
    }

    /// Left normal: the 90° counter-clockwise perpendicular (−y, x).
    #[inline]
    #[must_use]
    pub fn normal(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Perpendicular dot product (2D cross product), `x1·y2 − y1·x2`.
    /// Positive when `rhs` lies left of `self`, negative right, zero parallel.
    #[inline]
    pub fn perp_dot(self, rhs: Self) -> f32 {
        self.x * rhs.y - self.y * rhs.x
    }

    /// Scaled copy.
    #[inline]
    #[must_use]
    pub fn scaled(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s)
    }

    /// Scale in place by `s`.
    #[inline]
    pub fn scale_by(&mut self, s: f32) {
        self.x *= s;
        self.y *= s;
    }

    /// Negate in place.
    #[inline]
    pub fn negate(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
    }

    /// Negated copy.
    #[inline]
    #[must_use]
    pub fn negated(self) -> Self {
        Self::new(-self.x, -self.y)
    }

    /// Vector projection of `self` onto `rhs`. Unguarded: a zero `rhs`
    /// divides by zero and NaN components propagate per IEEE-754.
    #[inline]
    #[must_use]
    pub fn project_onto(self, rhs: Self) -> Self {
        rhs.scaled(self.dot(rhs) / rhs.squared_length())
    }

    /// Tolerance equality with strict per-component absolute bounds:
    /// `|Δx| < tol && |Δy| < tol`.
    #[inline]
    pub fn tol_eq(self, rhs: Self, tol: f32) -> bool {
        (self.x - rhs.x).abs() < tol && (self.y - rhs.y).abs() < tol
    }

    /// Constructor-expression form for debug logs, e.g.
    /// `Vec2f::new(1.000000, 2.000000)`.
    pub fn repr(&self) -> String {
        format!("Vec2f::new({:.6}, {:.6})", self.x, self.y)
    }

    /// Double-precision copy (exact).
    #[inline]
    pub fn to_f64(self) -> crate::vec2d::Vec2d {
        crate::vec2d::Vec2d::new(f64::from(self.x), f64::from(self.y))
    }
}

impl Add for Vec2f {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2f {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2f {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2f {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vec2f {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.negated()
    }
}

impl Mul<f32> for Vec2f {
    type Output = Self;
    #[inline]
    fn mul(self, s: f32) -> Self {
        self.scaled(s)
    }
}

impl Mul<Vec2f> for f32 {
    type Output = Vec2f;
    #[inline]
    fn mul(self, v: Vec2f) -> Vec2f {
        v.scaled(self)
    }
}

impl MulAssign<f32> for Vec2f {
    #[inline]
    fn mul_assign(&mut self, s: f32) {
        self.scale_by(s);
    }
}

/// Human-readable `[x, y]`, components fixed to six decimal places.
impl fmt::Display for Vec2f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.6}, {:.6}]", self.x, self.y)
    }
}

impl From<[f32; 2]> for Vec2f {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f32, f32)> for Vec2f {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vec2f> for [f32; 2] {
    #[inline]
    fn from(v: Vec2f) -> Self {
        [v.x, v.y]
    }
}

impl From<Vec2f> for (f32, f32) {
    #[inline]
    fn from(v: Vec2f) -> Self {
        (v.x, v.y)
    }
}

#[cfg(test)]
mod tests;
