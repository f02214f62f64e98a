//! Double-precision 2D vectors (`Vec2d`).
//!
//! Purpose
//! - The full operation table over (x, y) pairs of f64, in two parallel
//!   shapes: in-place mutation for hot loops (`normalize`, `+=`, `-=`,
//!   `scale_by`, `negate`) and pure forms returning a fresh value
//!   (`normalized`, `+`, `-`, `scaled`, `negated`).
//!
//! Zero-division policy
//! - `normalize` substitutes divisor 1 when the length is exactly zero, so a
//!   zero vector stays zero instead of turning into NaN.
//! - `project_onto` is unguarded: projecting onto the zero vector divides by
//!   zero and the NaN/Infinity components propagate to the caller.
//!   The two policies diverge on purpose; do not unify them.
//!
//! Code cross-refs: `vec2f::Vec2f` (single-precision twin), `rand2` (samplers).

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 2D vector in double precision.
///
/// Plain value type: `Copy`, compared and copied component-wise. Operands are
/// copied before any write, so self-aliasing like `v += v` is well-defined
/// and doubles `v`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2d {
    pub x: f64,
    pub y: f64,
}

impl Vec2d {
    /// The origin (0, 0).
    pub const ORIGIN: Vec2d = Vec2d { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Magnitude of the vector, `sqrt(x² + y²)`.
    #[inline]
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Squared magnitude, `x² + y²`.
    ///
    /// Skips the sqrt; use it to compare magnitudes against each other.
    #[inline]
    pub fn squared_length(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Scale to unit length in place.
    ///
    /// A vector of exactly zero length is left unchanged (the divisor falls
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

    /// Normalized copy; same zero-vector guard as [`Vec2d::normalize`].
    #[inline]
    #[must_use]
    pub fn normalized(self) -> Self {
        let mut v = self;
        v.normalize();
        v
    }

    /// Dot product, `x1·x2 + y1·y2`.
    #[inline]
    pub fn dot(self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y
    }

    /// Left normal: the 90° counter-clockwise perpendicular (−y, x).
    #[inline]
    #[must_use]
    pub fn normal(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Perpendicular dot product (2D cross product), `x1·y2 − y1·x2`.
    ///
    /// The sign gives the turn direction from `self` to `rhs`: positive when
    /// `rhs` lies to the left, negative to the right, zero when parallel.
    #[inline]
    pub fn perp_dot(self, rhs: Self) -> f64 {
        self.x * rhs.y - self.y * rhs.x
    }

    /// Scaled copy, `(x·s, y·s)`.
    #[inline]
    #[must_use]
    pub fn scaled(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s)
    }

    /// Scale in place by `s`.
    #[inline]
    pub fn scale_by(&mut self, s: f64) {
        self.x *= s;
        self.y *= s;
    }

    /// Negate in place, `v ← (−x, −y)`.
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

    /// Vector projection of `self` onto `rhs`:
    /// `rhs · (self·rhs / ‖rhs‖²)`.
    ///
    /// Unguarded: a zero `rhs` divides by zero and yields NaN components per
    /// IEEE-754. Callers that need a defined result must check `rhs` first.
    #[inline]
    #[must_use]
    pub fn project_onto(self, rhs: Self) -> Self {
        rhs.scaled(self.dot(rhs) / rhs.squared_length())
    }

    /// Tolerance equality with strict per-component absolute bounds:
    /// `|Δx| < tol && |Δy| < tol`. Component-wise, not Euclidean distance.
    #[inline]
    pub fn tol_eq(self, rhs: Self, tol: f64) -> bool {
        (self.x - rhs.x).abs() < tol && (self.y - rhs.y).abs() < tol
    }

    /// Constructor-expression form for debug logs, e.g.
    /// `Vec2d::new(1.000000, 2.000000)`. Pasting the string back into source
    /// reconstructs the value (components fixed to six decimal places).
    pub fn repr(&self) -> String {
        format!("Vec2d::new({:.6}, {:.6})", self.x, self.y)
    }

    /// Single-precision copy (lossy).
    #[inline]
    pub fn to_f32(self) -> crate::vec2f::Vec2f {
        crate::vec2f::Vec2f::new(self.x as f32, self.y as f32)
    }
}

impl Add for Vec2d {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2d {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2d {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2d {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vec2d {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.negated()
    }
}

impl Mul<f64> for Vec2d {
    type Output = Self;
    #[inline]
    fn mul(self, s: f64) -> Self {
        self.scaled(s)
    }
}

impl Mul<Vec2d> for f64 {
    type Output = Vec2d;
    #[inline]
    fn mul(self, v: Vec2d) -> Vec2d {
        v.scaled(self)
    }
}

impl MulAssign<f64> for Vec2d {
    #[inline]
    fn mul_assign(&mut self, s: f64) {
        self.scale_by(s);
    }
}

/// Human-readable `[x, y]`, components fixed to six decimal places.
impl fmt::Display for Vec2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.6}, {:.6}]", self.x, self.y)
    }
}

impl From<[f64; 2]> for Vec2d {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Vec2d {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vec2d> for [f64; 2] {
    #[inline]
    fn from(v: Vec2d) -> Self {
        [v.x, v.y]
    }
}

impl From<Vec2d> for (f64, f64) {
    #[inline]
    fn from(v: Vec2d) -> Self {
        (v.x, v.y)
    }
}
