//! 2D vector primitives in double and single precision.
//!
//! Purpose
//! - Provide a small, explicit operation set over two-component float values
//!   (`Vec2d` for f64, `Vec2f` for f32): length, normalization, dot and
//!   perpendicular-dot products, arithmetic, scaling, projection, formatting,
//!   and tolerance equality.
//! - Stay a leaf dependency: no storage, no matrices, no SIMD, no generic
//!   dimensionality. Higher-level geometry code composes these primitives.
//!
//! Numeric policy
//! - Every operation is total over the float domain; NaN and Infinity
//!   propagate per IEEE-754 and are never rejected.
//! - `normalize` guards the zero vector (it stays zero); `project_onto` does
//!   not guard a zero target. The asymmetry is deliberate, see the module
//!   docs of `vec2d`.

pub mod rand2;
pub mod vec2d;
pub mod vec2f;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use vec2d::Vec2d;
pub use vec2f::Vec2f;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::rand2::{draw_in_bounds, draw_in_disc, unit_from_angle, Bounds2, ReplayToken};
    pub use crate::vec2d::Vec2d;
    pub use crate::vec2f::Vec2f;
}
