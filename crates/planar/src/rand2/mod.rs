//! Random 2D vectors (deterministic draws via replay tokens).
//!
//! Purpose
//! - Provide small, reproducible vector samplers for benches and downstream
//!   experiments. Every draw is keyed by a `ReplayToken` so a sample can be
//!   regenerated from logs without storing the vector itself.
//!
//! Model
//! - A token `(seed, index)` is mixed into a single `StdRng`; the same token
//!   always yields the same draw.
//!
//! Code cross-refs: `vec2d::Vec2d`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::vec2d::Vec2d;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Axis-aligned sampling box, inclusive on both corners.
#[derive(Clone, Copy, Debug)]
pub struct Bounds2 {
    pub min: Vec2d,
    pub max: Vec2d,
}

impl Bounds2 {
    fn is_valid(&self) -> bool {
        self.min.x.is_finite()
            && self.min.y.is_finite()
            && self.max.x.is_finite()
            && self.max.y.is_finite()
            && self.min.x <= self.max.x
            && self.min.y <= self.max.y
    }
}

/// Draw a vector uniformly from `bounds`. `None` if the box is degenerate
/// (non-finite corners or min > max on either axis).
pub fn draw_in_bounds(bounds: Bounds2, tok: ReplayToken) -> Option<Vec2d> {
    if !bounds.is_valid() {
        return None;
    }
    let mut rng = tok.to_std_rng();
    let x = rng.gen_range(bounds.min.x..=bounds.max.x);
    let y = rng.gen_range(bounds.min.y..=bounds.max.y);
    Some(Vec2d::new(x, y))
}

/// Draw a vector uniformly from the closed disc of the given radius around
/// the origin. `None` for a non-positive or non-finite radius.
pub fn draw_in_disc(radius: f64, tok: ReplayToken) -> Option<Vec2d> {
    if !(radius.is_finite()) || radius <= 0.0 {
        return None;
    }
    let mut rng = tok.to_std_rng();
    // sqrt on the radial draw keeps the density uniform over the area.
    let r = radius * rng.gen::<f64>().sqrt();
    let theta = rng.gen::<f64>() * std::f64::consts::TAU;
    Some(unit_from_angle(theta).scaled(r))
}

/// Unit vector at angle `theta` (radians, counter-clockwise from +x).
#[inline]
pub fn unit_from_angle(theta: f64) -> Vec2d {
    Vec2d::new(theta.cos(), theta.sin())
}
