use super::*;
use proptest::prelude::*;

#[test]
fn length_of_3_4_triangle() {
    assert_eq!(Vec2f::new(3.0, 4.0).length(), 5.0);
    assert!(Vec2f::new(f32::NAN, 1.0).length().is_nan());
}

#[test]
fn normalize_zero_vector_stays_zero() {
    let mut v = Vec2f::ORIGIN;
    v.normalize();
    assert_eq!(v, Vec2f::ORIGIN);
    assert_eq!(Vec2f::new(0.0, 0.0).normalized(), Vec2f::ORIGIN);
}

#[test]
fn normalized_has_unit_length() {
    let v = Vec2f::new(3.0, 4.0).normalized();
    assert!((v.length() - 1.0).abs() < 1e-6);
    assert_eq!(v, Vec2f::new(0.6, 0.8));
}

#[test]
fn dot_and_perp_dot() {
    assert_eq!(Vec2f::new(1.0, 0.0).dot(Vec2f::new(0.0, 1.0)), 0.0);
    assert_eq!(Vec2f::new(1.0, 2.0).dot(Vec2f::new(3.0, 4.0)), 11.0);
    assert_eq!(Vec2f::new(1.0, 0.0).perp_dot(Vec2f::new(0.0, 1.0)), 1.0);
    assert_eq!(Vec2f::new(0.0, 1.0).perp_dot(Vec2f::new(1.0, 0.0)), -1.0);
}

#[test]
fn left_normal_rotates_ccw() {
    assert_eq!(Vec2f::new(1.0, 0.0).normal(), Vec2f::new(0.0, 1.0));
    let v = Vec2f::new(2.0, -3.0);
    assert_eq!(v.normal().normal(), v.negated());
}

#[test]
fn arithmetic_pairs() {
    let v1 = Vec2f::new(1.0, 2.0);
    let v2 = Vec2f::new(3.0, -4.0);
    assert_eq!(v1 + v2, Vec2f::new(4.0, -2.0));
    assert_eq!(v1 - v2, Vec2f::new(-2.0, 6.0));
    let mut m = v1;
    m += v2;
    m -= v2;
    assert_eq!(m, v1);
    // Self-aliased add doubles.
    let mut d = Vec2f::new(1.5, -2.0);
    d += d;
    assert_eq!(d, Vec2f::new(3.0, -4.0));
}

#[test]
fn scaling_and_negation() {
    let v = Vec2f::new(2.0, -3.0);
    assert_eq!(v.scaled(1.0), v);
    assert_eq!(v * 2.0, Vec2f::new(4.0, -6.0));
    assert_eq!(2.0 * v, v * 2.0);
    let mut m = v;
    m *= 2.0;
    m.scale_by(0.5);
    assert_eq!(m, v);
    assert_eq!(-v, Vec2f::new(-2.0, 3.0));
    let mut n = v;
    n.negate();
    assert_eq!(n, v.negated());
}

#[test]
fn projection() {
    assert_eq!(
        Vec2f::new(3.0, 3.0).project_onto(Vec2f::new(1.0, 0.0)),
        Vec2f::new(3.0, 0.0)
    );
    let p = Vec2f::new(3.0, 3.0).project_onto(Vec2f::ORIGIN);
    assert!(p.x.is_nan() && p.y.is_nan());
}

#[test]
fn copies_are_independent() {
    let v = Vec2f::new(1.0, 2.0);
    let mut c = v;
    c.negate();
    assert_eq!(v, Vec2f::new(1.0, 2.0));
}

#[test]
fn tol_eq_strict_bounds() {
    let v = Vec2f::new(1.0, 2.0);
    assert!(v.tol_eq(v, 1e-20));
    assert!(!Vec2f::ORIGIN.tol_eq(Vec2f::new(1.0, 1.0), 0.5));
    assert!(!Vec2f::ORIGIN.tol_eq(Vec2f::new(0.5, 0.0), 0.5));
}

#[test]
fn repr_and_display() {
    let v = Vec2f::new(1.0, 2.0);
    assert_eq!(v.repr(), "Vec2f::new(1.000000, 2.000000)");
    assert_eq!(Vec2f::new(1.000000, 2.000000), v);
    assert_eq!(v.to_string(), "[1.000000, 2.000000]");
}

#[test]
fn conversions() {
    assert_eq!(Vec2f::from([1.0, 2.0]), Vec2f::new(1.0, 2.0));
    assert_eq!(Vec2f::from((1.0, 2.0)), Vec2f::new(1.0, 2.0));
    let a: [f32; 2] = Vec2f::new(1.0, 2.0).into();
    assert_eq!(a, [1.0, 2.0]);
    assert_eq!(Vec2f::new(1.0, 2.0).to_f64(), crate::vec2d::Vec2d::new(1.0, 2.0));
}

proptest! {
    #[test]
    fn length_squared_matches_squared_length(x in -1e3f32..1e3, y in -1e3f32..1e3) {
        let v = Vec2f::new(x, y);
        let lhs = v.length() * v.length();
        let rhs = v.squared_length();
        prop_assert!((lhs - rhs).abs() <= 1e-3 * rhs.abs().max(1.0));
    }

    #[test]
    fn nonzero_normalized_is_unit(x in -1e3f32..1e3, y in -1e3f32..1e3) {
        let v = Vec2f::new(x, y);
        prop_assume!(v.squared_length() > 1e-6);
        prop_assert!((v.normalized().length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn add_then_sub_round_trips(
        x1 in -1e3f32..1e3, y1 in -1e3f32..1e3,
        x2 in -1e3f32..1e3, y2 in -1e3f32..1e3,
    ) {
        let v1 = Vec2f::new(x1, y1);
        let v2 = Vec2f::new(x2, y2);
        prop_assert!(((v1 + v2) - v2).tol_eq(v1, 1e-2));
    }

    #[test]
    fn perp_dot_with_self_is_zero(x in -1e3f32..1e3, y in -1e3f32..1e3) {
        let v = Vec2f::new(x, y);
        prop_assert_eq!(v.perp_dot(v), 0.0);
    }

    #[test]
    fn dot_commutes(
        x1 in -1e3f32..1e3, y1 in -1e3f32..1e3,
        x2 in -1e3f32..1e3, y2 in -1e3f32..1e3,
    ) {
        let v1 = Vec2f::new(x1, y1);
        let v2 = Vec2f::new(x2, y2);
        prop_assert_eq!(v1.dot(v2), v2.dot(v1));
    }
}
