extern crate nalgebra as na;
use na::Vector2;

pub type Float = f64;
pub type V2 = Vector2<Float>;
pub const EPSILON: Float = 0.000_001;

pub fn between(num: Float, a: Float, b: Float) -> bool {
    (num >= a) && (num <= b)
}

/// clamps `value` into `[-limit, limit]`
pub fn clamp_abs(value: Float, limit: Float) -> Float {
    let limit = limit.abs();
    value.max(-limit).min(limit)
}

/// clamps each axis of `v` into the box spanned by `limit`
pub fn clamp_box(v: V2, limit: V2) -> V2 {
    V2::new(clamp_abs(v.x, limit.x), clamp_abs(v.y, limit.y))
}

/// picks the signed correction with the smaller magnitude:
/// `near` when `|near| < |far|`, otherwise `-far`
pub fn nearer_side(near: Float, far: Float) -> Float {
    if near.abs() < far.abs() {
        near
    } else {
        -far
    }
}

/// normalizes `v`, returning the zero vector when `v` is (almost) zero
pub fn normalize_or_zero(v: V2) -> V2 {
    let norm = v.norm();
    if norm < EPSILON {
        V2::zeros()
    } else {
        v / norm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_abs_is_symmetric() {
        assert_eq!(clamp_abs(12.0, 10.0), 10.0);
        assert_eq!(clamp_abs(-12.0, 10.0), -10.0);
        assert_eq!(clamp_abs(3.0, 10.0), 3.0);
        assert_eq!(clamp_abs(3.0, -1.0), 1.0);
    }

    #[test]
    fn nearer_side_picks_smaller_magnitude() {
        assert_eq!(nearer_side(2.0, 18.0), 2.0);
        assert_eq!(nearer_side(12.0, 8.0), -8.0);
        // ties fall through to the far side
        assert_eq!(nearer_side(5.0, 5.0), -5.0);
    }

    #[test]
    fn normalize_or_zero_handles_zero() {
        assert_eq!(normalize_or_zero(V2::zeros()), V2::zeros());
        let n = normalize_or_zero(V2::new(3.0, 4.0));
        assert!((n.norm() - 1.0).abs() < EPSILON);
        assert!(between(n.x, 0.59, 0.61));
    }

    #[quickcheck]
    fn clamp_box_stays_in_box(x: Float, y: Float) -> bool {
        if !x.is_finite() || !y.is_finite() {
            return true;
        }
        let c = clamp_box(V2::new(x, y), V2::new(10.0, 10.0));
        c.x.abs() <= 10.0 && c.y.abs() <= 10.0
    }
}
