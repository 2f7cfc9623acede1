//! Planar distance and heading helpers
//!
//! Headings are in degrees, counter-clockwise from +X, in [0, 360).
//! Axis-aligned pairs resolve to exact multiples of 90 so that equal
//! coordinates never go through `atan2`.

use glam::DVec2;

/// Euclidean distance from `a` to `b`, plus the `(dx, dy)` components
#[inline]
pub fn distance(a: DVec2, b: DVec2) -> (f64, f64, f64) {
    let delta = b - a;
    (delta.length(), delta.x, delta.y)
}

/// Wrap an angle in degrees into [0, 360)
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Heading from `a` towards `b`
///
/// `angle(a, a)` is defined as 0.
pub fn angle(a: DVec2, b: DVec2) -> f64 {
    let (_, dx, dy) = distance(a, b);

    if dx == 0.0 {
        return if dy > 0.0 {
            90.0
        } else if dy < 0.0 {
            270.0
        } else {
            0.0
        };
    }

    if dy == 0.0 {
        return if dx > 0.0 { 0.0 } else { 180.0 };
    }

    normalize_degrees(dy.atan2(dx).to_degrees())
}

/// Heading perpendicular to the line from `a` to `b`
///
/// Used for strafing around the enemy. A vertical line (same X) yields 0
/// and a horizontal one yields 90; otherwise the negated reciprocal slope
/// is taken through `atan` and wrapped into [0, 360).
pub fn tangent_angle(a: DVec2, b: DVec2) -> f64 {
    let (_, dx, dy) = distance(a, b);

    if dx == 0.0 {
        return 0.0;
    }
    if dy == 0.0 {
        return 90.0;
    }

    let slope = dy / dx;
    normalize_degrees((-1.0 / slope).atan().to_degrees())
}

/// Circular mean of two headings (the bisector of the smaller arc between them)
///
/// Opposite headings have no bisector; the first one is returned.
pub fn mean_angle(a: f64, b: f64) -> f64 {
    let (sa, ca) = a.to_radians().sin_cos();
    let (sb, cb) = b.to_radians().sin_cos();
    let sum = DVec2::new(ca + cb, sa + sb);

    if sum.length_squared() < 1e-12 {
        return normalize_degrees(a);
    }
    normalize_degrees(sum.y.atan2(sum.x).to_degrees())
}
