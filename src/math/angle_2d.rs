use super::Point2;

/// Computes the polar angle of the ray from `p` towards `q`, in radians.
///
/// The angle is 0 when `q` lies directly to the right of `p` on the same
/// horizontal line, and grows counter-clockwise. Range is (-pi, pi].
///
/// Coincident points are not meaningful here (`atan2(0, 0)` is 0 by
/// convention); callers must reject them before relying on the result.
#[must_use]
pub fn polar_angle(p: &Point2, q: &Point2) -> f64 {
    (q.y - p.y).atan2(q.x - p.x)
}
