//! Planar angle and vector helpers.
//!
//! Angles are expressed in degrees, measured counter-clockwise from the
//! global +X axis. Every helper here is pure and allocation free.
use glam::Vec2;

/// Returns the unit vector pointing along `degrees`.
///
/// # Examples
/// ```
/// use lookout::geometry::dir_from_angle;
/// let up = dir_from_angle(90.0);
/// assert!(up.x.abs() < 1e-6);
/// assert!((up.y - 1.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn dir_from_angle(degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(cos, sin)
}

/// Wraps an angle into the half-open range `(-180, 180]`.
///
/// # Examples
/// ```
/// use lookout::geometry::normalize_angle;
/// assert!((normalize_angle(270.0) + 90.0).abs() < 1e-4);
/// assert!((normalize_angle(-180.0) - 180.0).abs() < 1e-4);
/// ```
#[must_use]
pub fn normalize_angle(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Heading in degrees of the displacement `delta`, or `None` when the
/// displacement is zero and has no direction.
#[must_use]
pub fn heading_of(delta: Vec2) -> Option<f32> {
    if delta == Vec2::ZERO || !delta.is_finite() {
        return None;
    }
    Some(delta.y.atan2(delta.x).to_degrees())
}

/// Unsigned angle between two vectors in degrees, in `[0, 180]`.
///
/// Degenerate (zero-length) inputs yield `0`, so a target standing on the
/// observer is always "in front".
#[must_use]
pub fn angle_between(from: Vec2, to: Vec2) -> f32 {
    if from == Vec2::ZERO || to == Vec2::ZERO {
        return 0.0;
    }
    from.perp_dot(to).atan2(from.dot(to)).abs().to_degrees()
}

/// Moves `current` toward `target` by at most `max_step`, never
/// overshooting.
///
/// # Examples
/// ```
/// use glam::Vec2;
/// use lookout::geometry::move_towards;
/// let halfway = move_towards(Vec2::ZERO, Vec2::new(4.0, 0.0), 2.0);
/// assert_eq!(halfway, Vec2::new(2.0, 0.0));
/// let arrived = move_towards(Vec2::ZERO, Vec2::new(1.0, 0.0), 5.0);
/// assert_eq!(arrived, Vec2::new(1.0, 0.0));
/// ```
#[must_use]
pub fn move_towards(current: Vec2, target: Vec2, max_step: f32) -> Vec2 {
    let delta = target - current;
    let distance = delta.length();
    if distance <= max_step || distance == 0.0 {
        return target;
    }
    if max_step <= 0.0 {
        return current;
    }
    current + delta / distance * max_step
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, Vec2::X)]
    #[case(180.0, Vec2::NEG_X)]
    #[case(-90.0, Vec2::NEG_Y)]
    #[case(450.0, Vec2::Y)]
    fn direction_matches_axis(#[case] degrees: f32, #[case] expected: Vec2) {
        let dir = dir_from_angle(degrees);
        assert_relative_eq!(dir.x, expected.x, epsilon = 1e-5);
        assert_relative_eq!(dir.y, expected.y, epsilon = 1e-5);
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(190.0, -170.0)]
    #[case(-190.0, 170.0)]
    #[case(720.0, 0.0)]
    #[case(180.0, 180.0)]
    fn normalize_wraps(#[case] input: f32, #[case] expected: f32) {
        assert_relative_eq!(normalize_angle(input), expected, epsilon = 1e-4);
    }

    #[rstest]
    fn heading_of_zero_is_none() {
        assert!(heading_of(Vec2::ZERO).is_none());
    }

    #[rstest]
    fn heading_of_diagonal() {
        let heading = heading_of(Vec2::new(-1.0, -1.0)).expect("non-zero delta has a heading");
        assert_relative_eq!(heading, -135.0, epsilon = 1e-4);
    }

    #[rstest]
    #[case(Vec2::X, Vec2::Y, 90.0)]
    #[case(Vec2::X, Vec2::NEG_Y, 90.0)]
    #[case(Vec2::X, Vec2::NEG_X, 180.0)]
    #[case(Vec2::X, Vec2::new(1.0, 1.0), 45.0)]
    #[case(Vec2::X, Vec2::ZERO, 0.0)]
    fn angle_between_is_unsigned(#[case] from: Vec2, #[case] to: Vec2, #[case] expected: f32) {
        assert_relative_eq!(angle_between(from, to), expected, epsilon = 1e-4);
    }

    #[rstest]
    fn move_towards_with_zero_step_stays_put() {
        let start = Vec2::new(1.0, 1.0);
        assert_eq!(move_towards(start, Vec2::new(5.0, 5.0), 0.0), start);
    }
}
