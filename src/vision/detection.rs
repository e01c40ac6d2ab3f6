//! Exact line-of-sight test against a single target.
//!
//! Detection is answered geometrically rather than by sampling the rendered
//! view mesh, so a coarse mesh resolution never hides a target that is in
//! plain sight.

use glam::Vec2;
use serde::Serialize;

use crate::geometry::angle_between;
use crate::pose::Pose;
use crate::raycast::{cast_or_miss, LayerMask, Raycaster};

/// Outcome of a detection query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Detection {
    /// The target is in range, inside the cone and unobstructed.
    Visible,
    /// The target is further away than the view radius.
    OutOfRange,
    /// The target is in range but outside the view cone.
    OutsideCone,
    /// An obstacle blocks the line of sight.
    Occluded,
}

impl Detection {
    /// Collapses the outcome into the "target spotted" flag.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// Classifies whether a guard at `pose` can see `target`.
///
/// The checks run cheapest first: distance against `view_radius`, the
/// unsigned angle between the heading and the target against half of
/// `view_angle`, and finally a single ray toward the target over the
/// measured distance. A failed raycast counts as a clear line of sight.
///
/// Non-finite positions read as [`Detection::OutOfRange`] and a non-finite
/// heading as [`Detection::OutsideCone`], so a corrupted pose never raises
/// a sighting.
pub fn detect(
    pose: &Pose,
    target: Vec2,
    view_radius: f32,
    view_angle: f32,
    obstacle_mask: LayerMask,
    raycaster: &dyn Raycaster,
) -> Detection {
    let offset = target - pose.position;
    let distance = offset.length();
    if !distance.is_finite() || distance > view_radius {
        return Detection::OutOfRange;
    }
    if !pose.heading.is_finite() {
        return Detection::OutsideCone;
    }
    // Standing on the guard: nothing can be in between.
    let Some(direction) = offset.try_normalize() else {
        return Detection::Visible;
    };
    if angle_between(pose.forward(), direction) > view_angle / 2.0 {
        return Detection::OutsideCone;
    }
    match cast_or_miss(raycaster, pose.position, direction, distance, obstacle_mask) {
        Some(_) => Detection::Occluded,
        None => Detection::Visible,
    }
}

/// Returns `true` when a guard at `pose` can see `target`.
///
/// # Examples
/// ```
/// use glam::Vec2;
/// use lookout::pose::Pose;
/// use lookout::raycast::{LayerMask, SegmentWorld};
/// use lookout::vision::is_visible;
///
/// let world = SegmentWorld::new();
/// let guard = Pose::new(Vec2::ZERO, 0.0);
/// assert!(is_visible(&guard, Vec2::new(3.0, 0.0), 5.0, 90.0, LayerMask::ALL, &world));
/// assert!(!is_visible(&guard, Vec2::new(-3.0, 0.0), 5.0, 90.0, LayerMask::ALL, &world));
/// ```
pub fn is_visible(
    pose: &Pose,
    target: Vec2,
    view_radius: f32,
    view_angle: f32,
    obstacle_mask: LayerMask,
    raycaster: &dyn Raycaster,
) -> bool {
    detect(pose, target, view_radius, view_angle, obstacle_mask, raycaster).is_visible()
}
