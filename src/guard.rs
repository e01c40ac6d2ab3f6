//! A single patrolling guard and its per-tick update.

use glam::Vec2;

use crate::config::GuardSettings;
use crate::patrol::Patrol;
use crate::pose::Pose;
use crate::raycast::Raycaster;
use crate::vision::{detect, Detection, ViewScan, VisibilityPolygon, VisionSettings};

/// What one call to [`Guard::tick`] observed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GuardTick {
    /// Whether the target was visible from the pose held at the start of
    /// the tick.
    pub spotted: bool,
    /// Full detection outcome; `None` when no target was supplied.
    pub detection: Option<Detection>,
}

/// A guard that walks its waypoint loop and looks around every tick.
///
/// All mutable state lives here, including the scan buffers and the view
/// polygon, so independent guards can be ticked in any order or from
/// different threads.
#[derive(Clone, Debug)]
pub struct Guard {
    pose: Pose,
    patrol: Patrol,
    vision: VisionSettings,
    scan: ViewScan,
    polygon: VisibilityPolygon,
}

impl Guard {
    /// Creates a guard standing on the first waypoint and facing `heading`.
    ///
    /// The view buffers stay empty until the first [`Guard::tick`].
    #[must_use]
    pub fn new(settings: GuardSettings, waypoints: Vec<Vec2>, heading: f32) -> Self {
        let mut pose = Pose::new(Vec2::ZERO, heading);
        let mut patrol = Patrol::new(waypoints, settings.patrol);
        patrol.start(&mut pose);
        Self {
            pose,
            patrol,
            vision: settings.vision,
            scan: ViewScan::default(),
            polygon: VisibilityPolygon::default(),
        }
    }

    /// Runs one update of `dt` seconds.
    ///
    /// Detection is evaluated against the current pose first, then the
    /// patrol moves the guard, and finally the view is rescanned and the
    /// polygon rebuilt from the new pose.
    pub fn tick(&mut self, dt: f32, raycaster: &dyn Raycaster, target: Option<Vec2>) -> GuardTick {
        let detection = target.map(|position| {
            detect(
                &self.pose,
                position,
                self.vision.view_radius,
                self.vision.view_angle,
                self.vision.obstacle_mask,
                raycaster,
            )
        });

        self.patrol.tick(&mut self.pose, dt);
        self.refresh_view(raycaster);

        GuardTick {
            spotted: detection.is_some_and(Detection::is_visible),
            detection,
        }
    }

    /// Rescans the view and rebuilds the polygon without moving.
    pub fn refresh_view(&mut self, raycaster: &dyn Raycaster) {
        self.scan.rebuild(&self.pose, &self.vision, raycaster);
        self.polygon.rebuild(&self.pose, self.scan.boundary());
    }

    /// Whether the guard can currently see `target`.
    #[must_use]
    pub fn can_see(&self, target: Vec2, raycaster: &dyn Raycaster) -> bool {
        detect(
            &self.pose,
            target,
            self.vision.view_radius,
            self.vision.view_angle,
            self.vision.obstacle_mask,
            raycaster,
        )
        .is_visible()
    }

    /// Current pose.
    #[must_use]
    pub const fn pose(&self) -> Pose {
        self.pose
    }

    /// Overrides the pose, e.g. when an external system teleports the guard.
    pub const fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    /// Patrol progress.
    #[must_use]
    pub const fn patrol(&self) -> &Patrol {
        &self.patrol
    }

    /// Perception parameters.
    #[must_use]
    pub const fn vision(&self) -> &VisionSettings {
        &self.vision
    }

    /// Latest field-of-view scan.
    #[must_use]
    pub const fn scan(&self) -> &ViewScan {
        &self.scan
    }

    /// Latest visibility polygon, local to [`Guard::pose`].
    #[must_use]
    pub const fn polygon(&self) -> &VisibilityPolygon {
        &self.polygon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GuardConfig;
    use crate::raycast::{LayerMask, SegmentWorld};
    use rstest::{fixture, rstest};

    #[fixture]
    fn settings() -> GuardSettings {
        GuardConfig {
            view_angle: 90.0,
            ..GuardConfig::default()
        }
        .validate()
        .expect("valid config")
    }

    #[rstest]
    fn new_guard_stands_on_first_waypoint(settings: GuardSettings) {
        let guard = Guard::new(settings, vec![Vec2::new(3.0, 4.0), Vec2::ZERO], 90.0);
        assert_eq!(guard.pose(), Pose::new(Vec2::new(3.0, 4.0), 90.0));
        assert!(guard.polygon().is_empty());
    }

    #[rstest]
    fn tick_builds_polygon_from_scan(settings: GuardSettings) {
        let world = SegmentWorld::new();
        let mut guard = Guard::new(settings, Vec::new(), 0.0);
        let outcome = guard.tick(0.1, &world, None);
        assert_eq!(outcome, GuardTick::default());
        assert_eq!(guard.scan().samples().len(), 91);
        assert_eq!(guard.polygon().triangle_count(), 90);
    }

    #[rstest]
    fn detection_uses_pose_before_moving(settings: GuardSettings) {
        // The guard turns away on this tick, but the target was in front of
        // it when the tick began.
        let world = SegmentWorld::new();
        let mut guard = Guard::new(settings, vec![Vec2::new(-10.0, 0.0)], 0.0);
        guard.set_pose(Pose::new(Vec2::ZERO, 0.0));
        let target = Vec2::new(2.0, 0.0);
        let outcome = guard.tick(0.1, &world, Some(target));
        assert!(outcome.spotted);
        assert!((guard.pose().heading - 180.0).abs() < 1e-4);
        assert!(!guard.can_see(target, &world));
    }

    #[rstest]
    fn occluded_target_is_reported(settings: GuardSettings) {
        let world =
            SegmentWorld::new().with_segment(Vec2::new(1.0, -1.0), Vec2::new(1.0, 1.0), LayerMask::ALL);
        let mut guard = Guard::new(settings, Vec::new(), 0.0);
        let outcome = guard.tick(0.1, &world, Some(Vec2::new(3.0, 0.0)));
        assert!(!outcome.spotted);
        assert_eq!(outcome.detection, Some(Detection::Occluded));
    }

    #[rstest]
    fn set_pose_moves_the_view(settings: GuardSettings) {
        let world = SegmentWorld::new();
        let mut guard = Guard::new(settings, Vec::new(), 0.0);
        guard.set_pose(Pose::new(Vec2::new(5.0, 5.0), 180.0));
        assert!(guard.can_see(Vec2::new(3.0, 5.0), &world));
        guard.refresh_view(&world);
        let first = guard.scan().samples()[0];
        assert!((first.angle - 135.0).abs() < 1e-4);
        let local = guard.polygon().vertices()[1];
        assert_eq!(local, guard.pose().to_local(first.point));
        assert!((local.length() - guard.vision().view_radius).abs() < 1e-4);
    }
}
