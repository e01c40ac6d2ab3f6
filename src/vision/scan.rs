//! Angular ray sweep across a guard's field of view.

use glam::Vec2;
use log::trace;

use super::edge::find_edge;
use super::VisionSettings;
use crate::geometry::dir_from_angle;
use crate::numeric::step_to_f32;
use crate::pose::Pose;
use crate::raycast::{cast_or_miss, Raycaster};

/// Result of one vision ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewCastSample {
    /// Whether an obstacle stopped the ray.
    pub hit: bool,
    /// Hit point, or the ray's far endpoint on a miss.
    pub point: Vec2,
    /// Distance travelled; the view radius on a miss.
    pub distance: f32,
    /// Global angle of the ray in degrees.
    pub angle: f32,
}

impl ViewCastSample {
    /// Returns `true` when the boundary jumps between `self` and `next`:
    /// one ray is blocked and the other is not, or both are blocked at
    /// distances further apart than `threshold`.
    #[must_use]
    pub fn is_discontinuous_with(&self, next: &Self, threshold: f32) -> bool {
        self.hit != next.hit
            || (self.hit && next.hit && (self.distance - next.distance).abs() > threshold)
    }
}

/// Casts a single vision ray at `angle` degrees from `origin`.
pub fn view_cast(
    raycaster: &dyn Raycaster,
    origin: Vec2,
    angle: f32,
    settings: &VisionSettings,
) -> ViewCastSample {
    let dir = dir_from_angle(angle);
    match cast_or_miss(
        raycaster,
        origin,
        dir,
        settings.view_radius,
        settings.obstacle_mask,
    ) {
        Some(hit) => ViewCastSample {
            hit: true,
            point: hit.point,
            distance: hit.distance,
            angle,
        },
        None => ViewCastSample {
            hit: false,
            point: origin + dir * settings.view_radius,
            distance: settings.view_radius,
            angle,
        },
    }
}

/// Buffers produced by one field-of-view sweep.
///
/// A guard keeps one `ViewScan` and rebuilds it in place every tick, so the
/// allocations are reused while the contents never carry over.
#[derive(Clone, Debug, Default)]
pub struct ViewScan {
    samples: Vec<ViewCastSample>,
    boundary: Vec<Vec2>,
    edges_refined: usize,
}

impl ViewScan {
    /// Runs a fresh sweep for `pose`.
    #[must_use]
    pub fn new(pose: &Pose, settings: &VisionSettings, raycaster: &dyn Raycaster) -> Self {
        let mut scan = Self::default();
        scan.rebuild(pose, settings, raycaster);
        scan
    }

    /// Discards the previous sweep and scans again from `pose`.
    ///
    /// Rays are cast at `heading - view_angle / 2 + i * step` for
    /// `i in 0..=step_count`. Whenever two neighbouring samples straddle an
    /// obstacle silhouette the edge is refined and its points are inserted
    /// ahead of the later sample, keeping the boundary in angular order.
    pub fn rebuild(&mut self, pose: &Pose, settings: &VisionSettings, raycaster: &dyn Raycaster) {
        self.samples.clear();
        self.boundary.clear();
        self.edges_refined = 0;

        let steps = settings.step_count();
        let step_angle = settings.view_angle / step_to_f32(steps);
        let start_angle = pose.heading - settings.half_angle();
        let mut previous: Option<ViewCastSample> = None;

        for step in 0..=steps {
            let angle = start_angle + step_angle * step_to_f32(step);
            let sample = view_cast(raycaster, pose.position, angle, settings);

            if let Some(prev) = previous {
                if prev.is_discontinuous_with(&sample, settings.edge_dist_threshold) {
                    let edge = find_edge(&prev, &sample, pose.position, settings, raycaster);
                    self.boundary.extend(edge.points());
                    self.edges_refined += 1;
                }
            }

            self.boundary.push(sample.point);
            self.samples.push(sample);
            previous = Some(sample);
        }

        trace!(
            "scan from {:?}: {} rays, {} edges, {} boundary points",
            pose.position,
            self.samples.len(),
            self.edges_refined,
            self.boundary.len()
        );
    }

    /// Raw samples in sweep order, one per ray before edge splicing.
    #[must_use]
    pub fn samples(&self) -> &[ViewCastSample] {
        &self.samples
    }

    /// Boundary trace in angular order, including refined edge points.
    #[must_use]
    pub fn boundary(&self) -> &[Vec2] {
        &self.boundary
    }

    /// Number of discontinuities that were refined during the sweep.
    #[must_use]
    pub const fn edges_refined(&self) -> usize {
        self.edges_refined
    }
}
