//! Line data for debug visualisation of a guard.
//!
//! Nothing here draws; the overlay is plain geometry that an editor gizmo
//! layer or the CLI report can render however it likes.

use glam::Vec2;
use serde::Serialize;

use crate::constants::WAYPOINT_MARKER_RADIUS;
use crate::geometry::dir_from_angle;
use crate::guard::Guard;
use crate::raycast::Segment;

/// A circle in world space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Circle {
    /// Centre point.
    pub center: Vec2,
    /// Radius.
    pub radius: f32,
}

/// Debug geometry for one guard.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DebugOverlay {
    /// View radius around the guard.
    pub view_circle: Circle,
    /// Left and right boundaries of the view cone.
    pub cone_edges: [Segment; 2],
    /// Closed waypoint loop, one segment per waypoint.
    pub route: Vec<Segment>,
    /// Small markers on every waypoint.
    pub waypoint_markers: Vec<Circle>,
}

impl DebugOverlay {
    /// Builds the overlay for `guard` at its current pose.
    #[must_use]
    pub fn for_guard(guard: &Guard) -> Self {
        let pose = guard.pose();
        let vision = guard.vision();
        let half = vision.half_angle();
        let cone_ray = |offset: f32| {
            Segment::new(
                pose.position,
                pose.position + dir_from_angle(pose.heading + offset) * vision.view_radius,
            )
        };

        Self {
            view_circle: Circle {
                center: pose.position,
                radius: vision.view_radius,
            },
            cone_edges: [cone_ray(-half), cone_ray(half)],
            route: route_segments(guard.patrol().waypoints()),
            waypoint_markers: guard
                .patrol()
                .waypoints()
                .iter()
                .map(|point| Circle {
                    center: *point,
                    radius: WAYPOINT_MARKER_RADIUS,
                })
                .collect(),
        }
    }
}

/// Segments joining consecutive waypoints, closing the loop back to the
/// first. Empty for fewer than two waypoints.
#[must_use]
pub fn route_segments(waypoints: &[Vec2]) -> Vec<Segment> {
    if waypoints.len() < 2 {
        return Vec::new();
    }
    waypoints
        .iter()
        .zip(waypoints.iter().cycle().skip(1))
        .map(|(from, to)| Segment::new(*from, *to))
        .collect()
}
