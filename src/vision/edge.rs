//! Binary-search refinement of obstacle silhouettes.

use glam::Vec2;

use super::scan::{view_cast, ViewCastSample};
use super::VisionSettings;
use crate::raycast::Raycaster;

/// Up to two boundary points bracketing an obstacle silhouette.
///
/// `point_a` is the last sample that still behaved like the lower-angle
/// sample; `point_b` the last sample that behaved like the higher-angle one.
/// Either may be absent when the search never moved that side of the
/// bracket.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgePair {
    /// Boundary point on the lower-angle side of the edge.
    pub point_a: Option<Vec2>,
    /// Boundary point on the higher-angle side of the edge.
    pub point_b: Option<Vec2>,
}

impl EdgePair {
    /// Present points in angular order.
    pub fn points(&self) -> impl Iterator<Item = Vec2> {
        self.point_a.into_iter().chain(self.point_b)
    }
}

/// Narrows the angular gap between `min` and `max`, two neighbouring
/// samples that disagree about what they see.
///
/// Each of `settings.edge_resolve_iterations` steps casts the mid angle.
/// A sample that matches `min` (same hit state, distance within
/// `edge_dist_threshold`) moves the lower bound up; anything else moves the
/// upper bound down. After `n` steps the silhouette lies within
/// `(max.angle - min.angle) / 2^n` degrees of both reported points.
pub fn find_edge(
    min: &ViewCastSample,
    max: &ViewCastSample,
    origin: Vec2,
    settings: &VisionSettings,
    raycaster: &dyn Raycaster,
) -> EdgePair {
    let mut min_angle = min.angle;
    let mut max_angle = max.angle;
    let mut edge = EdgePair::default();

    for _ in 0..settings.edge_resolve_iterations {
        let angle = (min_angle + max_angle) / 2.0;
        let mid = view_cast(raycaster, origin, angle, settings);

        let distance_jump = (min.distance - mid.distance).abs() > settings.edge_dist_threshold;
        if mid.hit == min.hit && !distance_jump {
            min_angle = angle;
            edge.point_a = Some(mid.point);
        } else {
            max_angle = angle;
            edge.point_b = Some(mid.point);
        }
    }

    edge
}
