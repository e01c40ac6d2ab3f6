//! Guard perception: field-of-view scanning and target detection.
//!
//! Every tick a guard sweeps a fan of rays across its view cone
//! ([`scan`]), refines the angular positions of obstacle silhouettes where
//! neighbouring rays disagree ([`edge`]) and turns the resulting boundary
//! trace into a triangle fan for rendering ([`polygon`]). Whether the guard
//! actually sees its target is answered separately by an exact
//! range/cone/occlusion test ([`detection`]) so detection never depends on
//! how coarse the rendered mesh is.

pub mod detection;
pub mod edge;
pub mod polygon;
pub mod scan;

pub use detection::{detect, is_visible, Detection};
pub use edge::{find_edge, EdgePair};
pub use polygon::VisibilityPolygon;
pub use scan::{view_cast, ViewCastSample, ViewScan};

use crate::numeric::step_count;
use crate::raycast::LayerMask;

/// Validated perception parameters of a single guard.
///
/// Build one through [`GuardConfig::validate`](crate::config::GuardConfig::validate)
/// to guarantee positive radius, angle and resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisionSettings {
    /// Maximum ray length.
    pub view_radius: f32,
    /// Full width of the view cone in degrees.
    pub view_angle: f32,
    /// Rays per degree of view angle.
    pub mesh_resolution: f32,
    /// Binary-search iterations per detected edge.
    pub edge_resolve_iterations: u32,
    /// Distance jump between neighbouring hits that counts as an edge.
    pub edge_dist_threshold: f32,
    /// Layers that block sight.
    pub obstacle_mask: LayerMask,
}

impl VisionSettings {
    /// Number of angular steps in one sweep; always at least one.
    #[must_use]
    pub fn step_count(&self) -> u32 {
        step_count(self.view_angle, self.mesh_resolution)
    }

    /// Half of the view cone width in degrees.
    #[must_use]
    pub fn half_angle(&self) -> f32 {
        self.view_angle / 2.0
    }
}
