//! Raycasting seam between guard perception and the world.
//!
//! Perception code never inspects obstacles directly. It asks a
//! [`Raycaster`] for the first obstacle along a ray and treats any failure
//! as an unobstructed view, so a misbehaving physics layer degrades vision
//! instead of aborting the tick.
//!
//! [`SegmentWorld`] is an in-memory implementation built from layered line
//! segments. It backs the command-line simulator and the test suites.

use std::ops::BitOr;

use glam::Vec2;
use log::warn;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bit set selecting which obstacle layers a ray collides with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Mask that collides with nothing.
    pub const NONE: Self = Self(0);
    /// Mask that collides with every layer.
    pub const ALL: Self = Self(u32::MAX);

    /// Mask containing the single layer `index`.
    ///
    /// Indices outside `0..32` produce [`LayerMask::NONE`].
    ///
    /// # Examples
    /// ```
    /// use lookout::raycast::LayerMask;
    /// assert_eq!(LayerMask::layer(3), LayerMask(0b1000));
    /// assert_eq!(LayerMask::layer(40), LayerMask::NONE);
    /// ```
    #[must_use]
    pub fn layer(index: u32) -> Self {
        Self(1_u32.checked_shl(index).unwrap_or(0))
    }

    /// Returns `true` when the two masks share at least one layer.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns `true` when no layer is selected.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for LayerMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// First obstacle intersection along a ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaycastHit {
    /// World-space point where the ray met the obstacle.
    pub point: Vec2,
    /// Distance from the ray origin to `point`.
    pub distance: f32,
}

/// Reasons a raycaster may refuse a query.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RaycastError {
    /// The direction has no length or contains non-finite components.
    #[error("ray direction {direction:?} is degenerate")]
    DegenerateDirection {
        /// Direction supplied by the caller.
        direction: Vec2,
    },
    /// The maximum distance is negative or not finite.
    #[error("ray length {max_distance} is invalid")]
    InvalidDistance {
        /// Length supplied by the caller.
        max_distance: f32,
    },
    /// The backing physics service rejected the query.
    #[error("raycast service failure: {0}")]
    Service(String),
}

/// A synchronous, side-effect-free 2D raycasting service.
#[cfg_attr(test, mockall::automock)]
pub trait Raycaster {
    /// Casts a ray from `origin` along `direction` for at most
    /// `max_distance`, colliding only with obstacles on `mask`.
    ///
    /// Returns `Ok(None)` when nothing is hit.
    ///
    /// # Errors
    /// Implementations return a [`RaycastError`] when the query itself is
    /// invalid or cannot be served.
    fn cast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: LayerMask,
    ) -> Result<Option<RaycastHit>, RaycastError>;
}

/// Casts a ray and folds failures into "no hit".
///
/// The failure is logged at `warn` level so misconfigured masks or broken
/// adapters stay visible without interrupting the tick.
pub fn cast_or_miss(
    raycaster: &dyn Raycaster,
    origin: Vec2,
    direction: Vec2,
    max_distance: f32,
    mask: LayerMask,
) -> Option<RaycastHit> {
    match raycaster.cast(origin, direction, max_distance, mask) {
        Ok(hit) => hit,
        Err(err) => {
            warn!("raycast from {origin:?} treated as clear: {err}");
            None
        }
    }
}

/// A line segment in world space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// First endpoint.
    pub start: Vec2,
    /// Second endpoint.
    pub end: Vec2,
}

impl Segment {
    /// Creates a segment between two points.
    #[must_use]
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Length of the segment.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Distance along the unit ray `origin + t * dir` at which it crosses
    /// this segment, if it does so within `max_distance`.
    ///
    /// Rays parallel to the segment never hit it. Parallelism is judged
    /// relative to the segment's length so short walls still block.
    fn ray_intersection(&self, origin: Vec2, dir: Vec2, max_distance: f32) -> Option<f32> {
        let edge = self.end - self.start;
        let denom = dir.perp_dot(edge);
        if denom.abs() <= f32::EPSILON * edge.length() {
            return None;
        }
        let to_start = self.start - origin;
        let t = to_start.perp_dot(edge) / denom;
        let u = to_start.perp_dot(dir) / denom;
        ((0.0..=1.0).contains(&u) && (0.0..=max_distance).contains(&t)).then_some(t)
    }
}

/// A segment obstacle tagged with the layers it occupies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obstacle {
    /// Blocking geometry.
    pub segment: Segment,
    /// Layers the obstacle belongs to.
    pub layers: LayerMask,
}

/// In-memory obstacle set answering raycasts by brute force.
#[derive(Clone, Debug, Default)]
pub struct SegmentWorld {
    obstacles: Vec<Obstacle>,
}

impl SegmentWorld {
    /// Creates an empty world.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            obstacles: Vec::new(),
        }
    }

    /// Adds a wall segment on `layers`.
    pub fn add_segment(&mut self, start: Vec2, end: Vec2, layers: LayerMask) {
        self.obstacles.push(Obstacle {
            segment: Segment::new(start, end),
            layers,
        });
    }

    /// Adds the four walls of the axis-aligned box spanning `min`..`max`.
    pub fn add_box(&mut self, min: Vec2, max: Vec2, layers: LayerMask) {
        let corners = [
            Vec2::new(min.x, min.y),
            Vec2::new(max.x, min.y),
            Vec2::new(max.x, max.y),
            Vec2::new(min.x, max.y),
        ];
        for (start, end) in corners.iter().zip(corners.iter().cycle().skip(1)) {
            self.add_segment(*start, *end, layers);
        }
    }

    /// Builder form of [`SegmentWorld::add_segment`].
    #[must_use]
    pub fn with_segment(mut self, start: Vec2, end: Vec2, layers: LayerMask) -> Self {
        self.add_segment(start, end, layers);
        self
    }

    /// Builder form of [`SegmentWorld::add_box`].
    #[must_use]
    pub fn with_box(mut self, min: Vec2, max: Vec2, layers: LayerMask) -> Self {
        self.add_box(min, max, layers);
        self
    }

    /// All obstacles in insertion order.
    #[must_use]
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }
}

impl Raycaster for SegmentWorld {
    fn cast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: LayerMask,
    ) -> Result<Option<RaycastHit>, RaycastError> {
        if !max_distance.is_finite() || max_distance < 0.0 {
            return Err(RaycastError::InvalidDistance { max_distance });
        }
        let dir = direction
            .try_normalize()
            .ok_or(RaycastError::DegenerateDirection { direction })?;

        let nearest = self
            .obstacles
            .iter()
            .filter(|obstacle| obstacle.layers.intersects(mask))
            .filter_map(|obstacle| obstacle.segment.ray_intersection(origin, dir, max_distance))
            .min_by_key(|distance| OrderedFloat(*distance));

        Ok(nearest.map(|distance| RaycastHit {
            point: origin + dir * distance,
            distance,
        }))
    }
}
