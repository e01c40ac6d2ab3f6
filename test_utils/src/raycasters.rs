//! Deterministic [`Raycaster`] stubs.

use std::sync::atomic::{AtomicUsize, Ordering};

use glam::Vec2;
use lookout::raycast::{LayerMask, RaycastError, RaycastHit, Raycaster};

/// Hits at a fixed distance for every ray whose angle is below
/// `edge_angle` degrees and misses everything at or above it.
///
/// # Examples
/// ```
/// use glam::Vec2;
/// use lookout::raycast::{LayerMask, Raycaster};
/// use test_utils::StepRaycaster;
///
/// let stub = StepRaycaster::new(5.0, 7.0);
/// assert!(stub.cast(Vec2::ZERO, Vec2::X, 10.0, LayerMask::ALL).unwrap().is_some());
/// assert!(stub.cast(Vec2::ZERO, Vec2::Y, 10.0, LayerMask::ALL).unwrap().is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepRaycaster {
    /// Distance reported for blocked rays.
    pub hit_distance: f32,
    /// Angle in degrees where the obstacle ends.
    pub edge_angle: f32,
}

impl StepRaycaster {
    /// Create a new [`StepRaycaster`].
    pub fn new(hit_distance: f32, edge_angle: f32) -> Self {
        Self {
            hit_distance,
            edge_angle,
        }
    }
}

impl Raycaster for StepRaycaster {
    fn cast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        _mask: LayerMask,
    ) -> Result<Option<RaycastHit>, RaycastError> {
        let dir = direction
            .try_normalize()
            .ok_or(RaycastError::DegenerateDirection { direction })?;
        let angle = dir.y.atan2(dir.x).to_degrees();
        if angle < self.edge_angle && self.hit_distance <= max_distance {
            Ok(Some(RaycastHit {
                point: origin + dir * self.hit_distance,
                distance: self.hit_distance,
            }))
        } else {
            Ok(None)
        }
    }
}

/// Wraps another raycaster and counts the casts made through it.
#[derive(Debug, Default)]
pub struct CountingRaycaster<R> {
    inner: R,
    casts: AtomicUsize,
}

impl<R> CountingRaycaster<R> {
    /// Wrap `inner`.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            casts: AtomicUsize::new(0),
        }
    }

    /// Number of casts so far.
    pub fn casts(&self) -> usize {
        self.casts.load(Ordering::Relaxed)
    }
}

impl<R: Raycaster> Raycaster for CountingRaycaster<R> {
    fn cast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: LayerMask,
    ) -> Result<Option<RaycastHit>, RaycastError> {
        self.casts.fetch_add(1, Ordering::Relaxed);
        self.inner.cast(origin, direction, max_distance, mask)
    }
}
