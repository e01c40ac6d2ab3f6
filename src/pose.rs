//! Planar pose shared by patrol and perception.
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::geometry::dir_from_angle;

/// Position plus heading of an actor in the global frame.
///
/// `heading` is in degrees, counter-clockwise from +X.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// World-space position.
    pub position: Vec2,
    /// Facing in degrees.
    pub heading: f32,
}

impl Pose {
    /// Creates a pose from a position and heading.
    #[must_use]
    pub const fn new(position: Vec2, heading: f32) -> Self {
        Self { position, heading }
    }

    /// Unit vector the pose is facing along.
    #[must_use]
    pub fn forward(&self) -> Vec2 {
        dir_from_angle(self.heading)
    }

    /// Translates a world point into this pose's local frame.
    ///
    /// Only the translation is undone; axes stay aligned with the world so
    /// meshes parented to the guard line up with the world-space scan.
    #[must_use]
    pub fn to_local(&self, world: Vec2) -> Vec2 {
        world - self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn to_local_undoes_translation_only() {
        let pose = Pose::new(Vec2::new(2.0, -1.0), 90.0);
        assert_eq!(pose.to_local(Vec2::new(3.0, 1.0)), Vec2::new(1.0, 2.0));
        assert_eq!(pose.to_local(pose.position), Vec2::ZERO);
    }
}
