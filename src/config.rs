//! Guard configuration as authored in scenario files.
//!
//! [`GuardConfig`] is the raw, serde-facing form; every field falls back to
//! the defaults in [`crate::constants`]. [`GuardConfig::validate`] turns it
//! into the settings the patrol and vision code run on, rejecting values
//! that would make the sweep meaningless or divide by zero.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DEFAULT_EDGE_DIST_THRESHOLD, DEFAULT_EDGE_RESOLVE_ITERATIONS, DEFAULT_MESH_RESOLUTION,
    DEFAULT_MOVE_SPEED, DEFAULT_VIEW_ANGLE, DEFAULT_VIEW_RADIUS, DEFAULT_WAYPOINT_STOP_TIME,
    MAX_MESH_RESOLUTION, MAX_VIEW_ANGLE,
};
use crate::patrol::PatrolSettings;
use crate::raycast::LayerMask;
use crate::vision::VisionSettings;

/// Errors raised while validating a [`GuardConfig`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A field that must be strictly positive was zero, negative or NaN.
    #[error("{field} must be a positive finite number, got {value}")]
    NonPositive {
        /// Name of the offending field.
        field: &'static str,
        /// Value found in the configuration.
        value: f32,
    },
    /// A field that must not be negative was negative or NaN.
    #[error("{field} must be a non-negative finite number, got {value}")]
    Negative {
        /// Name of the offending field.
        field: &'static str,
        /// Value found in the configuration.
        value: f32,
    },
    /// The view cone is wider than a full turn.
    #[error("view_angle must not exceed 360 degrees, got {0}")]
    ViewAngleTooWide(f32),
    /// The sweep would cast more rays per degree than a tick can afford.
    #[error("mesh_resolution must not exceed 10 rays per degree, got {0}")]
    MeshResolutionTooFine(f32),
}

/// Raw tuning for one guard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuardConfig {
    /// Patrol speed in distance units per second.
    pub move_speed: f32,
    /// Seconds spent on each waypoint.
    pub waypoint_stop_time: f32,
    /// Maximum sight distance.
    pub view_radius: f32,
    /// Full view cone width in degrees.
    pub view_angle: f32,
    /// Rays per degree of view angle.
    pub mesh_resolution: f32,
    /// Binary-search iterations per detected edge.
    pub edge_resolve_iterations: u32,
    /// Distance jump between neighbouring hits that counts as an edge.
    pub edge_dist_threshold: f32,
    /// Obstacle layers that block sight.
    pub obstacle_mask: LayerMask,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
            waypoint_stop_time: DEFAULT_WAYPOINT_STOP_TIME,
            view_radius: DEFAULT_VIEW_RADIUS,
            view_angle: DEFAULT_VIEW_ANGLE,
            mesh_resolution: DEFAULT_MESH_RESOLUTION,
            edge_resolve_iterations: DEFAULT_EDGE_RESOLVE_ITERATIONS,
            edge_dist_threshold: DEFAULT_EDGE_DIST_THRESHOLD,
            obstacle_mask: LayerMask::ALL,
        }
    }
}

/// Validated settings for a guard.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GuardSettings {
    /// Movement parameters.
    pub patrol: PatrolSettings,
    /// Perception parameters.
    pub vision: VisionSettings,
}

fn positive(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

impl GuardConfig {
    /// Checks every field and produces runtime settings.
    ///
    /// # Errors
    /// Returns [`ConfigError::NonPositive`] for a radius, angle or
    /// resolution that is not a positive finite number,
    /// [`ConfigError::ViewAngleTooWide`] for cones over 360°,
    /// [`ConfigError::MeshResolutionTooFine`] for more than
    /// [`MAX_MESH_RESOLUTION`] rays per degree, and
    /// [`ConfigError::Negative`] for negative speed, dwell time or edge
    /// threshold.
    ///
    /// # Examples
    /// ```
    /// use lookout::config::{ConfigError, GuardConfig};
    /// assert!(GuardConfig::default().validate().is_ok());
    /// let blind = GuardConfig { view_radius: 0.0, ..GuardConfig::default() };
    /// assert!(matches!(blind.validate(), Err(ConfigError::NonPositive { .. })));
    /// ```
    pub fn validate(&self) -> Result<GuardSettings, ConfigError> {
        let view_angle = positive("view_angle", self.view_angle)?;
        if view_angle > MAX_VIEW_ANGLE {
            return Err(ConfigError::ViewAngleTooWide(view_angle));
        }
        let mesh_resolution = positive("mesh_resolution", self.mesh_resolution)?;
        if mesh_resolution > MAX_MESH_RESOLUTION {
            return Err(ConfigError::MeshResolutionTooFine(mesh_resolution));
        }
        Ok(GuardSettings {
            patrol: PatrolSettings {
                move_speed: non_negative("move_speed", self.move_speed)?,
                waypoint_stop_time: non_negative("waypoint_stop_time", self.waypoint_stop_time)?,
            },
            vision: VisionSettings {
                view_radius: positive("view_radius", self.view_radius)?,
                view_angle,
                mesh_resolution,
                edge_resolve_iterations: self.edge_resolve_iterations,
                edge_dist_threshold: non_negative("edge_dist_threshold", self.edge_dist_threshold)?,
                obstacle_mask: self.obstacle_mask,
            },
        })
    }
}
