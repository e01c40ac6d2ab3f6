//! JSON scenario files: guards, obstacles and a target to watch for.
//!
//! ```json
//! {
//!   "guards": [
//!     { "name": "north", "waypoints": [[0, 0], [6, 0]], "config": { "view_radius": 6.0 } }
//!   ],
//!   "obstacles": [
//!     { "kind": "segment", "start": [3, -2], "end": [3, 2], "layer": 0 },
//!     { "kind": "box", "min": [8, 8], "max": [10, 10] }
//!   ],
//!   "target": [5, 1]
//! }
//! ```

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{ConfigError, GuardConfig};
use crate::guard::Guard;
use crate::raycast::{LayerMask, SegmentWorld};
use crate::roster::{GuardId, GuardRoster, RosterError};

/// Errors raised while loading a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The file could not be read.
    #[error("failed to read scenario {path:?}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The contents are not a valid scenario document.
    #[error("malformed scenario: {0}")]
    Json(#[from] serde_json::Error),
    /// A guard carries an invalid configuration.
    #[error("guard {name:?} has an invalid configuration: {source}")]
    InvalidGuard {
        /// Name of the offending guard.
        name: String,
        /// Validation failure.
        #[source]
        source: ConfigError,
    },
    /// The roster could not take another guard.
    #[error("cannot spawn guard: {0}")]
    Roster(#[from] RosterError),
}

/// One guard as authored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuardSpec {
    /// Display name, used in logs and reports.
    pub name: String,
    /// Tuning; missing fields fall back to the defaults.
    #[serde(default)]
    pub config: GuardConfig,
    /// Patrol loop.
    #[serde(default)]
    pub waypoints: Vec<Vec2>,
    /// Initial heading in degrees.
    #[serde(default)]
    pub heading: f32,
}

/// Blocking geometry as authored.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum ObstacleSpec {
    /// A single wall.
    Segment {
        /// First endpoint.
        start: Vec2,
        /// Second endpoint.
        end: Vec2,
        /// Layer index, 0 when omitted.
        #[serde(default)]
        layer: u32,
    },
    /// Four walls around an axis-aligned rectangle.
    #[serde(rename = "box")]
    Rectangle {
        /// Lower-left corner.
        min: Vec2,
        /// Upper-right corner.
        max: Vec2,
        /// Layer index, 0 when omitted.
        #[serde(default)]
        layer: u32,
    },
}

/// A complete scenario document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Guards to spawn, in order.
    #[serde(default)]
    pub guards: Vec<GuardSpec>,
    /// Level geometry.
    #[serde(default)]
    pub obstacles: Vec<ObstacleSpec>,
    /// Fixed target position, if any.
    #[serde(default)]
    pub target: Option<Vec2>,
}

impl Scenario {
    /// Reads and parses the scenario at `path`.
    ///
    /// # Errors
    /// Returns [`ScenarioError::Io`] when the file cannot be read and
    /// [`ScenarioError::Json`] when it does not parse.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let file = path.as_ref();
        let text = std::fs::read_to_string(file).map_err(|source| ScenarioError::Io {
            path: file.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Parses a scenario from JSON text.
    ///
    /// # Errors
    /// Returns [`ScenarioError::Json`] when `text` is not a valid scenario.
    pub fn from_json_str(text: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Builds the obstacle set.
    #[must_use]
    pub fn build_world(&self) -> SegmentWorld {
        let mut world = SegmentWorld::new();
        for obstacle in &self.obstacles {
            match *obstacle {
                ObstacleSpec::Segment { start, end, layer } => {
                    world.add_segment(start, end, LayerMask::layer(layer));
                }
                ObstacleSpec::Rectangle { min, max, layer } => {
                    world.add_box(min, max, LayerMask::layer(layer));
                }
            }
        }
        world
    }

    /// Validates every guard and spawns them in document order.
    ///
    /// Returns the roster together with each guard's name keyed by its id.
    ///
    /// # Errors
    /// Returns [`ScenarioError::InvalidGuard`] for the first guard whose
    /// configuration fails validation, or [`ScenarioError::Roster`] when
    /// the roster runs out of identifiers.
    pub fn build_roster(&self) -> Result<(GuardRoster, Vec<(GuardId, String)>), ScenarioError> {
        let mut roster = GuardRoster::new();
        let mut names = Vec::with_capacity(self.guards.len());
        for spec in &self.guards {
            let settings = spec
                .config
                .validate()
                .map_err(|source| ScenarioError::InvalidGuard {
                    name: spec.name.clone(),
                    source,
                })?;
            let id = roster.spawn(Guard::new(settings, spec.waypoints.clone(), spec.heading))?;
            names.push((id, spec.name.clone()));
        }
        Ok((roster, names))
    }
}
