//! Waypoint patrol state machine.
//!
//! A patrolling guard alternates between walking to its current waypoint
//! and dwelling there. The dwell is a countdown polled once per tick rather
//! than a blocking wait, so perception keeps running while the guard stands
//! still.

use glam::Vec2;
use log::debug;
use serde::Serialize;

use crate::constants::WAYPOINT_REACHED_EPSILON;
use crate::geometry::{heading_of, move_towards};
use crate::pose::Pose;

/// Movement parameters of a patrol.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PatrolSettings {
    /// Distance units per second.
    pub move_speed: f32,
    /// Seconds to dwell at each waypoint.
    pub waypoint_stop_time: f32,
}

/// What the patrol is currently doing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum PatrolMode {
    /// Walking toward the current waypoint.
    #[default]
    Moving,
    /// Standing on the current waypoint until the dwell timer expires.
    Waiting,
}

/// Position of the guard within its waypoint loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct PatrolCursor {
    /// Index of the waypoint being approached or dwelt on.
    pub index: usize,
    /// Seconds of dwell left; only meaningful while waiting.
    pub dwell_remaining: f32,
    /// Current state.
    pub mode: PatrolMode,
}

/// A guard's waypoint loop and its progress through it.
#[derive(Clone, Debug)]
pub struct Patrol {
    waypoints: Vec<Vec2>,
    settings: PatrolSettings,
    cursor: PatrolCursor,
}

impl Patrol {
    /// Creates a patrol over `waypoints`, heading for the first one.
    #[must_use]
    pub fn new(waypoints: Vec<Vec2>, settings: PatrolSettings) -> Self {
        Self {
            waypoints,
            settings,
            cursor: PatrolCursor::default(),
        }
    }

    /// Resets the cursor and teleports `pose` onto the first waypoint.
    ///
    /// Leaves `pose` untouched when there are no waypoints.
    pub fn start(&mut self, pose: &mut Pose) {
        self.cursor = PatrolCursor::default();
        if let Some(first) = self.waypoints.first() {
            pose.position = *first;
        }
    }

    /// Advances the patrol by `dt` seconds, moving `pose`.
    ///
    /// Negative or non-finite `dt` counts as no time passing.
    pub fn tick(&mut self, pose: &mut Pose, dt: f32) {
        let elapsed = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let Some(target) = self.waypoints.get(self.cursor.index).copied() else {
            return;
        };

        match self.cursor.mode {
            PatrolMode::Moving => {
                pose.position =
                    move_towards(pose.position, target, self.settings.move_speed * elapsed);
                if let Some(heading) = heading_of(target - pose.position) {
                    pose.heading = heading;
                }
                if pose.position.distance(target) < WAYPOINT_REACHED_EPSILON {
                    debug!(
                        "reached waypoint {} at {:?}; dwelling {}s",
                        self.cursor.index, target, self.settings.waypoint_stop_time
                    );
                    self.cursor.mode = PatrolMode::Waiting;
                    self.cursor.dwell_remaining = self.settings.waypoint_stop_time;
                }
            }
            PatrolMode::Waiting => {
                self.cursor.dwell_remaining -= elapsed;
                if self.cursor.dwell_remaining <= 0.0 {
                    self.cursor.index = (self.cursor.index + 1) % self.waypoints.len();
                    self.cursor.dwell_remaining = 0.0;
                    self.cursor.mode = PatrolMode::Moving;
                    debug!("leaving for waypoint {}", self.cursor.index);
                }
            }
        }
    }

    /// The waypoint loop.
    #[must_use]
    pub fn waypoints(&self) -> &[Vec2] {
        &self.waypoints
    }

    /// Waypoint being approached or dwelt on, if any.
    #[must_use]
    pub fn current_waypoint(&self) -> Option<Vec2> {
        self.waypoints.get(self.cursor.index).copied()
    }

    /// Current cursor.
    #[must_use]
    pub const fn cursor(&self) -> PatrolCursor {
        self.cursor
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> PatrolMode {
        self.cursor.mode
    }

    /// Movement parameters.
    #[must_use]
    pub const fn settings(&self) -> PatrolSettings {
        self.settings
    }
}
