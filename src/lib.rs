#![cfg_attr(docsrs, feature(doc_cfg))]
//! Guard patrol and perception for top-down 2D stealth games.
//!
//! Guards walk a looping list of waypoints, pausing at each, and every tick
//! sweep a fan of rays across their view cone to build a visibility
//! polygon for rendering. Whether a guard actually sees the player is an
//! exact range, cone and occlusion test. Collision queries go through the
//! [`Raycaster`] trait so the crate stays independent of any engine;
//! [`SegmentWorld`] is a small in-memory implementation.
pub mod config;
pub mod constants;
pub mod debug;
pub mod geometry;
pub mod guard;
pub mod logging;
pub mod numeric;
pub mod patrol;
pub mod pose;
pub mod raycast;
pub mod roster;
pub mod scenario;
pub mod vision;
pub use constants::*;

// Re-export commonly used items
pub use config::{ConfigError, GuardConfig, GuardSettings};
pub use debug::DebugOverlay;
pub use guard::{Guard, GuardTick};
pub use logging::init as init_logging;
pub use patrol::{Patrol, PatrolCursor, PatrolMode, PatrolSettings};
pub use pose::Pose;
pub use raycast::{cast_or_miss, LayerMask, RaycastError, RaycastHit, Raycaster, SegmentWorld};
pub use roster::{GuardId, GuardRoster, RosterError, SightingEvent};
pub use scenario::{Scenario, ScenarioError};
pub use vision::{is_visible, Detection, VisibilityPolygon, VisionSettings};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust
    //! use lookout::prelude::*;
    //!
    //! let settings = GuardConfig::default().validate().expect("defaults are valid");
    //! let mut guard = Guard::new(settings, vec![Vec2::ZERO, Vec2::new(4.0, 0.0)], 0.0);
    //! let world = SegmentWorld::new();
    //! let tick = guard.tick(1.0 / 60.0, &world, Some(Vec2::new(2.0, 0.0)));
    //! assert!(tick.spotted);
    //! ```

    pub use crate::config::GuardConfig;
    pub use crate::guard::Guard;
    pub use crate::pose::Pose;
    pub use crate::raycast::{LayerMask, Raycaster, SegmentWorld};
    pub use crate::roster::GuardRoster;
    pub use glam::Vec2;
}
