//! Default guard tuning values and shared thresholds.
//!
//! The defaults mirror the values designers start from when placing a guard
//! in a level; scenario files override them per guard.

/// Patrol speed in distance units per second.
pub const DEFAULT_MOVE_SPEED: f32 = 2.0;
/// Seconds a guard dwells on each waypoint.
pub const DEFAULT_WAYPOINT_STOP_TIME: f32 = 1.0;
/// Maximum distance a guard can see.
pub const DEFAULT_VIEW_RADIUS: f32 = 5.0;
/// Full width of the view cone in degrees.
pub const DEFAULT_VIEW_ANGLE: f32 = 110.0;
/// Rays cast per degree of view angle.
pub const DEFAULT_MESH_RESOLUTION: f32 = 1.0;
/// Binary-search steps used to locate an obstacle silhouette.
pub const DEFAULT_EDGE_RESOLVE_ITERATIONS: u32 = 4;
/// Distance jump between neighbouring rays that counts as an edge.
pub const DEFAULT_EDGE_DIST_THRESHOLD: f32 = 0.5;
/// Distance below which a patrolling guard counts as standing on its
/// current waypoint.
pub const WAYPOINT_REACHED_EPSILON: f32 = 0.1;
/// Widest field of view a guard may be configured with, in degrees.
pub const MAX_VIEW_ANGLE: f32 = 360.0;
/// Finest mesh resolution a guard may be configured with, in rays per
/// degree. A full turn at this resolution is 3601 rays per tick.
pub const MAX_MESH_RESOLUTION: f32 = 10.0;
/// Radius used when drawing waypoint markers in the debug overlay.
pub const WAYPOINT_MARKER_RADIUS: f32 = 0.2;
