//! Utility helpers for tests.
//!
//! Stub raycasters with analytically known silhouettes, ready-made guard
//! settings and a few assertion helpers shared by the integration tests.

pub mod raycasters;

pub use raycasters::{CountingRaycaster, StepRaycaster};

use glam::Vec2;
use lookout::config::{GuardConfig, GuardSettings};
use lookout::geometry::heading_of;

/// Validated settings from `config`.
///
/// # Panics
/// Panics if `config` fails validation.
pub fn settings_from(config: GuardConfig) -> GuardSettings {
    config
        .validate()
        .unwrap_or_else(|err| panic!("test config should be valid: {err}"))
}

/// Default guard settings with the given cone width and radius.
///
/// # Panics
/// Panics if the values are rejected by validation.
pub fn cone_settings(view_angle: f32, view_radius: f32) -> GuardSettings {
    settings_from(GuardConfig {
        view_angle,
        view_radius,
        ..GuardConfig::default()
    })
}

/// Global angle in degrees of `point` as seen from `origin`.
///
/// # Panics
/// Panics if `point` coincides with `origin`.
pub fn angle_from(origin: Vec2, point: Vec2) -> f32 {
    heading_of(point - origin)
        .unwrap_or_else(|| panic!("{point:?} coincides with origin {origin:?}"))
}

/// Assert that two floats are within `tolerance`.
///
/// # Panics
/// Panics with both values when they differ by more than `tolerance`.
pub fn assert_close(actual: f32, expected: f32, tolerance: f32) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
