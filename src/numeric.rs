//! Numeric conversion helpers used across the project.
//!
//! These utilities guard conversions between floating-point and integer
//! domains so call-sites in the scanner and mesh builder stay ergonomic.

/// Number of angular steps a scan of `view_angle` degrees takes at
/// `resolution` rays per degree.
///
/// The product is rounded to the nearest integer and never drops below one,
/// so callers can divide by the result unconditionally. Non-finite inputs
/// also collapse to a single step.
///
/// # Examples
/// ```
/// use lookout::numeric::step_count;
/// assert_eq!(step_count(90.0, 1.0), 90);
/// assert_eq!(step_count(110.0, 0.5), 55);
/// assert_eq!(step_count(10.0, 0.01), 1);
/// ```
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "The rounded product is clamped into the u32 domain before casting."
)]
#[must_use]
pub fn step_count(view_angle: f32, resolution: f32) -> u32 {
    let steps = (view_angle * resolution).round();
    if !steps.is_finite() || steps < 1.0 {
        return 1;
    }
    // f32 cannot represent u32::MAX exactly; clamp below it.
    steps.min(16_777_216.0) as u32
}

/// Convert a vertex position into a `u32` mesh index.
///
/// Returns `None` when the index does not fit, which only happens for
/// meshes far larger than any field of view produces.
#[must_use]
pub fn mesh_index(index: usize) -> Option<u32> {
    u32::try_from(index).ok()
}

/// Convert a step number into the `f32` domain used for angles.
#[expect(
    clippy::cast_precision_loss,
    reason = "Step counts stay far below 2^24 so the conversion is exact."
)]
#[must_use]
pub fn step_to_f32(step: u32) -> f32 {
    step as f32
}
