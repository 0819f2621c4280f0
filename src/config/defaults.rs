// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for the ranges and
//! defaults used by the sliders, the expansion tool, and the session timers.
//!
//! # Categories
//!
//! - **Brush**: Mask brush diameter bounds
//! - **Placement**: Inserted-object transform bounds
//! - **Expansion**: Outpainting step size and click budget
//! - **Timing**: Transient message and reflow debounce windows
//! - **Crop**: Accidental-tap threshold

// ==========================================================================
// Brush Defaults
// ==========================================================================

/// Default brush diameter in display pixels.
pub const DEFAULT_BRUSH_SIZE: f32 = 30.0;

/// Minimum brush diameter.
pub const MIN_BRUSH_SIZE: f32 = 5.0;

/// Maximum brush diameter.
pub const MAX_BRUSH_SIZE: f32 = 100.0;

/// Straight RGBA color of mask strokes as shown over the image.
pub const MASK_STROKE_RGBA: [u8; 4] = [255, 64, 64, 128];

// ==========================================================================
// Placement Defaults
// ==========================================================================

/// Default object position on both axes (percent of the container).
pub const DEFAULT_POSITION_PERCENT: f32 = 50.0;

/// Minimum position percentage.
pub const MIN_POSITION_PERCENT: f32 = 0.0;

/// Maximum position percentage.
pub const MAX_POSITION_PERCENT: f32 = 100.0;

/// Default object scale (percent of its native size).
pub const DEFAULT_PLACEMENT_SCALE_PERCENT: f32 = 50.0;

/// Minimum object scale percentage.
pub const MIN_PLACEMENT_SCALE_PERCENT: f32 = 1.0;

/// Maximum object scale percentage.
pub const MAX_PLACEMENT_SCALE_PERCENT: f32 = 200.0;

/// Minimum in-plane rotation in degrees.
pub const MIN_ROTATION_DEGREES: f32 = 0.0;

/// Maximum in-plane rotation in degrees.
pub const MAX_ROTATION_DEGREES: f32 = 360.0;

/// Minimum tilt angle in degrees.
pub const MIN_TILT_DEGREES: f32 = -90.0;

/// Maximum tilt angle in degrees.
pub const MAX_TILT_DEGREES: f32 = 90.0;

/// Default object opacity percentage.
pub const DEFAULT_OPACITY_PERCENT: f32 = 100.0;

/// Minimum opacity percentage.
pub const MIN_OPACITY_PERCENT: f32 = 0.0;

/// Maximum opacity percentage.
pub const MAX_OPACITY_PERCENT: f32 = 100.0;

/// Default perspective depth.
pub const DEFAULT_PERSPECTIVE: f32 = 1000.0;

/// Minimum perspective depth.
pub const MIN_PERSPECTIVE: f32 = 300.0;

/// Maximum perspective depth.
pub const MAX_PERSPECTIVE: f32 = 2000.0;

/// Smallest foreshortening factor applied by a tilt.
///
/// Keeps the flattened transform invertible at ±90°.
pub const MIN_TILT_FORESHORTENING: f32 = 0.01;

// ==========================================================================
// Expansion Defaults
// ==========================================================================

/// Maximum number of expansion button presses per session.
pub const DEFAULT_MAX_EXPANSION_CLICKS: usize = 6;

/// Expansion step as a fraction of the image's shorter side.
pub const DEFAULT_EXPANSION_STEP_RATIO: f32 = 0.25;

/// Sentinel color filling the region to be generated (`#808080`).
pub const EXPANSION_SENTINEL_RGBA: [u8; 4] = [0x80, 0x80, 0x80, 0xFF];

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Auto-dismiss timeout for transient messages (in seconds).
pub const DEFAULT_NOTICE_TIMEOUT_SECS: u32 = 3;

/// Quiet window before a viewport resize is applied (in milliseconds).
pub const DEFAULT_REFLOW_QUIET_MS: u64 = 150;

// ==========================================================================
// Crop Defaults
// ==========================================================================

/// Selections smaller than this on either axis are treated as taps.
pub const DEFAULT_MIN_CROP_SELECTION_PX: f32 = 5.0;

// ==========================================================================
// Encoding Defaults
// ==========================================================================

/// Quality used when re-encoding lossy images.
pub const DEFAULT_JPEG_QUALITY: u8 = 92;
