// SPDX-License-Identifier: MPL-2.0
//! Editing newtypes.
//!
//! This module provides type-safe wrappers for the slider-driven editing
//! values, ensuring they are always within valid ranges. Every constructor
//! clamps, so no single field update can leave a value outside its range.

use crate::config::defaults;

// =============================================================================
// BrushSize
// =============================================================================

/// Mask brush diameter in display pixels, guaranteed to be within 5–100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushSize(f32);

impl BrushSize {
    /// Creates a new brush size, clamping the value to the valid range.
    #[must_use]
    pub fn new(diameter: f32) -> Self {
        Self(clamp_finite(
            diameter,
            defaults::MIN_BRUSH_SIZE,
            defaults::MAX_BRUSH_SIZE,
            defaults::DEFAULT_BRUSH_SIZE,
        ))
    }

    /// Returns the diameter in display pixels.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for BrushSize {
    fn default() -> Self {
        Self(defaults::DEFAULT_BRUSH_SIZE)
    }
}

// =============================================================================
// PositionPercent
// =============================================================================

/// Position along one container axis, as a percentage (0–100).
///
/// 0 is the left/top edge of the container and 100 the right/bottom edge;
/// the placed object's *center* sits at this position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionPercent(f32);

impl PositionPercent {
    /// The container center.
    pub const CENTER: Self = Self(defaults::DEFAULT_POSITION_PERCENT);

    /// Creates a new position, clamping the value to the valid range.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        Self(clamp_finite(
            percent,
            defaults::MIN_POSITION_PERCENT,
            defaults::MAX_POSITION_PERCENT,
            defaults::DEFAULT_POSITION_PERCENT,
        ))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Converts the percentage into an offset along an axis of `extent` pixels.
    #[must_use]
    pub fn to_pixels(self, extent: u32) -> f32 {
        self.0 / 100.0 * extent as f32
    }
}

impl Default for PositionPercent {
    fn default() -> Self {
        Self::CENTER
    }
}

// =============================================================================
// PlacementScale
// =============================================================================

/// Uniform object scale as a percentage of its native size (1%–200%).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementScale(f32);

impl PlacementScale {
    /// Creates a new scale, clamping the value to the valid range.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        Self(clamp_finite(
            percent,
            defaults::MIN_PLACEMENT_SCALE_PERCENT,
            defaults::MAX_PLACEMENT_SCALE_PERCENT,
            defaults::DEFAULT_PLACEMENT_SCALE_PERCENT,
        ))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the scale as a multiplier (e.g., 100% → 1.0, 50% → 0.5).
    #[must_use]
    pub fn as_factor(self) -> f32 {
        self.0 / 100.0
    }
}

impl Default for PlacementScale {
    fn default() -> Self {
        Self(defaults::DEFAULT_PLACEMENT_SCALE_PERCENT)
    }
}

// =============================================================================
// RotationDegrees
// =============================================================================

/// In-plane rotation in degrees (0–360), clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationDegrees(f32);

impl RotationDegrees {
    /// Creates a new rotation, clamping the value to the valid range.
    #[must_use]
    pub fn new(degrees: f32) -> Self {
        Self(clamp_finite(
            degrees,
            defaults::MIN_ROTATION_DEGREES,
            defaults::MAX_ROTATION_DEGREES,
            0.0,
        ))
    }

    /// Returns the angle in degrees.
    #[must_use]
    pub fn degrees(self) -> f32 {
        self.0
    }
}

// =============================================================================
// TiltDegrees
// =============================================================================

/// Out-of-plane tilt in degrees (−90 to +90).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltDegrees(f32);

impl TiltDegrees {
    /// Creates a new tilt, clamping the value to the valid range.
    #[must_use]
    pub fn new(degrees: f32) -> Self {
        Self(clamp_finite(
            degrees,
            defaults::MIN_TILT_DEGREES,
            defaults::MAX_TILT_DEGREES,
            0.0,
        ))
    }

    /// Returns the angle in degrees.
    #[must_use]
    pub fn degrees(self) -> f32 {
        self.0
    }

    /// How much a unit length along the tilted axis shrinks when flattened.
    ///
    /// Floored so that the flattened transform stays invertible edge-on.
    #[must_use]
    pub fn foreshortening(self) -> f32 {
        self.0
            .to_radians()
            .cos()
            .max(defaults::MIN_TILT_FORESHORTENING)
    }
}

// =============================================================================
// OpacityPercent
// =============================================================================

/// Object opacity percentage (0–100).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpacityPercent(f32);

impl OpacityPercent {
    /// Fully opaque.
    pub const OPAQUE: Self = Self(defaults::MAX_OPACITY_PERCENT);

    /// Creates a new opacity, clamping the value to the valid range.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        Self(clamp_finite(
            percent,
            defaults::MIN_OPACITY_PERCENT,
            defaults::MAX_OPACITY_PERCENT,
            defaults::DEFAULT_OPACITY_PERCENT,
        ))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the opacity as an alpha factor in `[0, 1]`.
    #[must_use]
    pub fn as_alpha(self) -> f32 {
        self.0 / 100.0
    }
}

impl Default for OpacityPercent {
    fn default() -> Self {
        Self(defaults::DEFAULT_OPACITY_PERCENT)
    }
}

// =============================================================================
// PerspectiveDepth
// =============================================================================

/// Viewer distance used for the 3D-like tilt preview (300–2000).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveDepth(f32);

impl PerspectiveDepth {
    /// Creates a new depth, clamping the value to the valid range.
    #[must_use]
    pub fn new(depth: f32) -> Self {
        Self(clamp_finite(
            depth,
            defaults::MIN_PERSPECTIVE,
            defaults::MAX_PERSPECTIVE,
            defaults::DEFAULT_PERSPECTIVE,
        ))
    }

    /// Returns the raw depth value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for PerspectiveDepth {
    fn default() -> Self {
        Self(defaults::DEFAULT_PERSPECTIVE)
    }
}

/// Clamps `value` into `[min, max]`, mapping NaN to `fallback`.
fn clamp_finite(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}
