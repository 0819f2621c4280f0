// SPDX-License-Identifier: MPL-2.0
//! Placement of an inserted object over the base image.

use super::newtypes::{
    OpacityPercent, PerspectiveDepth, PlacementScale, PositionPercent, RotationDegrees,
    TiltDegrees,
};

/// A single slider-controlled field of a [`PlacementTransform`].
///
/// Position is deliberately absent: it only changes through dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementField {
    Scale,
    Rotation,
    TiltX,
    TiltY,
    Opacity,
    Perspective,
}

/// Where and how an inserted object sits on the base image.
///
/// Fully determines both the visible composite and the placement mask.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlacementTransform {
    /// Horizontal center position (percent of container width).
    pub position_x: PositionPercent,
    /// Vertical center position (percent of container height).
    pub position_y: PositionPercent,
    pub scale: PlacementScale,
    pub rotation: RotationDegrees,
    /// Tilt about the horizontal axis (foreshortens vertically).
    pub tilt_x: TiltDegrees,
    /// Tilt about the vertical axis (foreshortens horizontally).
    pub tilt_y: TiltDegrees,
    pub opacity: OpacityPercent,
    pub perspective: PerspectiveDepth,
}

impl PlacementTransform {
    /// Moves the object center; both axes are clamped to 0–100.
    #[must_use]
    pub fn with_position(self, x_percent: f32, y_percent: f32) -> Self {
        Self {
            position_x: PositionPercent::new(x_percent),
            position_y: PositionPercent::new(y_percent),
            ..self
        }
    }

    /// Updates exactly one slider field, leaving every other field untouched.
    #[must_use]
    pub fn with_field(self, field: PlacementField, value: f32) -> Self {
        let mut next = self;
        match field {
            PlacementField::Scale => next.scale = PlacementScale::new(value),
            PlacementField::Rotation => next.rotation = RotationDegrees::new(value),
            PlacementField::TiltX => next.tilt_x = TiltDegrees::new(value),
            PlacementField::TiltY => next.tilt_y = TiltDegrees::new(value),
            PlacementField::Opacity => next.opacity = OpacityPercent::new(value),
            PlacementField::Perspective => next.perspective = PerspectiveDepth::new(value),
        }
        next
    }

    /// Reads the current value of a slider field.
    #[must_use]
    pub fn field(&self, field: PlacementField) -> f32 {
        match field {
            PlacementField::Scale => self.scale.value(),
            PlacementField::Rotation => self.rotation.degrees(),
            PlacementField::TiltX => self.tilt_x.degrees(),
            PlacementField::TiltY => self.tilt_y.degrees(),
            PlacementField::Opacity => self.opacity.value(),
            PlacementField::Perspective => self.perspective.value(),
        }
    }
}
