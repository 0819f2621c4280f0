// SPDX-License-Identifier: MPL-2.0
//! Editing domain types.
//!
//! This module provides pure domain types for the editing tools:
//! - [`newtypes`]: Range-checked slider values ([`BrushSize`], [`PlacementScale`], ...)
//! - [`placement`]: [`PlacementTransform`] for inserted objects
//! - [`expansion`]: [`ExpansionSteps`] and the undoable [`ExpansionState`]

pub mod expansion;
pub mod newtypes;
pub mod placement;

pub use expansion::{ExpandDirection, ExpansionState, ExpansionSteps};
pub use newtypes::{
    BrushSize, OpacityPercent, PerspectiveDepth, PlacementScale, PositionPercent,
    RotationDegrees, TiltDegrees,
};
pub use placement::{PlacementField, PlacementTransform};
