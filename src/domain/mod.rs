// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core editing types with no codec or rendering dependencies.
//!
//! This module contains pure value objects and business rules, so that
//! every rule about ranges, budgets and masks can be tested in isolation.
//!
//! # Modules
//!
//! - [`editing`]: Editing types ([`PlacementTransform`](editing::PlacementTransform),
//!   [`ExpansionState`](editing::ExpansionState), [`BrushSize`](editing::BrushSize))
//! - [`geometry`]: [`Point`](geometry::Point), [`Size`](geometry::Size), [`Rect`](geometry::Rect)
//! - [`media`]: Raster types ([`RasterImage`](media::RasterImage),
//!   [`BinaryMask`](media::BinaryMask))

pub mod editing;
pub mod geometry;
pub mod media;
