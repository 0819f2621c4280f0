// SPDX-License-Identifier: MPL-2.0
//! Raster operations behind the editing tools.
//!
//! Everything here turns gestures and value objects into pixel buffers:
//!
//! - [`coords`]: viewport to native pixel conversion
//! - [`mask`]: freehand brush layer and its binary export
//! - [`crop`]: rectangular selection and cropping
//! - [`placement`]: composite and placement mask for inserted objects
//! - [`expansion`]: sentinel-bordered canvas for outpainting
//! - [`codec`]: decoding uploads and encoding payloads

pub mod codec;
pub mod coords;
pub mod crop;
pub mod expansion;
pub mod mask;
pub mod pixmap;
pub mod placement;

pub use coords::{CoordinateMapper, PointerSample};
pub use crop::{CropRect, CropSelector};
pub use mask::MaskCanvas;
pub use placement::PlacementRender;
