// SPDX-License-Identifier: MPL-2.0
//! Media domain types.
//!
//! This module provides pure raster types:
//! - [`RasterImage`]: Immutable decoded image with its encoding family
//! - [`BinaryMask`]: Strict white/black edit mask
//! - [`ImageEncoding`]: PNG or lossy re-encoding family

pub mod raster;

pub use raster::{BinaryMask, ImageEncoding, RasterImage};
