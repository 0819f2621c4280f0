// SPDX-License-Identifier: MPL-2.0
//! Core raster types for the domain layer.
//!
//! These types represent pure pixel data without any codec or rendering
//! dependencies. Operations never mutate a [`RasterImage`]; crop, expansion
//! and generation results each produce a new one.

use std::sync::Arc;

/// The format family an image is re-encoded into when sent or saved.
///
/// PNG sources stay PNG; every other source uses the lossy family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageEncoding {
    #[default]
    Png,
    Jpeg,
}

impl ImageEncoding {
    /// Picks the family for a source MIME type.
    #[must_use]
    pub fn from_mime(mime_type: &str) -> Self {
        if mime_type.eq_ignore_ascii_case("image/png") {
            ImageEncoding::Png
        } else {
            ImageEncoding::Jpeg
        }
    }

    #[must_use]
    pub fn mime_type(self) -> &'static str {
        match self {
            ImageEncoding::Png => "image/png",
            ImageEncoding::Jpeg => "image/jpeg",
        }
    }

    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            ImageEncoding::Png => "png",
            ImageEncoding::Jpeg => "jpg",
        }
    }
}

/// An immutable decoded image.
///
/// Pixels are straight (non-premultiplied) RGBA, 4 bytes per pixel.
///
/// # Example
///
/// ```
/// use magic_edit::domain::media::{ImageEncoding, RasterImage};
///
/// let pixels = vec![255u8; 100 * 100 * 4]; // 100x100 RGBA
/// let image = RasterImage::from_rgba(100, 100, pixels, ImageEncoding::Png);
///
/// assert_eq!(image.width(), 100);
/// assert_eq!(image.height(), 100);
/// assert_eq!(image.mime_type(), "image/png");
/// ```
#[derive(Debug, Clone)]
pub struct RasterImage {
    width: u32,
    height: u32,
    rgba_bytes: Arc<Vec<u8>>,
    encoding: ImageEncoding,
    /// Name of the file this image was uploaded from, if any.
    file_name: Option<String>,
}

impl RasterImage {
    /// Creates a new `RasterImage` from dimensions and shared RGBA pixel data.
    ///
    /// # Panics
    ///
    /// Panics if the pixel data length doesn't match `width * height * 4`.
    #[must_use]
    pub fn new(width: u32, height: u32, rgba_bytes: Arc<Vec<u8>>, encoding: ImageEncoding) -> Self {
        let expected_len = (width as usize) * (height as usize) * 4;
        assert_eq!(
            rgba_bytes.len(),
            expected_len,
            "RGBA data length mismatch: expected {expected_len}, got {}",
            rgba_bytes.len()
        );

        Self {
            width,
            height,
            rgba_bytes,
            encoding,
            file_name: None,
        }
    }

    /// Creates a new `RasterImage` from owned RGBA pixel data.
    ///
    /// # Panics
    ///
    /// Panics if the pixel data length doesn't match `width * height * 4`.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, rgba_bytes: Vec<u8>, encoding: ImageEncoding) -> Self {
        Self::new(width, height, Arc::new(rgba_bytes), encoding)
    }

    /// Creates an image filled with a single RGBA color.
    #[must_use]
    pub fn filled(width: u32, height: u32, rgba: [u8; 4], encoding: ImageEncoding) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        let bytes = rgba.repeat(pixel_count);
        Self::from_rgba(width, height, bytes, encoding)
    }

    /// Attaches the original file name (used for download naming).
    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    #[must_use]
    pub fn encoding(&self) -> ImageEncoding {
        self.encoding
    }

    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        self.encoding.mime_type()
    }

    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// RGBA value at `(x, y)`, or `None` outside the image.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + x as usize) * 4;
        let px = &self.rgba_bytes[idx..idx + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Returns the total number of pixels.
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

impl PartialEq for RasterImage {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.encoding == other.encoding
            && self.rgba_bytes == other.rgba_bytes
    }
}

impl Eq for RasterImage {}

/// A strict two-level mask: every pixel is opaque white (edit) or opaque black (keep).
///
/// Always contains at least one white pixel; an all-black mask is never built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMask {
    width: u32,
    height: u32,
    /// One entry per pixel, `true` = white.
    selected: Vec<bool>,
}

impl BinaryMask {
    /// Builds a mask from per-pixel selection flags.
    ///
    /// Returns `None` when the flags don't match the dimensions or no pixel is selected.
    #[must_use]
    pub fn from_selection(width: u32, height: u32, selected: Vec<bool>) -> Option<Self> {
        if selected.len() != (width as usize) * (height as usize) {
            return None;
        }
        if !selected.iter().any(|&s| s) {
            return None;
        }
        Some(Self {
            width,
            height,
            selected,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the pixel at `(x, y)` is white.
    #[must_use]
    pub fn is_selected(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.selected[(y as usize) * (self.width as usize) + x as usize]
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected.iter().filter(|&&s| s).count()
    }

    /// Inclusive bounding box of the white region as `(min_x, min_y, max_x, max_y)`.
    #[must_use]
    pub fn bounding_box(&self) -> Option<(u32, u32, u32, u32)> {
        let width = self.width as usize;
        let mut bounds: Option<(u32, u32, u32, u32)> = None;
        for (idx, &selected) in self.selected.iter().enumerate() {
            if !selected {
                continue;
            }
            // Both coordinates come from a u32-sized grid
            #[allow(clippy::cast_possible_truncation)]
            let (x, y) = ((idx % width) as u32, (idx / width) as u32);
            bounds = Some(match bounds {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        }
        bounds
    }

    /// Expands the mask into an opaque white/black RGBA image (always PNG).
    #[must_use]
    pub fn to_raster(&self) -> RasterImage {
        let mut bytes = Vec::with_capacity(self.selected.len() * 4);
        for &selected in &self.selected {
            let v = if selected { 255 } else { 0 };
            bytes.extend_from_slice(&[v, v, v, 255]);
        }
        RasterImage::from_rgba(self.width, self.height, bytes, ImageEncoding::Png)
    }
}
