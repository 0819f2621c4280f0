// SPDX-License-Identifier: MPL-2.0
//! Decoding uploads and encoding backend payloads.

use crate::domain::media::{BinaryMask, ImageEncoding, RasterImage};
use crate::error::{ResourceError, Result, ValidationError};
use image_rs::codecs::jpeg::JpegEncoder;
use image_rs::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::Path;

/// Default download name when the image has no original file.
const GENERATED_IMAGE_STEM: &str = "generated-image";

/// Rejects anything that is not an `image/*` MIME type.
///
/// # Errors
///
/// Returns [`ValidationError::UnsupportedFileType`] for non-image types.
pub fn validate_mime(mime_type: &str) -> std::result::Result<(), ValidationError> {
    let is_image = mime_type
        .get(..6)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("image/"));
    if is_image {
        Ok(())
    } else {
        Err(ValidationError::UnsupportedFileType {
            mime_type: mime_type.to_string(),
        })
    }
}

/// Validates and decodes a user-selected file.
///
/// # Errors
///
/// Returns a validation error for non-image MIME types and a resource error
/// when the bytes cannot be decoded.
pub fn decode_upload(bytes: &[u8], mime_type: &str, file_name: Option<&str>) -> Result<RasterImage> {
    validate_mime(mime_type)?;
    let image = decode(bytes)?;
    log::debug!(
        "Decoded upload {:?} ({mime_type}, {}x{})",
        file_name,
        image.width(),
        image.height()
    );
    Ok(match file_name {
        Some(name) => image.with_file_name(name),
        None => image,
    })
}

/// Decodes encoded image bytes, sniffing the format.
///
/// # Errors
///
/// Returns [`ResourceError::DecodeFailed`] if the format is unknown or the data is corrupt.
pub fn decode(bytes: &[u8]) -> std::result::Result<RasterImage, ResourceError> {
    let format =
        image_rs::guess_format(bytes).map_err(|err| ResourceError::DecodeFailed(err.to_string()))?;
    let dynamic = image_rs::load_from_memory_with_format(bytes, format)
        .map_err(|err| ResourceError::DecodeFailed(err.to_string()))?;
    let encoding = if format == ImageFormat::Png {
        ImageEncoding::Png
    } else {
        ImageEncoding::Jpeg
    };
    Ok(from_dynamic(&dynamic, encoding))
}

/// Converts an `image` crate buffer into a [`RasterImage`].
#[must_use]
pub fn from_dynamic(image: &DynamicImage, encoding: ImageEncoding) -> RasterImage {
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    RasterImage::from_rgba(width, height, rgba.into_raw(), encoding)
}

/// Copies a [`RasterImage`] into an `image` crate buffer.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidDimensions`] if the buffer cannot be built.
pub fn to_rgba_image(image: &RasterImage) -> std::result::Result<RgbaImage, ResourceError> {
    RgbaImage::from_raw(image.width(), image.height(), image.rgba_bytes().to_vec()).ok_or(
        ResourceError::InvalidDimensions {
            width: image.width(),
            height: image.height(),
        },
    )
}

/// Encodes an image in its own format family.
///
/// PNG keeps the alpha channel; JPEG output drops it.
///
/// # Errors
///
/// Returns [`ResourceError::EncodeFailed`] if the encoder fails.
pub fn encode(image: &RasterImage, jpeg_quality: u8) -> std::result::Result<Vec<u8>, ResourceError> {
    let rgba = to_rgba_image(image)?;
    let mut bytes = Vec::new();
    let outcome = match image.encoding() {
        ImageEncoding::Png => {
            DynamicImage::ImageRgba8(rgba).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        }
        ImageEncoding::Jpeg => {
            let rgb = DynamicImage::ImageRgba8(rgba).to_rgb8();
            let mut encoder = JpegEncoder::new_with_quality(&mut bytes, jpeg_quality);
            encoder.encode_image(&rgb)
        }
    };
    outcome.map_err(|err| ResourceError::EncodeFailed(err.to_string()))?;
    Ok(bytes)
}

/// Encodes a mask as an opaque white/black PNG.
///
/// # Errors
///
/// Returns [`ResourceError::EncodeFailed`] if the encoder fails.
pub fn encode_mask(mask: &BinaryMask) -> std::result::Result<Vec<u8>, ResourceError> {
    encode(&mask.to_raster(), 100)
}

/// File name offered when downloading a result.
///
/// `<stem>-edited.<ext>` when the original name is known, otherwise
/// `generated-image.<ext>`.
#[must_use]
pub fn download_file_name(original: Option<&str>, encoding: ImageEncoding) -> String {
    let stem = original
        .and_then(|name| Path::new(name).file_stem())
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty());
    match stem {
        Some(stem) => format!("{stem}-edited.{}", encoding.extension()),
        None => format!("{GENERATED_IMAGE_STEM}.{}", encoding.extension()),
    }
}
