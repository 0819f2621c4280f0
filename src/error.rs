// SPDX-License-Identifier: MPL-2.0
//! Error taxonomy shared by the raster pipeline and the edit session.
//!
//! Errors fall into three families that the editor treats differently:
//!
//! - [`ValidationError`]: caught before any external call; the session stays put.
//! - [`BackendError`]: the generation call failed; the session reverts to the
//!   phase it was in before submitting.
//! - [`ResourceError`]: a canvas could not be allocated or an image could not be
//!   decoded/encoded; fatal to the current operation only.

pub use crate::application::port::generation::BackendError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error(transparent)]
    Resource(#[from] ResourceError),
}

impl Error {
    /// Returns `true` for errors that clear themselves after a short delay.
    ///
    /// Only the expansion cap message behaves this way; everything else stays
    /// visible until the next successful action.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Error::Validation(ValidationError::ExpansionLimitReached { .. })
        )
    }
}

/// User input that cannot be acted on yet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Unsupported file type: {mime_type} (please choose an image)")]
    UnsupportedFileType { mime_type: String },
    #[error("Please describe the edit before generating")]
    MissingPrompt,
    #[error("Please paint over the area to edit first")]
    MissingMask,
    #[error("The mask is empty; paint over the area to edit")]
    EmptyMask,
    #[error("Please upload an object to insert")]
    MissingInsertObject,
    #[error("Please confirm the object placement first")]
    PlacementNotConfirmed,
    #[error("Please expand at least one edge")]
    NoExpansion,
    #[error("Maximum expansion reached ({max_clicks} steps)")]
    ExpansionLimitReached { max_clicks: usize },
    #[error("Please drag a crop selection first")]
    NoCropSelection,
    #[error("No image loaded")]
    MissingImage,
}

/// Raster buffers that could not be produced or read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    #[error("Canvas unavailable for {width}x{height} buffer")]
    CanvasUnavailable { width: u32, height: u32 },
    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Failed to decode image: {0}")]
    DecodeFailed(String),
    #[error("Failed to encode image: {0}")]
    EncodeFailed(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
