// SPDX-License-Identifier: MPL-2.0
//! Generation backend port definition.
//!
//! This module defines the [`GenerationBackend`] trait for the external
//! image-generation service, plus the [`GenerationRequest`] value the editor
//! emits when the user submits.
//!
//! # Design Notes
//!
//! - Payloads are already-encoded image bytes with their MIME types
//! - Calls are request/response: no streaming, no partial images
//! - The trait is `Send + Sync` so requests can run on a worker thread

use std::fmt;
use thiserror::Error;

// =============================================================================
// BackendError
// =============================================================================

/// Errors surfaced by a generation call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The call succeeded but returned no image.
    #[error("No image was produced")]
    NoImageProduced,

    /// The service refused the request (non-2xx, safety refusal, ...).
    #[error("Generation failed: {0}")]
    Rejected(String),

    /// The service could not be reached.
    #[error("Generation service unavailable: {0}")]
    Unavailable(String),
}

// =============================================================================
// GenerationBackend Trait
// =============================================================================

/// Port for the external image-generation service.
///
/// Mask convention for [`edit_region`](Self::edit_region): white = edit,
/// black = preserve.
///
/// # Example
///
/// ```ignore
/// use magic_edit::application::port::generation::{BackendError, GenerationBackend};
///
/// struct Echo;
///
/// impl GenerationBackend for Echo {
///     fn edit_region(&self, _: &str, base: &[u8], _: &[u8], _: &str, _: Option<&str>)
///         -> Result<Vec<u8>, BackendError> { Ok(base.to_vec()) }
///     // ...
/// }
/// ```
pub trait GenerationBackend: Send + Sync {
    /// Regenerates the white region of `mask` according to `prompt`.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the call fails or yields no image.
    fn edit_region(
        &self,
        prompt: &str,
        base: &[u8],
        mask: &[u8],
        base_mime_type: &str,
        context: Option<&str>,
    ) -> Result<Vec<u8>, BackendError>;

    /// Blends a crudely overlaid object into the base image.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the call fails or yields no image.
    fn composite_blend(
        &self,
        base: &[u8],
        composite: &[u8],
        placement_mask: &[u8],
        base_mime_type: &str,
        composite_mime_type: &str,
    ) -> Result<Vec<u8>, BackendError>;

    /// Fills the sentinel-colored border of an expanded canvas.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the call fails or yields no image.
    fn outpaint(
        &self,
        prompt: &str,
        expanded_canvas: &[u8],
        mime_type: &str,
    ) -> Result<Vec<u8>, BackendError>;

    /// Generates a fresh image from text alone.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the call fails or yields no image.
    fn generate_from_text(&self, prompt: &str) -> Result<Vec<u8>, BackendError>;
}

// =============================================================================
// GenerationRequest
// =============================================================================

/// An encoded image ready to send.
#[derive(Clone, PartialEq, Eq)]
pub struct Payload {
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
}

impl Payload {
    #[must_use]
    pub fn new(bytes: Vec<u8>, mime_type: &'static str) -> Self {
        Self { bytes, mime_type }
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Payload")
            .field("len", &self.bytes.len())
            .field("mime_type", &self.mime_type)
            .finish()
    }
}

/// One fully prepared call to the generation backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationRequest {
    EditRegion {
        prompt: String,
        base: Payload,
        mask: Payload,
        context: Option<String>,
    },
    CompositeBlend {
        base: Payload,
        composite: Payload,
        placement_mask: Payload,
    },
    Outpaint {
        prompt: String,
        canvas: Payload,
    },
    GenerateFromText {
        prompt: String,
    },
}

impl GenerationRequest {
    /// Short name of the call, for logging.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationRequest::EditRegion { .. } => "edit_region",
            GenerationRequest::CompositeBlend { .. } => "composite_blend",
            GenerationRequest::Outpaint { .. } => "outpaint",
            GenerationRequest::GenerateFromText { .. } => "generate_from_text",
        }
    }

    /// Total size of all image payloads in bytes.
    #[must_use]
    pub fn payload_len(&self) -> usize {
        match self {
            GenerationRequest::EditRegion { base, mask, .. } => base.bytes.len() + mask.bytes.len(),
            GenerationRequest::CompositeBlend {
                base,
                composite,
                placement_mask,
            } => base.bytes.len() + composite.bytes.len() + placement_mask.bytes.len(),
            GenerationRequest::Outpaint { canvas, .. } => canvas.bytes.len(),
            GenerationRequest::GenerateFromText { .. } => 0,
        }
    }

    /// Sends this request through `backend`, returning the raw image bytes.
    ///
    /// # Errors
    ///
    /// Propagates the backend's [`BackendError`]; an empty response becomes
    /// [`BackendError::NoImageProduced`].
    pub fn send(&self, backend: &dyn GenerationBackend) -> Result<Vec<u8>, BackendError> {
        let bytes = match self {
            GenerationRequest::EditRegion {
                prompt,
                base,
                mask,
                context,
            } => backend.edit_region(
                prompt,
                &base.bytes,
                &mask.bytes,
                base.mime_type,
                context.as_deref(),
            )?,
            GenerationRequest::CompositeBlend {
                base,
                composite,
                placement_mask,
            } => backend.composite_blend(
                &base.bytes,
                &composite.bytes,
                &placement_mask.bytes,
                base.mime_type,
                composite.mime_type,
            )?,
            GenerationRequest::Outpaint { prompt, canvas } => {
                backend.outpaint(prompt, &canvas.bytes, canvas.mime_type)?
            }
            GenerationRequest::GenerateFromText { prompt } => backend.generate_from_text(prompt)?,
        };
        if bytes.is_empty() {
            return Err(BackendError::NoImageProduced);
        }
        Ok(bytes)
    }
}
