// SPDX-License-Identifier: MPL-2.0
//! Running prepared generation requests.
//!
//! The editor emits a [`GenerationRequest`] when it enters `Loading`; the host
//! runs it with one of these functions and feeds the outcome back as
//! `Message::GenerationFinished`. There is no timeout and no cancellation: a
//! request always runs to completion or failure.

use crate::application::port::generation::{GenerationBackend, GenerationRequest};
use crate::domain::media::RasterImage;
use crate::error::{Error, Result};
use crate::media::codec;
use std::sync::Arc;

/// Sends `request` and decodes the returned image.
///
/// # Errors
///
/// Returns [`Error::Backend`] if the call fails and [`Error::Resource`] if the
/// returned bytes are not a decodable image.
pub fn execute(backend: &dyn GenerationBackend, request: &GenerationRequest) -> Result<RasterImage> {
    log::info!(
        "Sending {} request ({} payload bytes)",
        request.kind(),
        request.payload_len()
    );
    let bytes = request.send(backend).map_err(|err| {
        log::warn!("{} request failed: {err}", request.kind());
        Error::from(err)
    })?;
    let image = codec::decode(&bytes)?;
    log::debug!(
        "{} returned a {}x{} image",
        request.kind(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Same as [`execute`], on tokio's blocking pool.
///
/// # Errors
///
/// See [`execute`]. A panicking worker is reported as a backend failure.
pub async fn execute_async(
    backend: Arc<dyn GenerationBackend>,
    request: GenerationRequest,
) -> Result<RasterImage> {
    tokio::task::spawn_blocking(move || execute(backend.as_ref(), &request))
        .await
        .map_err(|err| {
            Error::Backend(crate::error::BackendError::Unavailable(format!(
                "worker failed: {err}"
            )))
        })?
}
