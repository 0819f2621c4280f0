// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only encoded bytes and domain types, ensuring the editor
//! remains independent of any concrete generation service.
//!
//! # Available Ports
//!
//! - [`generation`]: Image generation (inpainting, compositing, outpainting, text-to-image)

pub mod generation;

pub use generation::{BackendError, GenerationBackend, GenerationRequest, Payload};
