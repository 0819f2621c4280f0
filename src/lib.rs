// SPDX-License-Identifier: MPL-2.0
//! `magic_edit` is the client-side core of an AI-assisted photo editor.
//!
//! It turns user gestures (brush strokes, object placement, canvas
//! expansion clicks, crop drags) into the exact pixel buffers an external
//! image-generation service needs, and drives the multi-step editing
//! workflow as a reducer-style state machine.

#![doc(html_root_url = "https://docs.rs/magic_edit/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod editor;
pub mod error;
pub mod media;

pub use error::{Error, Result};
