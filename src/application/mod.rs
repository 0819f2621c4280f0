// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`generation`]: Running prepared requests against a backend
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure adapters implement application layer ports
//! - The editor only produces requests; it never calls a backend itself
//!
//! # Example
//!
//! ```ignore
//! use magic_edit::application::generation;
//! use magic_edit::editor::{Event, Message, SessionMessage};
//!
//! if let Event::GenerationRequested(request) = editor.update(Message::Session(SessionMessage::Submit)) {
//!     let outcome = generation::execute(&backend, &request);
//!     editor.update(Message::GenerationFinished(outcome));
//! }
//! ```

pub mod generation;
pub mod port;
