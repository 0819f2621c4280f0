// SPDX-License-Identifier: MPL-2.0
//! The session's single visible error slot.

use crate::error::Error;
use std::time::{Duration, Instant};

/// An error shown inline, optionally expiring.
///
/// Transient errors (see [`Error::is_transient`]) expire after the configured
/// timeout; every other error stays until cleared. The timeout runs from the
/// first clock tick that sees the notice, so the editor never reads the
/// system clock itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorNotice {
    error: Error,
    shown_at: Option<Instant>,
    expires_after: Option<Duration>,
}

impl ErrorNotice {
    #[must_use]
    pub fn new(error: Error, transient_timeout: Duration) -> Self {
        let expires_after = error.is_transient().then_some(transient_timeout);
        Self {
            error,
            shown_at: None,
            expires_after,
        }
    }

    /// Records `now` as the moment the notice became visible.
    ///
    /// Only the first call has an effect.
    pub fn stamp(&mut self, now: Instant) {
        self.shown_at.get_or_insert(now);
    }

    #[must_use]
    pub fn error(&self) -> &Error {
        &self.error
    }

    /// Text shown to the user.
    #[must_use]
    pub fn message(&self) -> String {
        self.error.to_string()
    }

    #[must_use]
    pub fn is_transient(&self) -> bool {
        self.expires_after.is_some()
    }

    /// An unstamped notice never counts as expired.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        match (self.shown_at, self.expires_after) {
            (Some(shown_at), Some(timeout)) => now.saturating_duration_since(shown_at) >= timeout,
            _ => false,
        }
    }
}
