// SPDX-License-Identifier: MPL-2.0
//! Coalescing of viewport resizes.
//!
//! Requests arriving within the quiet window replace each other; only the
//! last one is applied, once the window has passed without a new request.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub struct ReflowDebouncer<T> {
    quiet: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> ReflowDebouncer<T> {
    #[must_use]
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Records a request, restarting the quiet window.
    pub fn request(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Returns the settled request once the window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let (_, requested_at) = self.pending.as_ref()?;
        if now.saturating_duration_since(*requested_at) < self.quiet {
            return None;
        }
        self.pending.take().map(|(value, _)| value)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
