// SPDX-License-Identifier: MPL-2.0
//! Outward canvas expansion (outpainting) bookkeeping.
//!
//! Each edge grows in whole steps. A step is a fixed number of pixels chosen
//! when the expansion tool is entered. The click budget counts button presses:
//! a diagonal press grows two edges but spends a single click.

use crate::error::ValidationError;

/// Four non-negative edge step counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ExpansionSteps {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl ExpansionSteps {
    /// No expansion on any edge.
    pub const NONE: Self = Self {
        top: 0,
        right: 0,
        bottom: 0,
        left: 0,
    };

    /// Sum of all four edge counts.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.top + self.right + self.bottom + self.left
    }

    /// Returns `true` when no edge has been expanded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Returns the steps after one press in `direction`.
    #[must_use]
    pub fn grown(self, direction: ExpandDirection) -> Self {
        let (top, right, bottom, left) = direction.increments();
        Self {
            top: self.top + top,
            right: self.right + right,
            bottom: self.bottom + bottom,
            left: self.left + left,
        }
    }

    /// Canvas size after expanding an image of `width`x`height` by `step` pixels per count.
    #[must_use]
    pub fn expanded_size(&self, width: u32, height: u32, step: u32) -> (u32, u32) {
        (
            width + (self.left + self.right) * step,
            height + (self.top + self.bottom) * step,
        )
    }

    /// Where the original image lands on the expanded canvas.
    #[must_use]
    pub fn origin_offset(&self, step: u32) -> (u32, u32) {
        (self.left * step, self.top * step)
    }
}

/// The eight expansion buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpandDirection {
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

impl ExpandDirection {
    pub const ALL: [ExpandDirection; 8] = [
        ExpandDirection::Top,
        ExpandDirection::TopRight,
        ExpandDirection::Right,
        ExpandDirection::BottomRight,
        ExpandDirection::Bottom,
        ExpandDirection::BottomLeft,
        ExpandDirection::Left,
        ExpandDirection::TopLeft,
    ];

    /// Per-edge increments as `(top, right, bottom, left)`.
    fn increments(self) -> (u32, u32, u32, u32) {
        match self {
            ExpandDirection::Top => (1, 0, 0, 0),
            ExpandDirection::TopRight => (1, 1, 0, 0),
            ExpandDirection::Right => (0, 1, 0, 0),
            ExpandDirection::BottomRight => (0, 1, 1, 0),
            ExpandDirection::Bottom => (0, 0, 1, 0),
            ExpandDirection::BottomLeft => (0, 0, 1, 1),
            ExpandDirection::Left => (0, 0, 0, 1),
            ExpandDirection::TopLeft => (1, 0, 0, 1),
        }
    }

    #[must_use]
    pub fn is_diagonal(self) -> bool {
        matches!(
            self,
            ExpandDirection::TopRight
                | ExpandDirection::BottomRight
                | ExpandDirection::BottomLeft
                | ExpandDirection::TopLeft
        )
    }
}

/// Current expansion plus its undo history and budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionState {
    steps: ExpansionSteps,
    history: Vec<ExpansionSteps>,
    step_px: u32,
    max_clicks: usize,
}

impl ExpansionState {
    /// Creates an empty expansion with a fixed step size.
    #[must_use]
    pub fn new(step_px: u32, max_clicks: usize) -> Self {
        Self {
            steps: ExpansionSteps::NONE,
            history: Vec::new(),
            step_px: step_px.max(1),
            max_clicks,
        }
    }

    /// Creates an empty expansion whose step is `ratio` of the image's shorter side.
    #[must_use]
    pub fn for_image(width: u32, height: u32, ratio: f32, max_clicks: usize) -> Self {
        Self::new(step_for(width, height, ratio), max_clicks)
    }

    #[must_use]
    pub fn steps(&self) -> ExpansionSteps {
        self.steps
    }

    #[must_use]
    pub fn step_px(&self) -> u32 {
        self.step_px
    }

    #[must_use]
    pub fn max_clicks(&self) -> usize {
        self.max_clicks
    }

    /// Number of presses currently spent.
    #[must_use]
    pub fn clicks_used(&self) -> usize {
        self.history.len()
    }

    /// Whether another press would be accepted (drives button enablement).
    #[must_use]
    pub fn can_expand(&self) -> bool {
        self.clicks_used() < self.max_clicks
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Applies one press, recording the previous steps for undo.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ExpansionLimitReached`] once the budget is
    /// spent; the steps are left unchanged.
    pub fn expand(&mut self, direction: ExpandDirection) -> Result<ExpansionSteps, ValidationError> {
        if !self.can_expand() {
            return Err(ValidationError::ExpansionLimitReached {
                max_clicks: self.max_clicks,
            });
        }
        self.history.push(self.steps);
        self.steps = self.steps.grown(direction);
        Ok(self.steps)
    }

    /// Restores the steps from before the most recent press.
    ///
    /// Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.steps = previous;
                true
            }
            None => false,
        }
    }
}

/// Step size for an image: `ratio` of its shorter side, at least one pixel.
#[must_use]
pub fn step_for(width: u32, height: u32, ratio: f32) -> u32 {
    let shorter = width.min(height) as f32;
    // Bounded by the shorter side, so the cast cannot overflow
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let step = (shorter * ratio).round() as u32;
    step.max(1)
}
