// SPDX-License-Identifier: MPL-2.0
//! Expand tool buttons.

use crate::domain::editing::ExpandDirection;
use crate::editor::{Phase, State};
use crate::error::Result;

impl State {
    pub(super) fn expand(&mut self, direction: ExpandDirection) -> Result<()> {
        if self.phase != Phase::Expanding {
            return Ok(());
        }
        let Some(expansion) = self.expansion.as_mut() else {
            return Ok(());
        };
        let steps = expansion.expand(direction)?;
        log::debug!(
            "Expanded {direction:?}: {steps:?} ({}/{} clicks)",
            expansion.clicks_used(),
            expansion.max_clicks()
        );
        Ok(())
    }

    pub(super) fn undo_expansion(&mut self) {
        if self.phase != Phase::Expanding {
            return;
        }
        if let Some(expansion) = self.expansion.as_mut() {
            if expansion.undo() {
                log::debug!("Expansion undone: {:?}", expansion.steps());
            }
        }
    }
}
