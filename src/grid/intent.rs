//! Intents for the grid view state.

use std::time::{Duration, Instant};

use crate::ui::mvi::Intent;

use super::layout::GridLayoutNegotiator;

#[derive(Debug, Clone)]
pub enum GridIntent {
    /// The toolbar was measured at a new width.
    HeaderResized {
        width: u16,
        negotiator: GridLayoutNegotiator,
    },

    /// Refresh clicked: hold the spinner for `hold` starting at `at`.
    RefreshClicked { at: Instant, hold: Duration },

    /// Clock tick; clears an expired refresh flag.
    Tick { now: Instant },

    ToggleColumn { key: String },
    ShowAllColumns,

    OpenColumnPicker,
    CloseColumnPicker,
    PickerUp,
    PickerDown,
    /// Toggle the column under the picker cursor.
    PickerToggle,
}

impl Intent for GridIntent {}
