//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer never performs I/O or spawns tasks itself.

use std::time::Duration;

use giveaway_core::saphira::DrawRequest;

use crate::common::TaskId;

#[derive(Debug, PartialEq, Eq)]
pub enum UiEffect {
    Quit,

    /// Fetch the lecture list.
    LoadLectures { task: TaskId },

    /// Wait `delay`, then request a winner for `request`.
    StartDraw {
        task: TaskId,
        request: DrawRequest,
        delay: Duration,
    },
}
