//! UI event types.
//!
//! Everything the reducer reacts to: the mount signal, the frame tick,
//! terminal input, and results sent back by spawned handlers.

use crossterm::event::Event;
use giveaway_core::saphira::{Lecture, SaphiraError};

use crate::common::TaskId;

#[derive(Debug)]
pub enum UiEvent {
    /// Dispatched once before the first frame; runs the auth gate.
    Mount,
    /// Animation tick.
    Tick,
    Terminal(Event),
    LecturesLoaded {
        task: TaskId,
        result: Result<Vec<Lecture>, SaphiraError>,
    },
    DrawCompleted {
        task: TaskId,
        result: Result<String, SaphiraError>,
    },
}
