//! Lecture list reducer.

use giveaway_core::saphira::{Lecture, SaphiraError};
use tracing::{debug, warn};

use super::LecturesState;
use crate::common::{TaskId, TaskSeq, Tasks};
use crate::effects::UiEffect;

pub fn start_load(tasks: &mut Tasks, task_seq: &mut TaskSeq) -> UiEffect {
    let task = task_seq.next_id();
    tasks.lecture_list.start(task);
    UiEffect::LoadLectures { task }
}

/// Merges a fetched list. A failed fetch leaves the list as it was.
pub fn handle_lectures_loaded(
    lectures: &mut LecturesState,
    tasks: &mut Tasks,
    task: TaskId,
    result: Result<Vec<Lecture>, SaphiraError>,
) {
    if !tasks.lecture_list.finish_if_active(task) {
        return;
    }
    match result {
        Ok(fetched) => {
            debug!(count = fetched.len(), "lectures loaded");
            lectures.merge(fetched);
        }
        Err(err) => warn!(error = %err, "failed to load lectures"),
    }
}
