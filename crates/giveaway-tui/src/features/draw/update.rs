//! Draw feature reducer.

use std::time::Duration;

use giveaway_core::saphira::SaphiraError;
use tracing::{info, warn};

use super::{DrawResult, DrawState, FieldError, FormState};
use crate::common::{TaskId, TaskSeq, Tasks};
use crate::effects::UiEffect;

/// Validates the form and starts a draw.
///
/// A blank id flags the field and produces no effect. Submitting while a
/// draw is already running is a no-op.
pub fn submit(
    form: &mut FormState,
    tasks: &mut Tasks,
    task_seq: &mut TaskSeq,
    delay: Duration,
) -> Vec<UiEffect> {
    if tasks.draw.is_running() {
        return vec![];
    }
    let request = match form.validate() {
        Ok(request) => request,
        Err(error) => {
            form.mark_invalid(error);
            return vec![];
        }
    };
    form.error = None;

    let task = task_seq.next_id();
    tasks.draw.start(task);
    info!(
        lecture_id = %request.lecture_id,
        mode = request.mode.label(),
        "starting draw"
    );
    vec![UiEffect::StartDraw {
        task,
        request,
        delay,
    }]
}

/// Applies a finished draw.
///
/// Success replaces the result and resets the form. Failure keeps whatever
/// result was showing and flags the id field.
pub fn handle_draw_completed(
    draw: &mut DrawState,
    form: &mut FormState,
    tasks: &mut Tasks,
    task: TaskId,
    result: Result<String, SaphiraError>,
) {
    if !tasks.draw.finish_if_active(task) {
        return;
    }
    match result {
        Ok(winner) => {
            info!("draw finished");
            draw.result = DrawResult::Winner(winner);
            form.reset();
        }
        Err(err) => {
            warn!(error = %err, "draw failed");
            form.mark_invalid(FieldError::DrawFailed);
        }
    }
}

pub fn clear_result(draw: &mut DrawState) {
    draw.result = DrawResult::Placeholder;
}
