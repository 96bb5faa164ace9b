//! Effect handlers.
//!
//! Plain async functions that perform one request and return the event to
//! feed back into the reducer. The runtime owns spawning.

use std::time::Duration;

use giveaway_core::saphira::{DrawRequest, SaphiraClient};
use tracing::debug;

use crate::common::TaskId;
use crate::events::UiEvent;

pub async fn load_lectures(client: SaphiraClient, task: TaskId) -> UiEvent {
    let result = client.get_lectures().await;
    UiEvent::LecturesLoaded { task, result }
}

/// Waits out the pacing delay, then requests the winner.
pub async fn draw(
    client: SaphiraClient,
    task: TaskId,
    request: DrawRequest,
    delay: Duration,
) -> UiEvent {
    if !delay.is_zero() {
        debug!(delay_ms = delay.as_millis(), "pausing before draw");
        tokio::time::sleep(delay).await;
    }
    let result = client.draw(&request).await.map(|r| r.winner);
    UiEvent::DrawCompleted { task, result }
}
