//! Inbox channel types. Spawned handlers send their result events here.

use tokio::sync::mpsc;

use crate::events::UiEvent;

pub type UiEventSender = mpsc::UnboundedSender<UiEvent>;
pub type UiEventReceiver = mpsc::UnboundedReceiver<UiEvent>;
