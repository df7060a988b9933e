//! Inbox channel carrying async handler results back to the event loop.

use tokio::sync::mpsc;

use crate::events::UiEvent;

/// Sender half handed to spawned handlers.
pub type UiEventSender = mpsc::UnboundedSender<UiEvent>;

/// Receiver half drained by the runtime each frame.
pub type UiEventReceiver = mpsc::UnboundedReceiver<UiEvent>;
