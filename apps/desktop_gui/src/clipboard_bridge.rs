use std::thread;

use crossbeam_channel::{Receiver, Sender, TrySendError};
use view_core::{ClipboardError, ClipboardSink, CopyTarget};

use crate::events::UiEvent;

/// Requests handled by the clipboard worker thread.
pub enum ClipboardCommand {
    CopyText { target: CopyTarget, text: String },
}

/// Spawns the worker that owns the OS clipboard handle. `arboard`
/// handles are not `Send`-friendly across the egui frame loop, so all
/// writes happen on this thread and outcomes flow back as `UiEvent`s.
pub fn spawn_clipboard_thread(cmd_rx: Receiver<ClipboardCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let mut clipboard = match arboard::Clipboard::new() {
            Ok(clipboard) => clipboard,
            Err(err) => {
                tracing::error!(error = %err, "clipboard backend unavailable");
                for ClipboardCommand::CopyText { target, .. } in cmd_rx.iter() {
                    let _ = ui_tx.try_send(UiEvent::CopyFailed {
                        target,
                        reason: "clipboard backend unavailable".to_string(),
                    });
                }
                return;
            }
        };
        tracing::debug!("clipboard worker ready");
        for ClipboardCommand::CopyText { target, text } in cmd_rx.iter() {
            match clipboard.set_text(text) {
                Ok(()) => {
                    let _ = ui_tx.try_send(UiEvent::CopyCompleted { target });
                }
                Err(err) => {
                    tracing::warn!(error = %err, "clipboard write failed");
                    let _ = ui_tx.try_send(UiEvent::CopyFailed {
                        target,
                        reason: err.to_string(),
                    });
                }
            }
        }
    });
}

/// Per-request sink that hands the resolved code text to the worker.
/// Built fresh for each copy click so the worker can echo the target
/// back in its outcome event.
pub struct ChannelClipboard<'a> {
    tx: &'a Sender<ClipboardCommand>,
    target: CopyTarget,
}

impl<'a> ChannelClipboard<'a> {
    pub fn new(tx: &'a Sender<ClipboardCommand>, target: CopyTarget) -> Self {
        Self { tx, target }
    }
}

impl ClipboardSink for ChannelClipboard<'_> {
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let command = ClipboardCommand::CopyText {
            target: self.target.clone(),
            text: text.to_string(),
        };
        match self.tx.try_send(command) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => {
                tracing::warn!("clipboard command queue is full");
                Err(ClipboardError::new("clipboard queue is full; please retry"))
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::error!("clipboard worker disconnected");
                Err(ClipboardError::new("clipboard worker is not running"))
            }
        }
    }
}
