use view_core::CopyTarget;

/// Outcomes reported by the clipboard worker back to the UI thread.
#[derive(Debug)]
pub enum UiEvent {
    CopyCompleted {
        target: CopyTarget,
    },
    CopyFailed {
        target: CopyTarget,
        reason: String,
    },
}
