use catalog::CatalogError;
use thiserror::Error;

/// The system clipboard rejected a write. Recovered locally: the copy
/// acknowledgment simply never shows, nothing else is affected.
#[derive(Debug, Clone, Error)]
#[error("clipboard write failed: {message}")]
pub struct ClipboardError {
    pub message: String,
}

impl ClipboardError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ViewError {
    /// A referenced section/example/implementation id does not exist in
    /// the catalog. A programming error, not a runtime condition; the
    /// transition that produced it is a no-op.
    #[error(transparent)]
    NotFound(#[from] CatalogError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}
