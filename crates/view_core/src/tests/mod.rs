mod view_model_tests;

use std::sync::Arc;

use catalog::Catalog;

use crate::controller::{ClipboardSink, CopyTarget, Highlighter, ViewController};
use crate::error::ClipboardError;

pub(crate) fn controller() -> ViewController {
    ViewController::new(Arc::new(Catalog::builtin().expect("builtin catalog")))
}

/// Records every refresh request.
#[derive(Default)]
pub(crate) struct RecordingHighlighter {
    pub calls: Vec<Vec<CopyTarget>>,
}

impl Highlighter for RecordingHighlighter {
    fn refresh(&mut self, targets: &[CopyTarget]) {
        self.calls.push(targets.to_vec());
    }
}

/// Records copied text; optionally rejects every write.
#[derive(Default)]
pub(crate) struct RecordingClipboard {
    pub copied: Vec<String>,
    pub reject: bool,
}

impl ClipboardSink for RecordingClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.reject {
            return Err(ClipboardError::new("permission denied"));
        }
        self.copied.push(text.to_string());
        Ok(())
    }
}
