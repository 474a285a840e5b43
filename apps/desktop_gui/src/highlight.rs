use std::collections::HashMap;

use egui::text::LayoutJob;
use egui_extras::syntax_highlighting::{self, CodeTheme};
use view_core::{CopyTarget, Highlighter};

/// Memoizes syntax-highlight layout jobs keyed by code panel. The
/// scripts run to several hundred lines each, so they are only
/// re-tokenized when a panel becomes visible.
pub struct CodeHighlighter {
    cache: HashMap<CopyTarget, LayoutJob>,
}

impl CodeHighlighter {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Returns the highlighted layout for a panel, computing it on
    /// first use after the panel became visible.
    pub fn layout_job(
        &mut self,
        ctx: &egui::Context,
        style: &egui::Style,
        target: &CopyTarget,
        code: &str,
    ) -> LayoutJob {
        if let Some(job) = self.cache.get(target) {
            return job.clone();
        }
        let theme = CodeTheme::from_memory(ctx, style);
        let job = syntax_highlighting::highlight(ctx, style, &theme, code, "py");
        self.cache.insert(target.clone(), job.clone());
        job
    }
}

impl Default for CodeHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter for CodeHighlighter {
    /// Invalidates the panels that just became visible so they are
    /// re-tokenized with current theme settings on the next frame.
    fn refresh(&mut self, targets: &[CopyTarget]) {
        self.cache.retain(|cached, _| !targets.contains(cached));
    }
}
