//! The view-state controller: the only sanctioned way to change what is
//! shown. Every operation validates its ids against the catalog before
//! touching state, so a failed transition leaves the view untouched.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use catalog::{Catalog, ExampleId, FrameworkId, SectionId};

use crate::error::{ClipboardError, ViewError};
use crate::state::ViewState;

/// How long the copy button shows its acknowledgment before reverting.
pub const COPY_ACK_REVERT_AFTER: Duration = Duration::from_secs(2);

/// Addresses one copyable code panel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CopyTarget {
    Implementation {
        section: SectionId,
        example: ExampleId,
        framework: FrameworkId,
    },
    Topic {
        section: SectionId,
        index: usize,
    },
}

/// Re-tokenizes the named code panels. Idempotent; safe to call with
/// panels that are already highlighted.
pub trait Highlighter {
    fn refresh(&mut self, targets: &[CopyTarget]);
}

/// Best-effort asynchronous clipboard write. Implementations must not
/// block; a rejected write is reported and otherwise ignored.
pub trait ClipboardSink {
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

pub struct ViewController {
    catalog: Arc<Catalog>,
    state: ViewState,
    // Deadline per copy control. A newer request on the same control
    // overwrites the deadline, superseding the earlier revert.
    pending_acks: HashMap<CopyTarget, Instant>,
}

impl ViewController {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let state = ViewState::new(SectionId::Intro);
        let mut controller = Self {
            catalog,
            state,
            pending_acks: HashMap::new(),
        };
        controller.ensure_defaults(SectionId::Intro);
        controller
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn current_section(&self) -> SectionId {
        self.state.active_section
    }

    pub fn active_example(&self, section: SectionId) -> Option<&ExampleId> {
        self.state.active_example(section)
    }

    pub fn active_implementation(
        &self,
        section: SectionId,
        example: &ExampleId,
    ) -> Option<FrameworkId> {
        self.state.active_implementation(section, example)
    }

    /// Switches the visible top-level section. Idempotent; always
    /// succeeds (the id set is closed). On first activation of an
    /// example-based section the default example and implementation are
    /// initialized. Every code panel now visible is re-highlighted.
    pub fn activate_section(&mut self, id: SectionId, highlighter: &mut dyn Highlighter) {
        let previous = self.state.active_section;
        self.state.active_section = id;
        self.ensure_defaults(id);
        tracing::debug!(from = previous.as_str(), to = id.as_str(), "section activated");
        highlighter.refresh(&self.visible_targets());
    }

    /// Slug-based variant for externally supplied section names (e.g. a
    /// CLI flag). Unknown slugs fail without any state change.
    pub fn activate_section_by_slug(
        &mut self,
        slug: &str,
        highlighter: &mut dyn Highlighter,
    ) -> Result<(), ViewError> {
        let id = self.catalog.section_by_slug(slug)?.id;
        self.activate_section(id, highlighter);
        Ok(())
    }

    /// Switches the active example within a section, restoring that
    /// example's remembered (or default-first) framework choice.
    /// Selections are scoped per example, not global. Only the newly
    /// visible code panel is re-highlighted.
    pub fn activate_example(
        &mut self,
        section: SectionId,
        example: &ExampleId,
        highlighter: &mut dyn Highlighter,
    ) -> Result<(), ViewError> {
        let framework = {
            let resolved = self.catalog.example(section, example)?;
            *self
                .state
                .active_impls
                .entry((section, example.clone()))
                .or_insert(resolved.default_implementation().id)
        };
        self.state.active_examples.insert(section, example.clone());
        tracing::debug!(
            section = section.as_str(),
            example = %example,
            framework = framework.as_str(),
            "example activated"
        );
        highlighter.refresh(&[CopyTarget::Implementation {
            section,
            example: example.clone(),
            framework,
        }]);
        Ok(())
    }

    /// Switches the framework variant shown for an example. Highlighting
    /// of the newly shown panel happens lazily at draw time, so no
    /// explicit refresh is needed here.
    pub fn activate_implementation(
        &mut self,
        section: SectionId,
        example: &ExampleId,
        framework: FrameworkId,
    ) -> Result<(), ViewError> {
        self.catalog.implementation(section, example, framework)?;
        self.state
            .active_impls
            .insert((section, example.clone()), framework);
        tracing::debug!(
            section = section.as_str(),
            example = %example,
            framework = framework.as_str(),
            "implementation activated"
        );
        Ok(())
    }

    /// Resolves the exact code text behind a copy control.
    pub fn copy_text(&self, target: &CopyTarget) -> Result<&str, ViewError> {
        match target {
            CopyTarget::Implementation {
                section,
                example,
                framework,
            } => Ok(&self
                .catalog
                .implementation(*section, example, *framework)?
                .code),
            CopyTarget::Topic { section, index } => {
                Ok(&self.catalog.topic(*section, *index)?.code)
            }
        }
    }

    /// Copies a panel's code text and arms the acknowledgment label. A
    /// second request on the same control before the revert fires
    /// restarts the window, so the label reverts exactly once. A
    /// rejected clipboard write leaves the label alone.
    pub fn request_copy(
        &mut self,
        target: &CopyTarget,
        now: Instant,
        sink: &mut dyn ClipboardSink,
    ) -> Result<(), ViewError> {
        let text = self.copy_text(target)?.to_string();
        if let Err(err) = sink.copy_text(&text) {
            tracing::warn!(error = %err, "clipboard write rejected");
            self.pending_acks.remove(target);
            return Err(err.into());
        }
        self.pending_acks
            .insert(target.clone(), now + COPY_ACK_REVERT_AFTER);
        Ok(())
    }

    /// Expires due acknowledgment labels. Called once per frame.
    pub fn tick(&mut self, now: Instant) {
        self.pending_acks.retain(|_, deadline| *deadline > now);
    }

    pub fn is_copy_acknowledged(&self, target: &CopyTarget) -> bool {
        self.pending_acks.contains_key(target)
    }

    /// True while any acknowledgment is pending; the frame loop keeps
    /// repainting until the last label has reverted.
    pub fn has_pending_acks(&self) -> bool {
        !self.pending_acks.is_empty()
    }

    /// Lazy defaults: first example in declared order, and per example
    /// the first implementation in declared order. Only fills selections
    /// that have never been made, so remembered choices survive.
    fn ensure_defaults(&mut self, id: SectionId) {
        let Some(first) = self.catalog.section(id).default_example() else {
            return;
        };
        let first_id = first.id.clone();
        let example = self
            .state
            .active_examples
            .entry(id)
            .or_insert(first_id)
            .clone();
        if let Ok(resolved) = self.catalog.example(id, &example) {
            self.state
                .active_impls
                .entry((id, example))
                .or_insert(resolved.default_implementation().id);
        }
    }

    /// Code panels visible for the active section: the selected
    /// implementation of the selected example, or every topic panel of a
    /// topic section.
    fn visible_targets(&self) -> Vec<CopyTarget> {
        let section = self.state.active_section;
        if let Some(example) = self.state.active_example(section) {
            let Some(framework) = self.state.active_implementation(section, example) else {
                return Vec::new();
            };
            return vec![CopyTarget::Implementation {
                section,
                example: example.clone(),
                framework,
            }];
        }
        match &self.catalog.section(section).body {
            catalog::SectionBody::Topics { topics, .. } => (0..topics.len())
                .map(|index| CopyTarget::Topic { section, index })
                .collect(),
            _ => Vec::new(),
        }
    }
}
