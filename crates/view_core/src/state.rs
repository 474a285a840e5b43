use std::collections::HashMap;

use catalog::{ExampleId, FrameworkId, SectionId};

/// The three "active" pointers. Everything else in the guide is
/// immutable reference data; this struct is the only mutable state and
/// is only ever touched through [`crate::ViewController`].
///
/// Example and implementation selections are remembered per scope:
/// switching away from a section and back restores its last example, and
/// switching examples restores each example's last framework choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub(crate) active_section: SectionId,
    pub(crate) active_examples: HashMap<SectionId, ExampleId>,
    pub(crate) active_impls: HashMap<(SectionId, ExampleId), FrameworkId>,
}

impl ViewState {
    pub(crate) fn new(initial_section: SectionId) -> Self {
        Self {
            active_section: initial_section,
            active_examples: HashMap::new(),
            active_impls: HashMap::new(),
        }
    }

    pub fn active_section(&self) -> SectionId {
        self.active_section
    }

    pub fn active_example(&self, section: SectionId) -> Option<&ExampleId> {
        self.active_examples.get(&section)
    }

    pub fn active_implementation(
        &self,
        section: SectionId,
        example: &ExampleId,
    ) -> Option<FrameworkId> {
        self.active_impls
            .get(&(section, example.clone()))
            .copied()
    }
}
