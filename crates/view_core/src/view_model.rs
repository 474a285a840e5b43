//! Pure mapping from catalog data plus view state to a structured view
//! description. No side effects; the GUI walks the result and the tests
//! assert on it directly.

use catalog::{Analogy, ExampleId, FrameworkId, SectionBody, SectionId, Step};

use crate::controller::{CopyTarget, ViewController};

pub const COPY_LABEL: &str = "Copy Code";
pub const COPIED_LABEL: &str = "Copied!";

#[derive(Debug, Clone)]
pub struct NavItem {
    pub id: SectionId,
    pub title: String,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct ExampleTab {
    pub id: ExampleId,
    pub title: String,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct FrameworkTab {
    pub id: FrameworkId,
    pub name: String,
    pub active: bool,
}

/// One copyable code panel, ready to draw.
#[derive(Debug, Clone)]
pub struct CodePanel {
    pub target: CopyTarget,
    pub heading: String,
    pub install: Option<String>,
    pub code: String,
    pub copy_label: &'static str,
}

#[derive(Debug, Clone)]
pub struct ExampleView {
    pub intro: String,
    pub steps: Vec<Step>,
    pub framework_tabs: Vec<FrameworkTab>,
    pub panel: CodePanel,
}

#[derive(Debug, Clone)]
pub struct TopicPanel {
    pub title: String,
    pub blurb: String,
    pub panel: CodePanel,
}

#[derive(Debug, Clone)]
pub struct CardView {
    pub target: SectionId,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone)]
pub enum BodyView {
    Overview {
        badge: Option<String>,
        lead: String,
        analogy: Analogy,
        cards: Vec<CardView>,
    },
    Patterns {
        analogy: Analogy,
        tabs: Vec<ExampleTab>,
        example: ExampleView,
    },
    Topics {
        lead: String,
        panels: Vec<TopicPanel>,
    },
}

#[derive(Debug, Clone)]
pub struct SectionView {
    pub id: SectionId,
    pub title: String,
    pub description: String,
    pub body: BodyView,
}

#[derive(Debug, Clone)]
pub struct PageModel {
    pub nav: Vec<NavItem>,
    pub section: SectionView,
}

impl PageModel {
    pub fn build(controller: &ViewController) -> Self {
        let catalog = controller.catalog();
        let active = controller.current_section();

        let nav = catalog
            .sections()
            .iter()
            .map(|section| NavItem {
                id: section.id,
                title: section.title.clone(),
                active: section.id == active,
            })
            .collect();

        let section = catalog.section(active);
        let body = match &section.body {
            SectionBody::Overview(overview) => BodyView::Overview {
                badge: overview.badge.clone(),
                lead: overview.lead.clone(),
                analogy: overview.analogy.clone(),
                cards: overview
                    .cards
                    .iter()
                    .map(|card| CardView {
                        target: card.target,
                        title: card.title.clone(),
                        text: card.text.clone(),
                    })
                    .collect(),
            },
            SectionBody::Patterns { analogy, examples } => {
                let active_example = controller
                    .active_example(active)
                    .cloned()
                    .unwrap_or_else(|| examples[0].id.clone());
                let example = examples
                    .iter()
                    .find(|candidate| candidate.id == active_example)
                    .unwrap_or(&examples[0]);
                let framework = controller
                    .active_implementation(active, &example.id)
                    .unwrap_or(example.default_implementation().id);
                let implementation = example
                    .implementations
                    .iter()
                    .find(|implementation| implementation.id == framework)
                    .unwrap_or(example.default_implementation());

                let target = CopyTarget::Implementation {
                    section: active,
                    example: example.id.clone(),
                    framework: implementation.id,
                };
                BodyView::Patterns {
                    analogy: analogy.clone(),
                    tabs: examples
                        .iter()
                        .map(|candidate| ExampleTab {
                            id: candidate.id.clone(),
                            title: candidate.title.clone(),
                            active: candidate.id == example.id,
                        })
                        .collect(),
                    example: ExampleView {
                        intro: example.intro.clone(),
                        steps: example.steps.clone(),
                        framework_tabs: example
                            .implementations
                            .iter()
                            .map(|candidate| FrameworkTab {
                                id: candidate.id,
                                name: candidate.name.clone(),
                                active: candidate.id == implementation.id,
                            })
                            .collect(),
                        panel: CodePanel {
                            heading: format!("{} Script", implementation.name),
                            install: Some(implementation.install.clone()),
                            code: implementation.code.clone(),
                            copy_label: copy_label(controller, &target),
                            target,
                        },
                    },
                }
            }
            SectionBody::Topics { lead, topics } => BodyView::Topics {
                lead: lead.clone(),
                panels: topics
                    .iter()
                    .enumerate()
                    .map(|(index, topic)| {
                        let target = CopyTarget::Topic {
                            section: active,
                            index,
                        };
                        TopicPanel {
                            title: topic.title.clone(),
                            blurb: topic.blurb.clone(),
                            panel: CodePanel {
                                heading: "Implementation Example".to_string(),
                                install: topic.install.clone(),
                                code: topic.code.clone(),
                                copy_label: copy_label(controller, &target),
                                target,
                            },
                        }
                    })
                    .collect(),
            },
        };

        Self {
            nav,
            section: SectionView {
                id: section.id,
                title: section.title.clone(),
                description: section.description.clone(),
                body,
            },
        }
    }
}

fn copy_label(controller: &ViewController, target: &CopyTarget) -> &'static str {
    if controller.is_copy_acknowledged(target) {
        COPIED_LABEL
    } else {
        COPY_LABEL
    }
}
