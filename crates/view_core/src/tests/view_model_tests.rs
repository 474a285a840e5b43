use std::time::{Duration, Instant};

use catalog::{ExampleId, FrameworkId, SectionId};

use crate::controller::CopyTarget;
use crate::tests::{controller, RecordingClipboard, RecordingHighlighter};
use crate::view_model::{BodyView, PageModel, COPIED_LABEL, COPY_LABEL};

#[test]
fn exactly_one_nav_item_is_active() {
    let mut controller = controller();
    let mut highlighter = RecordingHighlighter::default();
    controller.activate_section(SectionId::Handoff, &mut highlighter);

    let model = PageModel::build(&controller);
    assert_eq!(model.nav.len(), SectionId::ALL.len());
    let active: Vec<SectionId> = model
        .nav
        .iter()
        .filter(|item| item.active)
        .map(|item| item.id)
        .collect();
    assert_eq!(active, vec![SectionId::Handoff]);
}

#[test]
fn nav_preserves_catalog_order() {
    let controller = controller();
    let model = PageModel::build(&controller);
    let order: Vec<SectionId> = model.nav.iter().map(|item| item.id).collect();
    assert_eq!(order, SectionId::ALL.to_vec());
}

#[test]
fn intro_page_renders_the_overview() {
    let controller = controller();
    let model = PageModel::build(&controller);
    let BodyView::Overview { cards, badge, .. } = &model.section.body else {
        panic!("intro should render as an overview");
    };
    assert_eq!(badge.as_deref(), Some("Experimental Features"));
    assert_eq!(cards.len(), 5);
    assert!(cards.iter().any(|card| card.target == SectionId::Magentic));
}

#[test]
fn pattern_page_marks_active_example_and_framework() {
    let mut controller = controller();
    let mut highlighter = RecordingHighlighter::default();
    controller.activate_section(SectionId::Sequential, &mut highlighter);
    let ex2 = ExampleId::new("seq-ex2");
    controller
        .activate_example(SectionId::Sequential, &ex2, &mut highlighter)
        .expect("activate seq-ex2");
    controller
        .activate_implementation(SectionId::Sequential, &ex2, FrameworkId::CrewAi)
        .expect("select crew");

    let model = PageModel::build(&controller);
    let BodyView::Patterns { tabs, example, .. } = &model.section.body else {
        panic!("sequential should render as a pattern page");
    };

    let active_tabs: Vec<&str> = tabs
        .iter()
        .filter(|tab| tab.active)
        .map(|tab| tab.id.as_str())
        .collect();
    assert_eq!(active_tabs, vec!["seq-ex2"]);

    let active_frameworks: Vec<FrameworkId> = example
        .framework_tabs
        .iter()
        .filter(|tab| tab.active)
        .map(|tab| tab.id)
        .collect();
    assert_eq!(active_frameworks, vec![FrameworkId::CrewAi]);
    assert_eq!(example.panel.heading, "CrewAI Script");
    assert!(example.panel.code.contains("from crewai import"));
}

#[test]
fn copy_label_tracks_the_acknowledgment_window() {
    let mut controller = controller();
    let mut highlighter = RecordingHighlighter::default();
    let mut clipboard = RecordingClipboard::default();
    controller.activate_section(SectionId::Advanced, &mut highlighter);

    let model = PageModel::build(&controller);
    let BodyView::Topics { panels, .. } = &model.section.body else {
        panic!("advanced should render as topics");
    };
    assert!(panels
        .iter()
        .all(|panel| panel.panel.copy_label == COPY_LABEL));

    let target = CopyTarget::Topic {
        section: SectionId::Advanced,
        index: 1,
    };
    let t0 = Instant::now();
    controller
        .request_copy(&target, t0, &mut clipboard)
        .expect("copy");

    let model = PageModel::build(&controller);
    let BodyView::Topics { panels, .. } = &model.section.body else {
        panic!("advanced should render as topics");
    };
    assert_eq!(panels[1].panel.copy_label, COPIED_LABEL);
    assert_eq!(panels[0].panel.copy_label, COPY_LABEL);

    controller.tick(t0 + Duration::from_secs(3));
    let model = PageModel::build(&controller);
    let BodyView::Topics { panels, .. } = &model.section.body else {
        panic!("advanced should render as topics");
    };
    assert_eq!(panels[1].panel.copy_label, COPY_LABEL);
}
