use std::time::{Duration, Instant};

use catalog::{Analogy, ExampleId, FrameworkId, SectionId};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use view_core::{
    BodyView, CardView, CodePanel, CopyTarget, ExampleTab, ExampleView, NavItem, PageModel,
    TopicPanel, ViewController, ViewError,
};

use crate::clipboard_bridge::{ChannelClipboard, ClipboardCommand};
use crate::events::UiEvent;
use crate::highlight::CodeHighlighter;

/// Repaint cadence while a "Copied!" label is counting down.
const ACK_REPAINT_INTERVAL: Duration = Duration::from_millis(16);
/// Idle repaint cadence; the page is static between interactions.
const IDLE_REPAINT_INTERVAL: Duration = Duration::from_millis(250);

/// Interactions collected during a frame and applied after rendering,
/// so the controller is never mutated while its view model is on
/// screen.
enum PageAction {
    SelectSection(SectionId),
    SelectExample {
        section: SectionId,
        example: ExampleId,
    },
    SelectImplementation {
        section: SectionId,
        example: ExampleId,
        framework: FrameworkId,
    },
    Copy(CopyTarget),
}

pub struct GuideApp {
    controller: ViewController,
    highlighter: CodeHighlighter,
    clipboard_tx: Sender<ClipboardCommand>,
    ui_rx: Receiver<UiEvent>,
    status: String,
}

impl GuideApp {
    pub fn new(
        controller: ViewController,
        highlighter: CodeHighlighter,
        clipboard_tx: Sender<ClipboardCommand>,
        ui_rx: Receiver<UiEvent>,
    ) -> Self {
        Self {
            controller,
            highlighter,
            clipboard_tx,
            ui_rx,
            status: String::new(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::CopyCompleted { target } => {
                    tracing::debug!(?target, "clipboard write completed");
                }
                UiEvent::CopyFailed { target, reason } => {
                    tracing::warn!(?target, %reason, "clipboard write failed");
                    self.status = format!("Copy failed: {reason}");
                }
            }
        }
    }

    fn apply_actions(&mut self, actions: Vec<PageAction>) {
        for action in actions {
            if let Err(err) = self.apply_action(action) {
                tracing::warn!(error = %err, "view action rejected");
                self.status = err.to_string();
            }
        }
    }

    fn apply_action(&mut self, action: PageAction) -> Result<(), ViewError> {
        match action {
            PageAction::SelectSection(id) => {
                self.controller.activate_section(id, &mut self.highlighter);
                Ok(())
            }
            PageAction::SelectExample { section, example } => {
                self.controller
                    .activate_example(section, &example, &mut self.highlighter)
            }
            PageAction::SelectImplementation {
                section,
                example,
                framework,
            } => self
                .controller
                .activate_implementation(section, &example, framework),
            PageAction::Copy(target) => {
                let mut sink = ChannelClipboard::new(&self.clipboard_tx, target.clone());
                self.controller
                    .request_copy(&target, Instant::now(), &mut sink)
            }
        }
    }

    fn show_nav_panel(
        &self,
        ctx: &egui::Context,
        nav: &[NavItem],
        actions: &mut Vec<PageAction>,
    ) {
        egui::SidePanel::left("section_nav_panel")
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.heading("Agent Orchestration");
                ui.small("Patterns & Concepts");
                ui.add_space(8.0);
                ui.separator();
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for item in nav {
                            if ui.selectable_label(item.active, &item.title).clicked() {
                                actions.push(PageAction::SelectSection(item.id));
                            }
                        }
                    });
            });
    }

    fn show_status_line(&mut self, ctx: &egui::Context) {
        if self.status.is_empty() {
            return;
        }
        egui::TopBottomPanel::bottom("status_line").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(ui.visuals().warn_fg_color, &self.status);
                if ui.small_button("Dismiss").clicked() {
                    self.status.clear();
                }
            });
        });
    }

    fn show_page(&mut self, ctx: &egui::Context, model: &PageModel, actions: &mut Vec<PageAction>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.heading(&model.section.title);
                    if !model.section.description.is_empty() {
                        ui.label(&model.section.description);
                    }
                    ui.add_space(12.0);
                    match &model.section.body {
                        BodyView::Overview {
                            badge,
                            lead,
                            analogy,
                            cards,
                        } => {
                            self.render_overview(ui, badge.as_deref(), lead, analogy, cards, actions)
                        }
                        BodyView::Patterns {
                            analogy,
                            tabs,
                            example,
                        } => self.render_patterns(
                            ui,
                            model.section.id,
                            analogy,
                            tabs,
                            example,
                            actions,
                        ),
                        BodyView::Topics { lead, panels } => {
                            self.render_topics(ui, lead, panels, actions)
                        }
                    }
                });
        });
    }

    fn render_overview(
        &mut self,
        ui: &mut egui::Ui,
        badge: Option<&str>,
        lead: &str,
        analogy: &Analogy,
        cards: &[CardView],
        actions: &mut Vec<PageAction>,
    ) {
        if let Some(badge) = badge {
            ui.label(
                egui::RichText::new(badge)
                    .small()
                    .color(ui.visuals().weak_text_color()),
            );
            ui.add_space(4.0);
        }
        ui.label(lead);
        ui.add_space(12.0);
        self.render_analogy(ui, analogy);
        ui.add_space(12.0);

        for card in cards {
            egui::Frame::group(ui.style())
                .inner_margin(egui::Margin::symmetric(12, 10))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(egui::RichText::new(&card.title).strong());
                    ui.label(&card.text);
                    if ui.link("Open pattern").clicked() {
                        actions.push(PageAction::SelectSection(card.target));
                    }
                });
            ui.add_space(6.0);
        }
    }

    fn render_patterns(
        &mut self,
        ui: &mut egui::Ui,
        section: SectionId,
        analogy: &Analogy,
        tabs: &[ExampleTab],
        example: &ExampleView,
        actions: &mut Vec<PageAction>,
    ) {
        self.render_analogy(ui, analogy);
        ui.add_space(12.0);

        ui.horizontal_wrapped(|ui| {
            for tab in tabs {
                if ui.selectable_label(tab.active, &tab.title).clicked() {
                    actions.push(PageAction::SelectExample {
                        section,
                        example: tab.id.clone(),
                    });
                }
            }
        });
        ui.add_space(8.0);

        ui.label(&example.intro);
        ui.add_space(8.0);
        for (index, step) in example.steps.iter().enumerate() {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(format!("{}.", index + 1)).strong());
                ui.label(egui::RichText::new(&step.title).strong());
                ui.label(&step.text);
            });
        }
        ui.add_space(12.0);

        let active_example = tabs
            .iter()
            .find(|tab| tab.active)
            .map(|tab| tab.id.clone());
        ui.horizontal_wrapped(|ui| {
            for tab in &example.framework_tabs {
                if ui.selectable_label(tab.active, &tab.name).clicked() {
                    if let Some(example) = active_example.clone() {
                        actions.push(PageAction::SelectImplementation {
                            section,
                            example,
                            framework: tab.id,
                        });
                    }
                }
            }
        });
        ui.add_space(8.0);

        self.render_code_panel(ui, &example.panel, actions);
    }

    fn render_topics(
        &mut self,
        ui: &mut egui::Ui,
        lead: &str,
        panels: &[TopicPanel],
        actions: &mut Vec<PageAction>,
    ) {
        ui.label(lead);
        ui.add_space(12.0);
        for topic in panels {
            ui.heading(&topic.title);
            ui.label(&topic.blurb);
            ui.add_space(6.0);
            self.render_code_panel(ui, &topic.panel, actions);
            ui.add_space(16.0);
        }
    }

    fn render_analogy(&self, ui: &mut egui::Ui, analogy: &Analogy) {
        analogy_frame(ui.visuals())
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new(&analogy.title).strong());
                ui.label(&analogy.text);
            });
    }

    fn render_code_panel(
        &mut self,
        ui: &mut egui::Ui,
        panel: &CodePanel,
        actions: &mut Vec<PageAction>,
    ) {
        if let Some(install) = &panel.install {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Install:").strong());
                ui.monospace(install);
            });
            ui.add_space(4.0);
        }
        code_frame(ui.visuals())
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(&panel.heading)
                            .small()
                            .color(ui.visuals().weak_text_color()),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button(panel.copy_label).clicked() {
                            actions.push(PageAction::Copy(panel.target.clone()));
                        }
                    });
                });
                ui.separator();
                let style = ui.style().clone();
                let job =
                    self.highlighter
                        .layout_job(ui.ctx(), &style, &panel.target, &panel.code);
                egui::ScrollArea::horizontal()
                    .id_salt(&panel.target)
                    .show(ui, |ui| {
                        ui.label(job);
                    });
            });
    }
}

/// Tinted callout container for the analogy block.
fn analogy_frame(visuals: &egui::Visuals) -> egui::Frame {
    egui::Frame::new()
        .fill(visuals.faint_bg_color)
        .corner_radius(8)
        .inner_margin(egui::Margin::symmetric(12, 10))
}

/// Dark container behind a highlighted script.
fn code_frame(visuals: &egui::Visuals) -> egui::Frame {
    egui::Frame::new()
        .fill(visuals.extreme_bg_color)
        .corner_radius(8)
        .inner_margin(egui::Margin::symmetric(12, 10))
}

impl eframe::App for GuideApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.controller.tick(Instant::now());

        let model = PageModel::build(&self.controller);
        let mut actions = Vec::new();

        self.show_nav_panel(ctx, &model.nav, &mut actions);
        self.show_status_line(ctx);
        self.show_page(ctx, &model, &mut actions);

        self.apply_actions(actions);

        if self.controller.has_pending_acks() {
            ctx.request_repaint_after(ACK_REPAINT_INTERVAL);
        } else {
            ctx.request_repaint_after(IDLE_REPAINT_INTERVAL);
        }
    }
}
