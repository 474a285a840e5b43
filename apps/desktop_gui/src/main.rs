mod clipboard_bridge;
mod events;
mod highlight;
mod ui;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;
use catalog::{Catalog, SectionId};
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use view_core::ViewController;

use crate::clipboard_bridge::{spawn_clipboard_thread, ClipboardCommand};
use crate::events::UiEvent;
use crate::highlight::CodeHighlighter;
use crate::ui::GuideApp;

#[derive(Debug, Parser)]
#[command(
    name = "orchestration_guide",
    about = "Desktop guide to multi-agent orchestration patterns"
)]
struct Args {
    /// Section slug to open on startup, for example "handoff".
    #[arg(long)]
    section: Option<String>,
    /// Load the pattern catalog from a TOML file instead of the
    /// built-in one.
    #[arg(long)]
    catalog: Option<PathBuf>,
}

fn load_catalog(args: &Args) -> anyhow::Result<Catalog> {
    match &args.catalog {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading catalog file {}", path.display()))?;
            Catalog::from_toml(&text)
                .with_context(|| format!("parsing catalog file {}", path.display()))
        }
        None => Catalog::builtin().context("parsing built-in catalog"),
    }
}

/// Establishes the initial section with exactly one activation: the
/// intro page, unless a slug override was given on the command line.
fn open_startup_section(
    controller: &mut ViewController,
    highlighter: &mut CodeHighlighter,
    slug: Option<&str>,
) -> anyhow::Result<()> {
    match slug {
        Some(slug) => controller
            .activate_section_by_slug(slug, highlighter)
            .with_context(|| format!("opening startup section {slug:?}")),
        None => {
            controller.activate_section(SectionId::Intro, highlighter);
            Ok(())
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let catalog = Arc::new(load_catalog(&args)?);
    tracing::info!(sections = catalog.sections().len(), "catalog loaded");

    let (clipboard_tx, clipboard_rx) = bounded::<ClipboardCommand>(32);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(32);
    spawn_clipboard_thread(clipboard_rx, ui_tx);

    let mut controller = ViewController::new(catalog);
    let mut highlighter = CodeHighlighter::new();
    open_startup_section(&mut controller, &mut highlighter, args.section.as_deref())?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Multi-Agent Orchestration Guide")
            .with_inner_size([1180.0, 780.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Multi-Agent Orchestration Guide",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(GuideApp::new(
                controller,
                highlighter,
                clipboard_tx,
                ui_rx,
            )))
        }),
    )
    .map_err(|err| anyhow::anyhow!("gui event loop failed: {err}"))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use catalog::{Catalog, SectionId};
    use view_core::ViewController;

    use super::open_startup_section;
    use crate::highlight::CodeHighlighter;

    fn controller() -> ViewController {
        ViewController::new(Arc::new(Catalog::builtin().expect("builtin catalog")))
    }

    #[test]
    fn startup_without_an_override_opens_the_intro_page() {
        let mut controller = controller();
        let mut highlighter = CodeHighlighter::new();
        open_startup_section(&mut controller, &mut highlighter, None).expect("startup");
        assert_eq!(controller.current_section(), SectionId::Intro);
    }

    #[test]
    fn startup_slug_override_opens_that_section() {
        let mut controller = controller();
        let mut highlighter = CodeHighlighter::new();
        open_startup_section(&mut controller, &mut highlighter, Some("handoff"))
            .expect("startup");
        assert_eq!(controller.current_section(), SectionId::Handoff);
        assert!(controller
            .active_example(SectionId::Handoff)
            .is_some());
    }

    #[test]
    fn startup_with_an_unknown_slug_fails() {
        let mut controller = controller();
        let mut highlighter = CodeHighlighter::new();
        let err = open_startup_section(&mut controller, &mut highlighter, Some("nonsense"))
            .unwrap_err();
        assert!(err.to_string().contains("startup section"));
        assert_eq!(controller.current_section(), SectionId::Intro);
    }
}
