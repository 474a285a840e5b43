//! View-state core for the patterns guide.
//!
//! Owns which section, example, and framework variant are currently
//! shown, and keeps that state consistent across transitions. Rendering,
//! clipboard access, and syntax highlighting live behind traits so the
//! whole state machine is testable without a UI.

pub mod controller;
pub mod error;
pub mod state;
pub mod view_model;

pub use controller::{
    ClipboardSink, CopyTarget, Highlighter, ViewController, COPY_ACK_REVERT_AFTER,
};
pub use error::{ClipboardError, ViewError};
pub use state::ViewState;
pub use view_model::{
    BodyView, CardView, CodePanel, ExampleTab, ExampleView, FrameworkTab, NavItem, PageModel,
    SectionView, TopicPanel, COPIED_LABEL, COPY_LABEL,
};

#[cfg(test)]
mod tests;
