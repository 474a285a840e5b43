mod app;

pub use app::GuideApp;
