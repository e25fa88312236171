mod app;
pub mod fonts;
pub mod theme;
pub mod tiny_button;

pub use app::DemoApp;
pub use tiny_button::TinyButton;
