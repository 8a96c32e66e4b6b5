mod app;
mod theme;
mod views;

pub use app::ScheduleApp;
pub use theme::{setup_fonts, setup_theme};
