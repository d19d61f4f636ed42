pub mod app;
pub mod calendar_window;
pub mod context;
pub mod sidebar;

pub use app::App;
pub use calendar_window::{MonthPane, QuarterHeader};
pub use context::{Context, Theme};
pub use sidebar::{DetailPane, LegendPane, UpcomingPane};
