//! UI layer for the desktop app: app shell, panels, and theme colors.

pub mod app;
pub mod panels;
pub mod theme;

pub use app::SplitBillApp;
