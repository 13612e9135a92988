//! CLI output formatting
//!
//! Renders a generated series as a colored terminal dashboard or as JSON.

pub mod display;
pub mod export;

pub use display::Dashboard;
pub use export::RunReport;
