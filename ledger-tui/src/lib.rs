mod app;
pub mod app_core;
pub mod commands;
pub mod events;
pub mod input;
pub mod logging;
pub mod settings;
pub mod state;
pub mod ui;

pub use app::App;

// Always expose testing module (integration tests need it)
pub mod testing;

/// Chart used when no `chart_path` is configured
pub const SAMPLE_CHART: &str = include_str!("../data/sample_chart.json");
