use anyhow::{anyhow, Context, Result};
use ledger_model::Chart;

use ledger_tui::settings::Settings;
use ledger_tui::{App, SAMPLE_CHART};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new().context("Failed to load settings")?;
    settings.validate().map_err(|e| anyhow!(e))?;

    let chart = match &settings.chart_path {
        Some(path) => Chart::load(path)?,
        None => Chart::from_json(SAMPLE_CHART).context("Bundled sample chart is invalid")?,
    };

    // Logging is initialized in App::run() so nothing is printed over the UI
    App::new(settings, chart).run().await?;

    Ok(())
}
