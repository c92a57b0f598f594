use anyhow::Result;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ledger_model::Chart;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app_core::{AppCore, ChangeHandler};
use crate::events::AccountChanged;
use crate::input::KeyEvent;
use crate::logging::init_logging;
use crate::settings::Settings;
use crate::state::AppState;

/// Logs every pick; this form has nowhere else to send it
struct LogChanges;

impl ChangeHandler for LogChanges {
    fn on_change(&mut self, change: &AccountChanged) {
        tracing::info!(
            input = %change.input_id,
            account_id = %change.account_id,
            "account changed"
        );
    }
}

pub struct App {
    settings: Settings,
    chart: Chart,
}

impl App {
    pub fn new(settings: Settings, chart: Chart) -> Self {
        Self { settings, chart }
    }

    pub async fn run(self) -> Result<()> {
        let log_path = init_logging(&self.settings.log_level)?;

        tracing::info!(log = %log_path.display(), "ledger-tui starting");
        tracing::info!(
            accounts = self.chart.accounts.len(),
            account_types = self.chart.account_types.len(),
            "chart loaded"
        );
        for warning in self.chart.warnings() {
            tracing::warn!("{}", warning);
        }

        let mut terminal = Self::init()?;
        let size = terminal.size()?;

        let mut core = AppCore::new(AppState::new(self.chart, &self.settings), LogChanges);
        core.handle_resize(size.width, size.height);

        let mut event_stream = EventStream::new();

        tracing::info!("Entering main event loop");

        let mut interval = tokio::time::interval(std::time::Duration::from_millis(100));
        loop {
            terminal.draw(|f| {
                crate::ui::render_app(f, core.state());
            })?;

            tokio::select! {
                _ = interval.tick() => {
                    core.settle();
                }
                Some(Ok(event)) = event_stream.next() => {
                    match event {
                        Event::Key(key) if matches!(key.kind, KeyEventKind::Press) => {
                            tracing::trace!("Key press: {:?}", key);
                            core.handle_key(KeyEvent::from(key));
                        }
                        Event::Mouse(mouse)
                            if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) =>
                        {
                            tracing::trace!(column = mouse.column, row = mouse.row, "Mouse press");
                            core.handle_click(mouse.column, mouse.row);
                        }
                        Event::Resize(width, height) => {
                            core.handle_resize(width, height);
                        }
                        _ => {
                            // Ignore other events
                        }
                    }
                }
            }

            // Check if we should quit
            if core.should_quit() {
                tracing::info!("Quit requested, exiting event loop");
                break;
            }
        }

        tracing::info!("Cleaning up application");

        Self::exit(terminal)?;

        Ok(())
    }

    fn init() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>, std::io::Error> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    fn exit(
        mut terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<(), std::io::Error> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }
}
