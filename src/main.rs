use std::io;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::{error, info};
use tui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use pm_dash::config::{self, Mode};
use pm_dash::ui::{handle_input, render_dashboard, AppState, DashboardAction};
use pm_dash::{data, export, logging, DashboardState};

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::init()?;
    logging::init(&config.log_file)?;
    info!(?config, "starting pm-dash");

    let records = data::load_records(&config.data_path, config.row_limit).await?;
    let dashboard = DashboardState::new(records);

    match config.mode {
        Mode::Summary => {
            print!("{}", export::summary_text(dashboard.overview()));
            return Ok(());
        }
        Mode::Export(path) => {
            export::write_json(&dashboard, &path)?;
            println!("Chart descriptions written to {}", path.display());
            return Ok(());
        }
        Mode::Interactive => {}
    }

    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = AppState::new(dashboard);
    let result = run_app(&mut terminal, &mut app_state);

    // Restore terminal
    terminal::disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        error!(%err, "dashboard exited with an error");
    }

    info!("pm-dash stopped");
    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app_state: &mut AppState) -> Result<()> {
    loop {
        terminal.draw(|f| render_dashboard(f, app_state))?;

        match handle_input(app_state)? {
            Some(DashboardAction::Quit) => break,
            None => {}
        }
    }

    Ok(())
}
