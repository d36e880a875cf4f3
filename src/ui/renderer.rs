//! Terminal setup and the main UI loop

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::time::Duration;

use super::app::App;
use super::core::{Component, EventHandler};
use crate::config::Config;

/// Run the main TUI application
pub async fn run_app(config: Config) -> Result<()> {
    // Build the form before touching the terminal so config errors print normally
    let mut app = App::new(&config.ui, &config.form)?;

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if config.ui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut events = EventHandler::with_tick_rate(Duration::from_millis(config.ui.tick_rate_ms));

    // Main application loop
    let res = run_ui(&mut terminal, &mut app, &mut events).await;

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    res
}

/// Main UI loop
async fn run_ui(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<()> {
    loop {
        if events.should_render() {
            terminal.draw(|f| {
                let area = f.area();
                app.render(f, area);
            })?;
            events.mark_rendered();
        }

        let event = events.next_event().await?;
        events.record(&event);
        app.handle_event(event);

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
