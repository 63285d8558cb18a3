//! fetchpane - terminal host for the fetch panel
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - actor mounting the panel and relaying its renders
//! - Network Layer (Tokio) - the panel's one async GET

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use fetchpane::constants::{APP_NAME, APP_VERSION};
use fetchpane::messages::{key_to_action, KeyAction, RenderState, UiEvent};
use fetchpane::ui::render_panel;
use fetchpane::{AppActor, Config, FetchPanel};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", "fetchpane.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let config = Config::load();
    tracing::info!(version = APP_VERSION, endpoint = %config.endpoint, "Starting {}", APP_NAME);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _terminal_guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn app actor
    let app_actor = AppActor::new(FetchPanel::new(config), render_tx);
    let app_handle = tokio::spawn(app_actor.run(ui_rx));

    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    let _ = app_handle.await;
    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();
    let mut scroll: u16 = 0;

    loop {
        terminal.draw(|f| draw_ui(f, &current_state, scroll))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                match key_to_action(key) {
                    Some(KeyAction::ScrollUp) => scroll = scroll.saturating_sub(1),
                    Some(KeyAction::ScrollDown) => scroll = scroll.saturating_add(1),
                    Some(KeyAction::App(event)) => {
                        let _ = ui_tx.send(event);
                        if event == UiEvent::Quit {
                            break;
                        }
                    }
                    None => {}
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            if !state.supersedes(&current_state) {
                continue;
            }
            if state.generation != current_state.generation {
                scroll = 0;
            }
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState, scroll: u16) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(0),    // Panel
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    draw_title_bar(f, state, chunks[0]);
    f.render_widget(render_panel(state, scroll), chunks[1]);
    draw_status_bar(f, state, chunks[2]);
}

fn draw_title_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", APP_NAME),
            Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        ),
        Span::raw(" GET "),
        Span::styled(state.endpoint.clone(), Style::default().fg(Color::Green)),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let (label, color) = if state.mounted {
        ("mounted", Color::Green)
    } else {
        ("unmounted", Color::DarkGray)
    };

    let status = Line::from(vec![
        Span::styled(format!(" #{} {} ", state.generation, label), Style::default().fg(color)),
        Span::styled(
            "| r: reload  m: mount/unmount  j/k: scroll  q: quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(status), area);
}
