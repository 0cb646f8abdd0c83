//! A terminal portfolio with a scroll-driven stacked card showcase.
//!
//! Run the binary to open the page.  Scroll with the keyboard or mouse wheel;
//! press `c` to write a message and `?` for the controls.

mod app;
mod config;
mod core;
mod ui;

use std::fs::File;
use std::io::stderr;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, widgets::Paragraph, Terminal};
use tokio::time::{interval, MissedTickBehavior};

use crate::app::{
    contact_runtime::{spawn_submit, ContactOutcome},
    event::{spawn_event_reader, AppEvent},
    handler,
    state::{ActiveView, AppState},
};
use crate::config::AppConfig;
use crate::core::{content::CONTENT, page::Section, relay::Relay};
use crate::ui::{layout::AppLayout, nav::NavBar, page::PageView, popup::HelpPopup, theme::Theme};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Terminal portfolio with a stacked project showcase")]
struct Cli {
    /// Section to open at (home, about, projects, skills, certifications, blog, contact).
    #[arg(long, value_parser = parse_section)]
    section: Option<Section>,

    /// Frames per second.
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=120))]
    fps: u32,

    /// Disable reveal, counter and orbit animations and smooth scrolling.
    #[arg(long)]
    no_animations: bool,

    /// Write logs to this file (filtered by `RUST_LOG`).
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Read settings from this file instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective settings to the config file and exit.
    #[arg(long)]
    write_config: bool,
}

fn parse_section(name: &str) -> Result<Section, String> {
    Section::from_name(name).ok_or_else(|| format!("unknown section `{name}`"))
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The TUI owns the terminal, so logs only ever go to a file.
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config_path = cli.config.clone().unwrap_or_else(config::config_path);
    let mut user_config = AppConfig::load_from(&config_path, CONTENT.contact.email);
    if cli.no_animations {
        user_config.animations = false;
    }
    if cli.write_config {
        user_config.save_to(&config_path)?;
        println!("wrote {}", config_path.display());
        return Ok(());
    }

    let relay = Relay::from_config(&user_config.relay).context("cannot build email relay")?;
    tracing::info!(simulated = relay.is_simulated(), "relay ready");

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let screen = ratatui::layout::Rect::new(0, 0, size.width, size.height);
    let mut state = AppState::new(&CONTENT, user_config, screen);
    if let Some(section) = cli.section {
        state.jump_to(section);
        state.scroll.jump();
    }

    let result = run(&mut terminal, &mut state, relay, cli.fps).await;

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stderr>>,
    state: &mut AppState,
    relay: Relay,
    fps: u32,
) -> Result<()> {
    let mut events = spawn_event_reader();
    let frame_time = Duration::from_secs(1) / fps;
    let mut frames = interval(frame_time);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let (contact_tx, mut contact_rx) = tokio::sync::mpsc::unbounded_channel::<ContactOutcome>();
    let mut last_frame = tokio::time::Instant::now();

    loop {
        let view: &AppState = state;
        terminal.draw(|frame| {
            let layout = AppLayout::from_area(frame.area());

            frame.render_widget(
                NavBar {
                    monogram: view.content.monogram,
                    current: view.current_section(),
                },
                layout.nav_area,
            );
            frame.render_widget(PageView { state: view }, layout.page_area);

            let hint = view.config.status_bar_hint();
            let status_text = match view.active_view {
                ActiveView::Page => hint.as_str(),
                ActiveView::Contact => "Tab: next field | Enter on message / Ctrl+s: send | Esc: back",
                ActiveView::Help => "",
            };
            let status = Paragraph::new(status_text).style(Theme::status_bar_style());
            frame.render_widget(status, layout.status_area);

            if view.active_view == ActiveView::Help {
                frame.render_widget(HelpPopup { config: &view.config }, frame.area());
            }
        })?;

        // ── hand a validated message to the relay AFTER draw ──────
        if let Some(payload) = state.outbox.take() {
            spawn_submit(contact_tx.clone(), relay.clone(), payload);
        }

        tokio::select! {
            biased;

            Some(event) = events.recv() => {
                match event {
                    AppEvent::Key(k) => handler::handle_key(state, k),
                    AppEvent::Mouse(m) => handler::handle_mouse(state, m),
                    AppEvent::Resize(w, h) => state.resize(w, h),
                }
            }

            Some(outcome) = contact_rx.recv() => {
                state.finish_contact(outcome);
            }

            now = frames.tick() => {
                state.advance(now - last_frame);
                last_frame = now;
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
