//! Keybreach - Entry Point
//!
//! Initializes logging and the terminal, then runs the main loop.

use std::fs::{File, OpenOptions};
use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use keybreach::ui::App;
use keybreach::{Game, GameConfig};

fn main() -> Result<()> {
    let (config, config_error) = match GameConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (GameConfig::default(), Some(e)),
    };
    init_logging(&config)?;

    log::info!("Starting Keybreach v{}", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        log::warn!("{}. Using default config.", e);
    }
    log::debug!("Config: {:?}", config);
    if let Some(seed) = config.seed {
        log::info!("Using fixed seed {}", seed);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let mut game = Game::with_seed(config.seed);
    let frame_time = Duration::from_millis(1000 / config.target_fps);

    let result = run_game_loop(&mut terminal, &mut app, &mut game, frame_time);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("Game exited with error: {}", e);
        eprintln!("Error: {}", e);
    }

    log::info!("Keybreach shut down cleanly");
    result
}

/// Log to a file so output does not interfere with the TUI
fn init_logging(config: &GameConfig) -> Result<()> {
    let log_file: File = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&config.log_file)
        .with_context(|| format!("opening log file {}", config.log_file))?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .target(env_logger::Target::Pipe(Box::new(log_file)))
    .init();
    Ok(())
}

/// Main game loop
fn run_game_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    game: &mut Game,
    frame_time: Duration,
) -> Result<()> {
    loop {
        let frame_start = Instant::now();

        terminal.draw(|frame| {
            app.render(frame, game);
        })?;

        // Wait for input until the next frame is due
        let timeout = frame_time.saturating_sub(frame_start.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events, not releases
                if key.kind == KeyEventKind::Press {
                    match app.handle_input(key, game) {
                        Ok(true) => break,
                        Ok(false) => {}
                        Err(e) => log::warn!("Input handling error: {}", e),
                    }
                }
            }
        }
    }

    Ok(())
}
