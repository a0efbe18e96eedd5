use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ghostsnek::{app::App, config::GameConfig, ticker::Ticker};
use log::{error, info};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::io;
use std::time::Instant;

fn main() -> Result<(), io::Error> {
    // Log to a file; stdout belongs to the alternate screen
    WriteLogger::init(
        LevelFilter::Info,
        Config::default(),
        File::create("ghostsnek.log")?,
    )
    .map_err(io::Error::other)?;

    info!("Starting ghostsnek");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, App::new(GameConfig::default()));

    // Cleanup terminal, even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match &result {
        Ok(()) => info!("Exiting ghostsnek"),
        Err(e) => error!("Exiting ghostsnek after error: {}", e),
    }
    result
}

fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> io::Result<()> {
    let mut tick = Ticker::new(app.config().tick_rate);
    let mut ghost_tick = Ticker::new(app.config().ghost_turn_rate);

    while !app.is_exiting() {
        terminal.draw(|f| app.render(f))?;

        let now = Instant::now();
        let timeout = tick.remaining(now).min(ghost_tick.remaining(now));
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        let now = Instant::now();
        if tick.poll(now) {
            app.on_tick();
        }
        if ghost_tick.poll(now) {
            app.on_ghost_tick();
        }
    }

    Ok(())
}
