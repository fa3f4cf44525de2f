mod assets;
mod consts;
mod food;
mod game;
mod grid;
mod input;
mod snake;
mod ui;

use crate::assets::Assets;
use crate::game::{Game, Signal};
use crate::input::Command;
use crossterm::{
    event::{self, Event},
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, error, info};
use ratatui::{backend::CrosstermBackend, Terminal};
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::io::{self, Stdout};
use std::time::Instant;

fn main() -> Result<(), io::Error> {
    // Set up logging before anything else
    WriteLogger::init(
        LevelFilter::Info,
        Config::default(),
        File::create(consts::LOG_FILE)?,
    )
    .map_err(io::Error::other)?;

    info!("Starting {}", consts::TITLE);

    let assets = Assets::load();
    let mut game = Game::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut game, &assets);
    if let Err(e) = &result {
        error!("Game loop failed: {}", e);
    }

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("Exiting with score {}", game.score());
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    game: &mut Game,
    assets: &Assets,
) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| game.draw(f, assets))?;

        // Drain input in arrival order until the frame budget runs out
        let frame_start = Instant::now();
        let mut wait = consts::FRAME_PERIOD;
        while event::poll(wait)? {
            if let Event::Key(key) = event::read()? {
                match Command::from_key_event(key) {
                    Some(Command::Quit) => return Ok(()),
                    Some(command) => game.handle_command(command),
                    None => {}
                }
            }
            wait = consts::FRAME_PERIOD.saturating_sub(frame_start.elapsed());
        }

        if last_tick.elapsed() >= consts::TICK_PERIOD {
            game.update();
            last_tick = Instant::now();
        }

        for signal in game.take_signals() {
            play(terminal, signal)?;
        }
    }
}

fn play(terminal: &mut Terminal<CrosstermBackend<Stdout>>, signal: Signal) -> io::Result<()> {
    match signal {
        Signal::Eat => debug!("Signal: eat"),
        Signal::GameOver => {
            info!("Signal: game over");
            execute!(terminal.backend_mut(), Print('\u{7}'))?;
        }
    }
    Ok(())
}
