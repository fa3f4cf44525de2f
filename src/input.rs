use crate::game::Game;
use crate::grid::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Confirm,
    Restart,
    Pause,
    Turn(Direction),
    Quit,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        if ev.kind != KeyEventKind::Press {
            return None;
        }
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (_, KeyCode::Char('q')) => Some(Command::Quit),
            (_, KeyCode::Enter) => Some(Command::Confirm),
            (_, KeyCode::Char('r') | KeyCode::Char('R')) => Some(Command::Restart),
            (_, KeyCode::Esc) => Some(Command::Pause),
            (_, KeyCode::Up | KeyCode::Char('w')) => Some(Command::Turn(Direction::North)),
            (_, KeyCode::Down | KeyCode::Char('s')) => Some(Command::Turn(Direction::South)),
            (_, KeyCode::Left | KeyCode::Char('a')) => Some(Command::Turn(Direction::West)),
            (_, KeyCode::Right | KeyCode::Char('d')) => Some(Command::Turn(Direction::East)),
            _ => None,
        }
    }
}

impl<R: Rng> Game<R> {
    /// Applies one input command. Each transition ignores the states it
    /// does not apply to; quitting is left to the caller.
    pub(crate) fn handle_command(&mut self, command: Command) {
        match command {
            Command::Restart => self.reset(),
            Command::Confirm => self.start(),
            Command::Pause => self.toggle_pause(),
            Command::Turn(direction) => self.steer(direction),
            Command::Quit => {}
        }
    }
}
