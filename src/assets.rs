//! Glyphs used to draw the board, loaded once at startup.
use crate::consts::{DARK_GREEN, FOOD_RED, GREEN};
use crate::grid::Direction;
use ratatui::style::{Modifier, Style};
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Sprite {
    /// Points the way the snake is moving
    Head(Direction),
    /// Points from the tail towards the rest of the body
    Tail(Direction),
    Body,
    Food,
}

/// What one grid cell looks like: a symbol for each of its two columns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Glyph {
    pub(crate) left: &'static str,
    pub(crate) right: &'static str,
    pub(crate) style: Style,
}

impl Glyph {
    const fn new(left: &'static str, right: &'static str, style: Style) -> Self {
        Glyph { left, right, style }
    }
}

#[derive(Debug)]
pub(crate) struct Assets {
    sprites: HashMap<Sprite, Glyph>,
}

impl Assets {
    pub(crate) fn load() -> Self {
        let snake = Style::new().fg(DARK_GREEN).bg(GREEN);
        let head = snake.add_modifier(Modifier::BOLD);
        let food = Style::new().fg(FOOD_RED).bg(GREEN);

        let sprites = HashMap::from([
            (Sprite::Head(Direction::North), Glyph::new("▟", "▙", head)),
            (Sprite::Head(Direction::South), Glyph::new("▜", "▛", head)),
            (Sprite::Head(Direction::East), Glyph::new("█", "▶", head)),
            (Sprite::Head(Direction::West), Glyph::new("◀", "█", head)),
            (Sprite::Tail(Direction::North), Glyph::new("▗", "▖", snake)),
            (Sprite::Tail(Direction::South), Glyph::new("▝", "▘", snake)),
            (Sprite::Tail(Direction::East), Glyph::new("▕", "█", snake)),
            (Sprite::Tail(Direction::West), Glyph::new("█", "▏", snake)),
            (Sprite::Body, Glyph::new("█", "█", snake)),
            (Sprite::Food, Glyph::new("◖", "◗", food)),
        ]);
        log::info!("Loaded {} sprites", sprites.len());
        Assets { sprites }
    }

    pub(crate) fn sprite(&self, sprite: Sprite) -> Option<&Glyph> {
        self.sprites.get(&sprite)
    }
}
