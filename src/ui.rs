use crate::assets::{Assets, Sprite};
use crate::consts::{COLUMNS_PER_CELL, DARK_GREEN, GREEN, TITLE};
use crate::game::{Game, GameState};
use crate::grid::{Cell, Direction, Geometry};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Widget},
    Frame,
};

const INK: Style = Style::new().fg(DARK_GREEN).bg(GREEN);

impl<R> Game<R> {
    /// Renders the current state. Reads only.
    pub(crate) fn draw(&self, frame: &mut Frame, assets: &Assets) {
        let area = frame.area();
        frame.render_widget(Block::default().style(INK), area);

        let geometry = self.geometry();
        let board_width = geometry.board_size() * COLUMNS_PER_CELL + 2;
        let board_height = geometry.board_size() + 2;
        let outer = centered(area, board_width, board_height + 2);

        let header = Rect { height: outer.height.min(1), ..outer };
        let title = INK.add_modifier(Modifier::BOLD);
        frame.render_widget(Line::styled(TITLE, title).left_aligned(), header);
        frame.render_widget(
            Line::styled(format!("Score: {}", self.score()), title).right_aligned(),
            header,
        );

        let board = Rect {
            y: outer.y + 2,
            height: outer.height.saturating_sub(2),
            ..outer
        }
        .intersection(area);
        frame.render_widget(
            Board {
                game: self,
                assets,
                geometry,
            },
            board,
        );
    }

    fn geometry(&self) -> Geometry {
        Geometry {
            grid: self.grid(),
            cell_size: 1,
            offset: 0,
        }
    }
}

struct Board<'a, R> {
    game: &'a Game<R>,
    assets: &'a Assets,
    geometry: Geometry,
}

impl<R> Widget for Board<'_, R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .style(INK);
        let inner = block.inner(area);
        block.render(area, buf);

        match self.game.state() {
            GameState::Start => message(inner, buf, None, "Press Enter to Start"),
            GameState::Running => {
                self.render_snake(inner, buf);
                self.render_cell(inner, buf, self.game.food().position, Sprite::Food);
            }
            GameState::Paused => message(inner, buf, Some("Paused"), "Press ESC to Resume"),
            GameState::Stopped => message(inner, buf, Some("Game Over"), "Press R to Restart"),
        }
    }
}

impl<R> Board<'_, R> {
    fn render_snake(&self, inner: Rect, buf: &mut Buffer) {
        let snake = self.game.snake();
        let body = snake.body();
        for (i, &cell) in body.iter().enumerate() {
            let sprite = if i == 0 {
                Sprite::Head(snake.direction())
            } else if i == body.len() - 1 {
                Sprite::Tail(Direction::between(cell, body[i - 1]).unwrap_or(snake.direction()))
            } else {
                Sprite::Body
            };
            self.render_cell(inner, buf, cell, sprite);
        }
    }

    fn render_cell(&self, inner: Rect, buf: &mut Buffer, cell: Cell, sprite: Sprite) {
        let (Some(rect), Some(glyph)) = (self.geometry.cell_rect(cell), self.assets.sprite(sprite))
        else {
            return;
        };
        let x = inner.x + rect.x * COLUMNS_PER_CELL;
        let y = inner.y + rect.y;
        for (dx, symbol) in [glyph.left, glyph.right].into_iter().enumerate() {
            let pos = Position::new(x + dx as u16, y);
            if !inner.contains(pos) {
                continue;
            }
            if let Some(c) = buf.cell_mut(pos) {
                c.set_symbol(symbol).set_style(glyph.style);
            }
        }
    }
}

/// Centred headline (if any) with a hint line beneath it.
fn message(area: Rect, buf: &mut Buffer, headline: Option<&str>, hint: &str) {
    let mid = area.y + area.height / 2;
    if let Some(headline) = headline {
        let row = Rect {
            y: mid.saturating_sub(2),
            height: 1,
            ..area
        };
        Line::styled(headline, INK.add_modifier(Modifier::BOLD))
            .centered()
            .render(row.intersection(area), buf);
    }
    let row = Rect {
        y: mid,
        height: 1,
        ..area
    };
    Line::styled(hint, INK).centered().render(row.intersection(area), buf);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height).intersection(area)
}
