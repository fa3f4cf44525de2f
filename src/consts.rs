//! Hard-coded configuration
use ratatui::style::Color;
use std::time::Duration;

pub(crate) const TITLE: &str = "Retro Snake";

/// Log output, written to the working directory
pub(crate) const LOG_FILE: &str = "retro_snake.log";

/// Side length of the square playing grid, in cells
pub(crate) const GRID_CELLS: i32 = 25;

/// Time between simulation steps
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Render budget per frame (~60 fps)
pub(crate) const FRAME_PERIOD: Duration = Duration::from_millis(16);

/// Terminal columns used to draw a single grid cell
pub(crate) const COLUMNS_PER_CELL: u16 = 2;

pub(crate) const GREEN: Color = Color::Rgb(173, 204, 96);
pub(crate) const DARK_GREEN: Color = Color::Rgb(43, 51, 24);
pub(crate) const FOOD_RED: Color = Color::Rgb(196, 58, 40);
