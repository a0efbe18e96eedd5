use std::collections::HashMap;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    widgets::Widget,
};

use crate::game::Game;
use crate::grid::{Pos, Size};
use crate::snake::Species;

const UPPER_HALF: &str = "▀";
const LOWER_HALF: &str = "▄";
const FOOD_COLOR: Color = Color::LightRed;

fn species_color(species: Species) -> Color {
    match species {
        Species::Snake => Color::Green,
        Species::Ghost => Color::Magenta,
    }
}

/// Terminal cells needed to show the whole grid: two grid rows per line.
pub fn board_extent(grid: Size) -> (u16, u16) {
    (grid.width, grid.height.div_ceil(2))
}

impl Widget for &Game {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut paint: HashMap<Pos, Color> = HashMap::new();
        paint.insert(self.food_status().location, FOOD_COLOR);

        // Player last so it is drawn over the ghost
        for status in [self.ghost_snake_status(), self.snake_status()] {
            let color = species_color(status.species);
            for pos in status.location {
                paint.insert(pos, color);
            }
        }

        let (cols, lines) = board_extent(self.grid());
        for line in 0..lines.min(area.height) {
            for col in 0..cols.min(area.width) {
                let top = paint.get(&Pos::new(col as i32, 2 * line as i32));
                let bottom = paint.get(&Pos::new(col as i32, 2 * line as i32 + 1));

                let cell = &mut buf[(area.x + col, area.y + line)];
                match (top, bottom) {
                    (Some(&top), Some(&bottom)) => {
                        cell.set_symbol(UPPER_HALF).set_fg(top).set_bg(bottom);
                    }
                    (Some(&top), None) => {
                        cell.set_symbol(UPPER_HALF).set_fg(top);
                    }
                    (None, Some(&bottom)) => {
                        cell.set_symbol(LOWER_HALF).set_fg(bottom);
                    }
                    (None, None) => {}
                }
            }
        }
    }
}
