use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use log::{info, warn};
use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::config::GameConfig;
use crate::game::{Game, StepResult};
use crate::render::board_extent;

#[derive(Debug)]
pub enum Screen {
    Playing(Game),
    GameOver { game: Game, final_score: u32 },
    Exit,
}

/// Terminal session: owns the current game and reacts to keys and ticks.
pub struct App {
    config: GameConfig,
    pub screen: Screen,
    warned_clipped: bool,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        info!("New game on a {}x{} grid", config.grid.width, config.grid.height);
        let game = Game::new(&config);
        App {
            config,
            screen: Screen::Playing(game),
            warned_clipped: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn game(&self) -> Option<&Game> {
        match &self.screen {
            Screen::Playing(game) | Screen::GameOver { game, .. } => Some(game),
            Screen::Exit => None,
        }
    }

    pub fn is_exiting(&self) -> bool {
        matches!(self.screen, Screen::Exit)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let new_screen = match &mut self.screen {
            _ if key.code == KeyCode::Esc => Some(Screen::Exit),
            Screen::Playing(game) => {
                game.turn_snake_left();
                None
            }
            Screen::GameOver { .. } => match key.code {
                KeyCode::Char(' ') => {
                    info!("Starting a new game");
                    Some(Screen::Playing(Game::new(&self.config)))
                }
                KeyCode::Char('q') => Some(Screen::Exit),
                _ => None,
            },
            Screen::Exit => None,
        };

        if let Some(new_screen) = new_screen {
            self.screen = new_screen;
        }
    }

    /// Simulation tick.
    pub fn on_tick(&mut self) {
        if let Screen::Playing(game) = &mut self.screen {
            if game.update() == StepResult::Over {
                let final_score = game.score();
                self.screen = match std::mem::replace(&mut self.screen, Screen::Exit) {
                    Screen::Playing(game) => Screen::GameOver { game, final_score },
                    other => other,
                };
            }
        }
    }

    /// Ghost tick: a coin toss decides whether the ghost turns left.
    pub fn on_ghost_tick(&mut self) {
        let chance = self.config.ghost_turn_chance.clamp(0.0, 1.0);
        if let Screen::Playing(game) = &mut self.screen {
            if game.rng().gen_bool(chance) {
                game.turn_ghost_snake_left();
            }
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let [header, board] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(frame.area());

        let score_text = match self.game() {
            Some(game) => format!("GHOSTSNEK    Score: {}", game.score()),
            None => "GHOSTSNEK".to_string(),
        };
        frame.render_widget(
            Paragraph::new(score_text)
                .alignment(Alignment::Left)
                .block(Block::default().borders(Borders::ALL)),
            header,
        );

        let title = match &self.screen {
            Screen::Playing(_) => "Playing",
            _ => "",
        };
        let block = Block::default().title(title).borders(Borders::ALL);
        let inner_area = block.inner(board);
        self.warn_if_clipped(inner_area);

        match &self.screen {
            Screen::Playing(game) => {
                frame.render_widget(block, board);
                frame.render_widget(game, inner_area);
            }
            Screen::GameOver { game, final_score } => {
                frame.render_widget(block, board);
                frame.render_widget(game, inner_area);
                frame.render_widget(
                    Paragraph::new(format!(
                        "GAME OVER\nFinal Score: {}\nPress SPACE to play again, q to quit",
                        final_score
                    ))
                    .alignment(Alignment::Center),
                    inner_area,
                );
            }
            Screen::Exit => {}
        }
    }

    fn warn_if_clipped(&mut self, inner_area: Rect) {
        let Some((cols, lines)) = self.game().map(|game| board_extent(game.grid())) else {
            return;
        };
        if !self.warned_clipped && (inner_area.width < cols || inner_area.height < lines) {
            warn!(
                "Terminal board area {}x{} is smaller than the {}x{} needed, clipping",
                inner_area.width, inner_area.height, cols, lines
            );
            self.warned_clipped = true;
        }
    }
}
