use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GameConfig;
use crate::food::{Food, FoodStatus};
use crate::grid::Size;
use crate::score::ScoreCard;
use crate::snake::{Snake, SnakeStatus, Species};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    Ongoing,     // Both snakes moved, nothing eaten
    Nommed(u32), // Player ate, with the points scored
    Over,        // Player is dead; nothing moved if it already was
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverReason {
    HitItself,
    HitGhost,
    LeftGrid,
}

/// One play session: the player, the ghost, the food and the score.
#[derive(Debug)]
pub struct Game {
    grid: Size,
    snake: Snake,
    ghost: Snake,
    food: Food,
    score_card: ScoreCard,
    rng: StdRng,
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let snake = Snake::new(
            &config.player.body,
            config.player.heading,
            Species::Snake,
            config.player.policy,
        );
        let ghost = Snake::new(
            &config.ghost.body,
            config.ghost.heading,
            Species::Ghost,
            config.ghost.policy,
        );

        Self::from_parts(
            snake,
            ghost,
            Food::new(config.food, config.food_point),
            config.grid,
            rng,
        )
    }

    pub fn from_parts(snake: Snake, ghost: Snake, food: Food, grid: Size, rng: StdRng) -> Self {
        Game {
            grid,
            snake,
            ghost,
            food,
            score_card: ScoreCard::new(),
            rng,
        }
    }

    pub fn grid(&self) -> Size {
        self.grid
    }

    pub fn snake_status(&self) -> SnakeStatus {
        self.snake.status()
    }

    pub fn ghost_snake_status(&self) -> SnakeStatus {
        self.ghost.status()
    }

    pub fn food_status(&self) -> FoodStatus {
        self.food.status()
    }

    pub fn score(&self) -> u32 {
        self.score_card.score()
    }

    pub fn update(&mut self) -> StepResult {
        if self.is_over() {
            return StepResult::Over;
        }

        self.snake.advance(self.grid);
        self.ghost.advance(self.grid);

        let result = if self.snake.has_eaten(&self.food) {
            let points = self.food.point();
            self.snake.increase();
            self.score_card.update(points);
            self.generate_food();
            info!(
                "Nommed {} point(s), score {}, food now at {}",
                points,
                self.score(),
                self.food.position()
            );
            StepResult::Nommed(points)
        } else {
            StepResult::Ongoing
        };

        match self.over_reason() {
            Some(reason) => {
                info!("Game over: {:?} with score {}", reason, self.score());
                StepResult::Over
            }
            None => result,
        }
    }

    fn generate_food(&mut self) {
        let (snake, ghost) = (&self.snake, &self.ghost);
        self.food.relocate(
            self.grid,
            |pos| snake.occupies(pos) || ghost.occupies(pos),
            &mut self.rng,
        );
    }

    pub fn is_over(&self) -> bool {
        self.over_reason().is_some()
    }

    pub fn over_reason(&self) -> Option<OverReason> {
        if self.snake.has_touched_itself() {
            Some(OverReason::HitItself)
        } else if self.snake.has_touched(&self.ghost) {
            Some(OverReason::HitGhost)
        } else if self.snake.has_crossed(self.grid) {
            Some(OverReason::LeftGrid)
        } else {
            None
        }
    }

    pub fn turn_snake_left(&mut self) {
        if !self.is_over() {
            self.snake.turn_left();
        }
    }

    pub fn turn_ghost_snake_left(&mut self) {
        if !self.is_over() {
            debug!("Ghost turns left at {}", self.ghost.head());
            self.ghost.turn_left();
        }
    }

    /// Session-owned randomness, shared with the ghost's turn decision.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}
