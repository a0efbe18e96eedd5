use std::time::Duration;

use crate::direction::Direction;
use crate::grid::{Pos, Size};
use crate::snake::BoundaryPolicy;

/// Starting layout of one snake, tail first.
#[derive(Clone, Debug, PartialEq)]
pub struct SnakeConfig {
    pub body: Vec<Pos>,
    pub heading: Direction,
    pub policy: BoundaryPolicy,
}

/// Every constant a session needs.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub grid: Size,
    pub player: SnakeConfig,
    pub ghost: SnakeConfig,
    pub food: Pos,
    pub food_point: u32,
    /// Period of the simulation tick.
    pub tick_rate: Duration,
    /// Period of the ghost's turn decision.
    pub ghost_turn_rate: Duration,
    /// Chance the ghost turns left on each of its ticks.
    pub ghost_turn_chance: f64,
    /// Fixed seed for food placement and ghost turns; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid: Size {
                width: 100,
                height: 60,
            },
            player: SnakeConfig {
                body: vec![Pos::new(40, 25), Pos::new(41, 25), Pos::new(42, 25)],
                heading: Direction::East,
                policy: BoundaryPolicy::Terminate,
            },
            ghost: SnakeConfig {
                body: vec![Pos::new(40, 30), Pos::new(41, 30), Pos::new(42, 30)],
                heading: Direction::South,
                policy: BoundaryPolicy::Wrap,
            },
            food: Pos::new(5, 5),
            food_point: 1,
            tick_rate: Duration::from_millis(100),
            ghost_turn_rate: Duration::from_millis(300),
            ghost_turn_chance: 0.5,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_seed(seed: u64) -> Self {
        GameConfig {
            seed: Some(seed),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid.width, 100);
        assert_eq!(config.grid.height, 60);
        assert_eq!(config.player.body.len(), 3);
        assert_eq!(config.player.body.last(), Some(&Pos::new(42, 25)));
        assert_eq!(config.ghost.heading, Direction::South);
        assert_eq!(config.ghost.policy, BoundaryPolicy::Wrap);
        assert_eq!(config.player.policy, BoundaryPolicy::Terminate);
        assert_eq!(config.food_point, 1);
        assert!(config.tick_rate < config.ghost_turn_rate);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_starting_cells_are_on_the_grid() {
        let config = GameConfig::default();
        let cells = config.player.body.iter().chain(&config.ghost.body);
        for &pos in cells {
            assert!(config.grid.contains(pos), "{} off grid", pos);
        }
        assert!(config.grid.contains(config.food));
    }

    #[test]
    fn test_with_seed() {
        let config = GameConfig::with_seed(9);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.grid, GameConfig::default().grid);
    }
}
