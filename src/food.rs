use log::warn;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::{Pos, Size};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FoodStatus {
    pub location: Pos,
    pub point: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    pos: Pos,
    point: u32,
}

impl From<Food> for Pos {
    fn from(food: Food) -> Self {
        food.pos
    }
}

impl Food {
    pub fn new(pos: Pos, point: u32) -> Self {
        Food { pos, point }
    }

    pub fn position(&self) -> Pos {
        self.pos
    }

    pub fn point(&self) -> u32 {
        self.point
    }

    pub fn status(&self) -> FoodStatus {
        FoodStatus {
            location: self.pos,
            point: self.point,
        }
    }

    /// Moves to a uniformly chosen free cell. Stays put if every cell is occupied.
    pub fn relocate(
        &mut self,
        grid: Size,
        is_occupied: impl Fn(Pos) -> bool,
        rng: &mut impl Rng,
    ) -> bool {
        let free: Vec<Pos> = grid.cells().filter(|&pos| !is_occupied(pos)).collect();

        match free.choose(rng) {
            Some(&pos) => {
                self.pos = pos;
                true
            }
            None => {
                warn!("No free cell left for food, leaving it at {}", self.pos);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_status() {
        let food = Food::new(Pos::new(5, 5), 1);
        assert_eq!(
            food.status(),
            FoodStatus {
                location: Pos::new(5, 5),
                point: 1
            }
        );
        assert_eq!(Pos::from(food), Pos::new(5, 5));
    }

    #[test]
    fn test_relocate_stays_in_bounds() {
        let grid = Size {
            width: 100,
            height: 60,
        };
        let mut rng = StdRng::seed_from_u64(7);
        let mut food = Food::new(Pos::new(5, 5), 1);

        for _ in 0..500 {
            assert!(food.relocate(grid, |_| false, &mut rng));
            assert!(grid.contains(food.position()), "food at {}", food.position());
        }
        assert_eq!(food.point(), 1);
    }

    #[test]
    fn test_relocate_avoids_occupied() {
        let grid = Size {
            width: 4,
            height: 3,
        };
        let mut rng = StdRng::seed_from_u64(42);
        let mut food = Food::new(Pos::new(0, 0), 1);
        let only_free = Pos::new(2, 1);

        for _ in 0..20 {
            assert!(food.relocate(grid, |pos| pos != only_free, &mut rng));
            assert_eq!(food.position(), only_free);
        }
    }

    #[test]
    fn test_relocate_full_grid() {
        let grid = Size {
            width: 2,
            height: 2,
        };
        let mut rng = StdRng::seed_from_u64(1);
        let mut food = Food::new(Pos::new(1, 1), 3);

        assert!(!food.relocate(grid, |_| true, &mut rng));
        assert_eq!(food.position(), Pos::new(1, 1));
    }
}
