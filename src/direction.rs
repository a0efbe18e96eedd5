use crate::grid::PosDelta;

/// Heading of a snake. Discriminants give the turn-left order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    East = 0,
    North = 1,
    West = 2,
    South = 3,
}

impl Direction {
    const CYCLE: [Direction; 4] = [
        Direction::East,
        Direction::North,
        Direction::West,
        Direction::South,
    ];

    pub fn delta(&self) -> PosDelta {
        (*self).into()
    }

    /// East -> North -> West -> South -> East.
    pub fn turn_left(&mut self) {
        *self = Self::CYCLE[(*self as usize + 1) % Self::CYCLE.len()];
    }
}

impl From<Direction> for PosDelta {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::North => PosDelta { x: 0, y: -1 },
            Direction::South => PosDelta { x: 0, y: 1 },
            Direction::East => PosDelta { x: 1, y: 0 },
            Direction::West => PosDelta { x: -1, y: 0 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deltas() {
        assert_eq!(Direction::East.delta(), PosDelta { x: 1, y: 0 });
        assert_eq!(Direction::West.delta(), PosDelta { x: -1, y: 0 });
        assert_eq!(Direction::North.delta(), PosDelta { x: 0, y: -1 });
        assert_eq!(Direction::South.delta(), PosDelta { x: 0, y: 1 });
    }

    #[test]
    fn test_turn_left_cycle() {
        let mut dir = Direction::East;
        dir.turn_left();
        assert_eq!(dir, Direction::North);
        dir.turn_left();
        assert_eq!(dir, Direction::West);
        dir.turn_left();
        assert_eq!(dir, Direction::South);
        dir.turn_left();
        assert_eq!(dir, Direction::East);
    }

    #[test]
    fn test_four_turns_return_to_start() {
        for start in Direction::CYCLE {
            let mut dir = start;
            for _ in 0..4 {
                dir.turn_left();
            }
            assert_eq!(dir, start, "four left turns from {:?}", start);
        }
    }
}
