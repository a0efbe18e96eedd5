use std::collections::VecDeque;
use std::fmt;

use crate::direction::Direction;
use crate::food::Food;
use crate::grid::{Pos, Size};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Species {
    Snake,
    Ghost,
}

impl Species {
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Snake => "snake",
            Species::Ghost => "ghost",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happens when the head leaves the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Head stays outside the grid; `has_crossed` reports it.
    #[default]
    Terminate,
    /// Head reappears on the opposite edge.
    Wrap,
}

/// Copy of a snake handed out to renderers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeStatus {
    /// Tail first, head last.
    pub location: Vec<Pos>,
    pub species: Species,
}

#[derive(Clone, Debug)]
pub struct Snake {
    head: Pos,
    /// Everything behind the head, tail at the front.
    body: VecDeque<Pos>,
    direction: Direction,
    species: Species,
    policy: BoundaryPolicy,
    previous_tail: Option<Pos>,
}

impl Snake {
    /// `positions` runs tail to head. An empty slice yields a one-cell snake at the origin.
    pub fn new(
        positions: &[Pos],
        direction: Direction,
        species: Species,
        policy: BoundaryPolicy,
    ) -> Self {
        let (head, body) = match positions.split_last() {
            Some((head, body)) => (*head, body.iter().copied().collect()),
            None => (Pos::new(0, 0), VecDeque::new()),
        };

        Snake {
            head,
            body,
            direction,
            species,
            policy,
            previous_tail: None,
        }
    }

    pub fn location(&self) -> Vec<Pos> {
        self.body
            .iter()
            .copied()
            .chain(std::iter::once(self.head))
            .collect()
    }

    pub fn status(&self) -> SnakeStatus {
        SnakeStatus {
            location: self.location(),
            species: self.species,
        }
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn head(&self) -> Pos {
        self.head
    }

    pub fn heading(&self) -> Direction {
        self.direction
    }

    pub fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    pub fn previous_tail(&self) -> Option<Pos> {
        self.previous_tail
    }

    pub fn len(&self) -> usize {
        self.body.len() + 1
    }

    pub fn occupies(&self, pos: Pos) -> bool {
        self.head == pos || self.body.contains(&pos)
    }

    pub fn turn_left(&mut self) {
        self.direction.turn_left();
    }

    /// One step in the current heading; length is unchanged.
    pub fn slither(&mut self) {
        let new_head = self.head.add(self.direction.delta());

        self.body.push_back(self.head);
        self.head = new_head;
        self.previous_tail = self.body.pop_front();
    }

    /// Pulls a head that has left the grid back in on the opposite edge.
    pub fn wrap_move(&mut self, grid: Size) {
        if !grid.contains(self.head) {
            self.head = self.head.wrapped(grid);
        }
    }

    /// `slither` followed by whatever the boundary policy asks for.
    pub fn advance(&mut self, grid: Size) {
        self.slither();
        if self.policy == BoundaryPolicy::Wrap {
            self.wrap_move(grid);
        }
    }

    pub fn has_eaten(&self, food: &Food) -> bool {
        self.head == food.position()
    }

    /// Puts back the tail dropped by the last move. Growth is one cell per move at most.
    pub fn increase(&mut self) {
        if let Some(tail) = self.previous_tail.take() {
            self.body.push_front(tail);
        }
    }

    pub fn has_touched_itself(&self) -> bool {
        self.body.contains(&self.head)
    }

    pub fn has_touched(&self, other: &Snake) -> bool {
        other.occupies(self.head)
    }

    pub fn has_crossed(&self, grid: Size) -> bool {
        !grid.contains(self.head)
    }
}
