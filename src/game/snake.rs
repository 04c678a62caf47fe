use super::board::{Occupancy, Position};
use std::collections::VecDeque;

/// The snake, as an ordered run of cells
///
/// The body is stored head first and always holds at least one cell.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    pub(super) body: VecDeque<Position>,
}

impl Snake {
    /// Create a one-cell snake at `start`
    pub(super) fn new(start: Position) -> Snake {
        Snake {
            body: VecDeque::from([start]),
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Position {
        self.body[0]
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len()
    }

    /// Return the positions of the cells behind the head, nearest first
    pub(crate) fn tail(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().skip(1).copied()
    }

    /// Return all positions of the snake, head first
    #[cfg(test)]
    pub(crate) fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    /// Does the head share a cell with any other segment?
    pub(crate) fn bites_itself(&self) -> bool {
        let head = self.head();
        self.tail().any(|p| p == head)
    }

    /// Put a new head in front of the current one
    pub(super) fn push_head(&mut self, pos: Position) {
        self.body.push_front(pos);
    }

    /// Drop the last segment, unless it is the only one
    pub(super) fn drop_tail(&mut self) {
        if self.body.len() > 1 {
            self.body.pop_back();
        }
    }
}

impl Occupancy for Snake {
    fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }
}
