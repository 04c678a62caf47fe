use super::direction::Direction;
use crate::consts;
use std::collections::HashSet;

/// A cell on the board.  Coordinates are signed so that a head which has
/// stepped off a non-wrapping board can still be represented until the
/// collision is detected.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Position {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Position {
    pub(crate) const fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }
}

/// Something that occupies cells of the board
pub(crate) trait Occupancy {
    fn occupies(&self, pos: Position) -> bool;
}

impl Occupancy for HashSet<Position> {
    fn occupies(&self, pos: Position) -> bool {
        self.contains(&pos)
    }
}

impl<T: Occupancy> Occupancy for Option<T> {
    fn occupies(&self, pos: Position) -> bool {
        self.as_ref().is_some_and(|o| o.occupies(pos))
    }
}

/// The square playing field.
///
/// `grid_size` is the configured on-screen size of a cell in pixels; it only
/// affects drawing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Board {
    tile_count: u16,
    grid_size: u16,
}

impl Board {
    pub(crate) fn new(tile_count: u16, grid_size: u16) -> Board {
        Board {
            tile_count,
            grid_size,
        }
    }

    /// Length of a side of the board, in cells
    pub(crate) fn tile_count(self) -> u16 {
        self.tile_count
    }

    /// Total number of cells
    pub(crate) fn area(self) -> usize {
        usize::from(self.tile_count) * usize::from(self.tile_count)
    }

    /// Number of terminal columns used to draw one cell
    pub(crate) fn columns_per_cell(self) -> u16 {
        (self.grid_size / consts::PIXELS_PER_COLUMN).max(1)
    }

    pub(crate) fn contains(self, pos: Position) -> bool {
        let side = i32::from(self.tile_count);
        (0..side).contains(&pos.x) && (0..side).contains(&pos.y)
    }

    /// Is `pos` on the board and not occupied by anything in `excluding`?
    pub(crate) fn is_free(self, pos: Position, excluding: &[&dyn Occupancy]) -> bool {
        self.contains(pos) && !excluding.iter().any(|o| o.occupies(pos))
    }

    /// Iterate over every cell of the board in row-major order
    pub(crate) fn positions(self) -> impl Iterator<Item = Position> {
        let side = i32::from(self.tile_count);
        (0..side).flat_map(move |y| (0..side).map(move |x| Position::new(x, y)))
    }

    /// Return the cell one step from `pos` in `direction`.  When `wrap` is
    /// set, leaving one edge re-enters at the opposite one; otherwise the
    /// result may lie outside the board.
    pub(crate) fn step(self, pos: Position, direction: Direction, wrap: bool) -> Position {
        let (dx, dy) = direction.delta();
        let mut next = Position::new(pos.x + dx, pos.y + dy);
        if wrap {
            let side = i32::from(self.tile_count);
            next.x = next.x.rem_euclid(side);
            next.y = next.y.rem_euclid(side);
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Position::new(0, 0), true)]
    #[case(Position::new(19, 19), true)]
    #[case(Position::new(20, 5), false)]
    #[case(Position::new(5, 20), false)]
    #[case(Position::new(-1, 5), false)]
    #[case(Position::new(5, -1), false)]
    fn test_contains(#[case] pos: Position, #[case] inside: bool) {
        assert_eq!(Board::new(20, 20).contains(pos), inside);
    }

    #[rstest]
    #[case(Direction::North, Position::new(2, 7), false, Position::new(2, 6))]
    #[case(Direction::South, Position::new(2, 7), false, Position::new(2, 8))]
    #[case(Direction::East, Position::new(2, 7), false, Position::new(3, 7))]
    #[case(Direction::West, Position::new(2, 7), false, Position::new(1, 7))]
    #[case(Direction::North, Position::new(2, 0), false, Position::new(2, -1))]
    #[case(Direction::North, Position::new(2, 0), true, Position::new(2, 9))]
    #[case(Direction::South, Position::new(2, 9), false, Position::new(2, 10))]
    #[case(Direction::South, Position::new(2, 9), true, Position::new(2, 0))]
    #[case(Direction::East, Position::new(9, 7), false, Position::new(10, 7))]
    #[case(Direction::East, Position::new(9, 7), true, Position::new(0, 7))]
    #[case(Direction::West, Position::new(0, 7), false, Position::new(-1, 7))]
    #[case(Direction::West, Position::new(0, 7), true, Position::new(9, 7))]
    fn test_step(
        #[case] d: Direction,
        #[case] pos: Position,
        #[case] wrap: bool,
        #[case] r: Position,
    ) {
        assert_eq!(Board::new(10, 20).step(pos, d, wrap), r);
    }

    #[test]
    fn is_free_respects_exclusions() {
        let board = Board::new(5, 20);
        let walls = HashSet::from([Position::new(1, 1)]);
        let nothing: Option<HashSet<Position>> = None;
        assert!(board.is_free(Position::new(2, 2), &[&walls, &nothing]));
        assert!(!board.is_free(Position::new(1, 1), &[&walls, &nothing]));
        assert!(!board.is_free(Position::new(5, 1), &[]));
    }

    #[test]
    fn positions_cover_board() {
        let board = Board::new(4, 20);
        let cells = board.positions().collect::<HashSet<_>>();
        assert_eq!(cells.len(), board.area());
        assert!(cells.iter().all(|&p| board.contains(p)));
    }

    #[rstest]
    #[case(20, 2)]
    #[case(5, 1)]
    #[case(30, 3)]
    fn test_columns_per_cell(#[case] grid_size: u16, #[case] columns: u16) {
        assert_eq!(Board::new(20, grid_size).columns_per_cell(), columns);
    }
}
