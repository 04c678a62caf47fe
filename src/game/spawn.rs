//! Random placement of obstacles and food
//!
//! Both generators sample uniformly random cells and reject occupied ones.
//! The number of draws is capped in proportion to the board's area; once the
//! cap is hit, whatever is still needed is chosen from an enumeration of the
//! free cells, so generation always terminates even on a crowded board.
use super::board::{Board, Position};
use super::food::{Food, FoodKind};
use super::snake::Snake;
use crate::consts;
use rand::{seq::IteratorRandom, Rng};
use std::collections::HashSet;

/// Number of obstacles to place when the configuration does not say:
/// 4% of the board, but at least one
pub(crate) fn default_obstacle_count(board: Board) -> usize {
    (board.area() * consts::OBSTACLE_DENSITY_PERCENT / 100).max(1)
}

/// Generate a fresh set of `count` obstacles avoiding `snake` and `food`.
///
/// `count` is clamped so that at least one cell besides the snake stays
/// open.
pub(crate) fn obstacles<R: Rng + ?Sized>(
    rng: &mut R,
    board: Board,
    count: usize,
    snake: &Snake,
    food: Option<Food>,
) -> HashSet<Position> {
    let target = count.min(board.area().saturating_sub(snake.len() + 1));
    let mut placed = HashSet::with_capacity(target);
    let mut attempts = board.area() * consts::SAMPLE_ATTEMPTS_PER_CELL;
    while placed.len() < target && attempts > 0 {
        attempts -= 1;
        let pos = random_cell(rng, board);
        if board.is_free(pos, &[snake, &food]) {
            placed.insert(pos);
        }
    }
    if placed.len() < target {
        let missing = target - placed.len();
        let free = board
            .positions()
            .filter(|&p| board.is_free(p, &[snake, &food, &placed]))
            .choose_multiple(rng, missing);
        placed.extend(free);
    }
    placed
}

/// Place a new food on a cell not covered by `snake` or `obstacles`.  Returns
/// `None` if there is no such cell.
pub(crate) fn food<R: Rng + ?Sized>(
    rng: &mut R,
    board: Board,
    snake: &Snake,
    obstacles: &HashSet<Position>,
) -> Option<Food> {
    let mut position = None;
    for _ in 0..board.area() * consts::SAMPLE_ATTEMPTS_PER_CELL {
        let pos = random_cell(rng, board);
        if board.is_free(pos, &[snake, obstacles]) {
            position = Some(pos);
            break;
        }
    }
    let position = match position {
        Some(pos) => pos,
        None => board
            .positions()
            .filter(|&p| board.is_free(p, &[snake, obstacles]))
            .choose(rng)?,
    };
    let kind = FoodKind::random(rng);
    Some(Food { position, kind })
}

fn random_cell<R: Rng + ?Sized>(rng: &mut R, board: Board) -> Position {
    let side = i32::from(board.tile_count());
    Position::new(rng.random_range(0..side), rng.random_range(0..side))
}
