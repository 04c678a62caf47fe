//! The simulation engine: one owned instance per game, advanced one tick at a
//! time.
//!
//! The engine knows nothing about timing, input devices or drawing.  The
//! caller feeds it pending writes (a direction, a base speed, the boundary
//! mode), calls [`Engine::advance()`] once per tick, and reads the result
//! back through [`Engine::snapshot()`].
use super::board::{Board, Position};
use super::direction::Direction;
use super::food::{Food, FoodKind};
use super::snake::Snake;
use super::spawn;
use crate::config::Settings;
use crate::consts;
use rand::Rng;
use std::collections::HashSet;
use std::fmt;
use std::time::Duration;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Engine<R> {
    rng: R,
    settings: Settings,
    board: Board,
    snake: Snake,
    food: Option<Food>,
    obstacles: HashSet<Position>,
    score: u32,
    foods_eaten: u32,
    speed_level: u32,
    base_speed: u32,
    wrap: bool,
    /// The direction the snake last moved in; `None` until the first move
    heading: Option<Direction>,
    /// The direction the snake will move in on the next tick
    pending: Option<Direction>,
    /// Set once the snake has collided with something
    collision: Option<Ending>,
}

impl<R: Rng> Engine<R> {
    /// Create an engine for `settings` with a freshly generated layout.  No
    /// run is in progress until the first direction is given.
    pub(crate) fn new(settings: Settings, rng: R) -> Engine<R> {
        let board = Board::new(settings.tile_count, settings.grid_size);
        let mut engine = Engine {
            rng,
            settings,
            board,
            snake: Snake::new(start_position(board)),
            food: None,
            obstacles: HashSet::new(),
            score: 0,
            foods_eaten: 0,
            speed_level: settings.initial_speed_level,
            base_speed: settings.initial_base_speed,
            wrap: settings.wrap,
            heading: None,
            pending: None,
            collision: None,
        };
        engine.reset();
        engine
    }

    /// Put everything back the way it is at the start of a run.  The
    /// boundary mode is left alone, as it is a player preference.
    pub(crate) fn reset(&mut self) {
        self.snake = Snake::new(start_position(self.board));
        self.score = 0;
        self.foods_eaten = 0;
        self.base_speed = self.settings.initial_base_speed;
        self.speed_level = self.settings.initial_speed_level;
        self.heading = None;
        self.pending = None;
        self.collision = None;
        // Obstacles first, so that the food can avoid them
        self.regenerate_obstacles();
        self.place_food();
    }

    /// Advance the simulation by one tick.
    ///
    /// Does nothing once the snake has collided with something, or while no
    /// direction has been given.
    pub(crate) fn advance(&mut self) -> Tick {
        if self.is_terminal() {
            return Tick {
                ate: None,
                ending: self.collision,
            };
        }
        let Some(direction) = self.pending else {
            return Tick {
                ate: None,
                ending: self.ending(),
            };
        };
        self.heading = Some(direction);
        let head = self.board.step(self.snake.head(), direction, self.wrap);
        self.snake.push_head(head);
        let ate = self.food.filter(|f| f.position == head).map(|f| f.kind);
        if let Some(kind) = ate {
            self.consume(kind);
        } else {
            self.snake.drop_tail();
        }
        self.collision = self.detect_collision();
        if let Some(ending) = self.collision {
            log::debug!("Snake collided at {head:?}: {ending}");
        }
        Tick {
            ate,
            ending: self.ending(),
        }
    }

    fn consume(&mut self, kind: FoodKind) {
        self.score += kind.score();
        self.foods_eaten += 1;
        let previous_level = self.speed_level;
        if self.settings.auto_level_up {
            self.speed_level = self
                .settings
                .initial_speed_level
                .saturating_add(self.foods_eaten / consts::FOODS_PER_LEVEL)
                .min(self.settings.speed_level_max);
        }
        if kind == FoodKind::Slow {
            self.speed_level = self.speed_level.saturating_sub(1).max(1);
        }
        log::debug!(
            "Ate {} food; score = {}, foods eaten = {}",
            kind.as_str(),
            self.score,
            self.foods_eaten
        );
        if self.speed_level != previous_level {
            log::debug!(
                "Speed level {previous_level} -> {}; effective speed {}",
                self.speed_level,
                self.effective_speed()
            );
        }
        if self.foods_eaten % consts::OBSTACLE_REFRESH_INTERVAL == 0 {
            self.regenerate_obstacles();
        }
        self.place_food();
    }

    fn regenerate_obstacles(&mut self) {
        let count = self
            .settings
            .obstacle_count
            .unwrap_or_else(|| spawn::default_obstacle_count(self.board));
        self.obstacles = spawn::obstacles(
            &mut self.rng,
            self.board,
            count,
            &self.snake,
            self.food,
        );
        log::debug!("Placed {} obstacles", self.obstacles.len());
    }

    fn place_food(&mut self) {
        self.food = spawn::food(&mut self.rng, self.board, &self.snake, &self.obstacles);
        if self.food.is_none() {
            log::debug!("No free cell left for food");
        }
    }
}

impl<R> Engine<R> {
    /// Request a change of direction for the next tick.  A request to turn
    /// back the way the snake last moved is ignored.  Returns whether the
    /// request was accepted.
    pub(crate) fn turn(&mut self, direction: Direction) -> bool {
        if self.heading.is_some_and(|h| h.reverse() == direction) {
            false
        } else {
            self.pending = Some(direction);
            true
        }
    }

    /// Set the player-controlled base speed, clamped to the valid range
    pub(crate) fn set_base_speed(&mut self, speed: u32) {
        self.base_speed = speed.clamp(1, self.settings.speed_level_max);
    }

    /// Choose between wrapping around the edges and dying on them
    pub(crate) fn set_wrap(&mut self, wrap: bool) {
        self.wrap = wrap;
    }

    /// Has the snake hit a wall, an obstacle, or itself?
    pub(crate) fn is_terminal(&self) -> bool {
        self.collision.is_some()
    }

    /// Return why the run is over, if it is: either a collision, or there
    /// being no room left for food
    pub(crate) fn ending(&self) -> Option<Ending> {
        self.collision
            .or_else(|| self.food.is_none().then_some(Ending::Filled))
    }

    /// The rate at which the game should tick, in ticks per second: the base
    /// speed plus the levels gained, capped at the maximum level
    pub(crate) fn effective_speed(&self) -> u32 {
        (self.base_speed + self.speed_level - 1).min(self.settings.speed_level_max)
    }

    /// Time between ticks at the current speed
    pub(crate) fn tick_period(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.effective_speed().max(1)))
    }

    pub(crate) fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            board: self.board,
            snake: &self.snake,
            heading: self.heading,
            food: self.food,
            obstacles: &self.obstacles,
            score: self.score,
            foods_eaten: self.foods_eaten,
            speed_level: self.speed_level,
            base_speed: self.base_speed,
            effective_speed: self.effective_speed(),
            wrap: self.wrap,
            ending: self.ending(),
        }
    }

    fn detect_collision(&self) -> Option<Ending> {
        let head = self.snake.head();
        if !self.wrap && !self.board.contains(head) {
            Some(Ending::Wall)
        } else if self.obstacles.contains(&head) {
            Some(Ending::Obstacle)
        } else if self.snake.bites_itself() {
            Some(Ending::SelfBite)
        } else {
            None
        }
    }
}

fn start_position(board: Board) -> Position {
    let (x, y) = consts::START_POSITION;
    let side = i32::from(board.tile_count());
    if x < side && y < side {
        Position::new(x, y)
    } else {
        Position::new(side / 2, side / 2)
    }
}

/// What happened during a call to [`Engine::advance()`]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Tick {
    /// The kind of food eaten, if any
    pub(crate) ate: Option<FoodKind>,

    /// Set if the run is over
    pub(crate) ending: Option<Ending>,
}

/// Why a run ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Ending {
    /// The snake left a non-wrapping board
    Wall,
    /// The snake ran into an obstacle
    Obstacle,
    /// The snake ran into its own body
    SelfBite,
    /// There is nowhere left to put food
    Filled,
}

impl fmt::Display for Ending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Ending::Wall => "hit the wall",
            Ending::Obstacle => "hit an obstacle",
            Ending::SelfBite => "bit yourself",
            Ending::Filled => "board full",
        };
        f.write_str(s)
    }
}

/// Read-only view of the engine's state for drawing
#[derive(Clone, Copy, Debug)]
pub(crate) struct Snapshot<'a> {
    pub(crate) board: Board,
    pub(crate) snake: &'a Snake,
    pub(crate) heading: Option<Direction>,
    pub(crate) food: Option<Food>,
    pub(crate) obstacles: &'a HashSet<Position>,
    pub(crate) score: u32,
    pub(crate) foods_eaten: u32,
    pub(crate) speed_level: u32,
    pub(crate) base_speed: u32,
    pub(crate) effective_speed: u32,
    pub(crate) wrap: bool,
    pub(crate) ending: Option<Ending>,
}
