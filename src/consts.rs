//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};

/// Cell at which the snake starts each run (moved to the middle of the board
/// if the board is too small to contain it)
pub(crate) const START_POSITION: (i32, i32) = (5, 5);

/// The speed level goes up by one each time this many foods have been eaten
pub(crate) const FOODS_PER_LEVEL: u32 = 5;

/// Obstacles are regenerated each time this many foods have been eaten
pub(crate) const OBSTACLE_REFRESH_INTERVAL: u32 = 5;

/// Percentage of the board covered by obstacles when no obstacle count is
/// configured
pub(crate) const OBSTACLE_DENSITY_PERCENT: usize = 4;

/// Random placement gives up on rejection sampling after this many draws per
/// cell of the board and picks from the remaining free cells instead.
pub(crate) const SAMPLE_ATTEMPTS_PER_CELL: usize = 4;

/// Uniform draws below this produce normal food
pub(crate) const NORMAL_FOOD_THRESHOLD: f64 = 0.7;

/// Uniform draws below this (and at least [`NORMAL_FOOD_THRESHOLD`]) produce
/// big food; the rest produce slow food.
pub(crate) const BIG_FOOD_THRESHOLD: f64 = 0.9;

/// Configured cell sizes are in pixels; a terminal column stands in for this
/// many of them.
pub(crate) const PIXELS_PER_COLUMN: u16 = 10;

/// Minimum width of the area in which the game is drawn, so that the score
/// bar and status line fit on small boards
pub(crate) const MIN_DISPLAY_WIDTH: u16 = 64;

/// Glyph for the snake's head when it is moving north/up
pub(crate) const SNAKE_HEAD_NORTH_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving south/down
pub(crate) const SNAKE_HEAD_SOUTH_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving east/right
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving west/left
pub(crate) const SNAKE_HEAD_WEST_SYMBOL: char = '>';

/// Glyph for the snake's head before it has started moving
pub(crate) const SNAKE_HEAD_IDLE_SYMBOL: char = '◉';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for normal food
pub(crate) const NORMAL_FOOD_SYMBOL: char = '●';

/// Glyph for big food
pub(crate) const BIG_FOOD_SYMBOL: char = '◆';

/// Glyph for slow food
pub(crate) const SLOW_FOOD_SYMBOL: char = '●';

/// Glyph for obstacles
pub(crate) const OBSTACLE_SYMBOL: char = '█';

/// Glyph for the snake's head when it's collided with an obstacle, wall, or
/// itself
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for normal food
pub(crate) const NORMAL_FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for big food
pub(crate) const BIG_FOOD_STYLE: Style = Style::new()
    .fg(Color::Yellow)
    .add_modifier(Modifier::BOLD);

/// Style for slow food
pub(crate) const SLOW_FOOD_STYLE: Style = Style::new().fg(Color::LightBlue);

/// Style for obstacles
pub(crate) const OBSTACLE_STYLE: Style = Style::new().fg(Color::Gray);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the currently-selected menu item
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);
