mod board;
mod direction;
mod engine;
mod food;
mod paused;
mod session;
mod snake;
mod spawn;
use self::board::Position;
use self::direction::Direction;
use self::engine::{Engine, Ending};
use self::food::FoodKind;
use self::paused::{PauseOpt, Paused};
use self::session::{Action, Phase, Session};
use crate::app::Flow;
use crate::command::Command;
use crate::config::Settings;
use crate::consts;
use crate::util::center_rect;
use crossterm::event::{poll, read, Event};
use rand::{rngs::StdRng, Rng};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::io;
use std::ops::Range;
use std::time::Instant;

/// The game screen: a [`Session`] plus the tick timer and pause menu that
/// drive and present it
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = StdRng> {
    session: Session<R>,
    pause_menu: Paused,
    next_tick: Option<Instant>,
}

impl<R: Rng> Game<R> {
    pub(crate) fn new(settings: Settings, rng: R) -> Game<R> {
        Game {
            session: Session::new(Engine::new(settings, rng), settings.auto_start),
            pause_menu: Paused::new(),
            next_tick: None,
        }
    }

    /// Wait for either an input event or the next tick, whichever comes
    /// first, and act on it
    pub(crate) fn process_input(&mut self) -> io::Result<Flow> {
        if self.session.running() {
            let period = self.session.engine().tick_period();
            let when = *self.next_tick.get_or_insert_with(|| Instant::now() + period);
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.session.tick();
                self.next_tick = None;
                Ok(Flow::Continue)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    fn handle_event(&mut self, event: Event) -> Flow {
        match self.session.phase() {
            Phase::Paused => {
                let Some(choice) = self.pause_menu.handle_event(event) else {
                    return Flow::Continue;
                };
                match choice {
                    PauseOpt::Resume => self.apply(Action::Resume),
                    PauseOpt::Restart => self.apply(Action::Restart),
                    PauseOpt::Quit => return Flow::Quit,
                }
            }
            Phase::Running if event == Event::FocusLost => self.apply(Action::TogglePause),
            phase => {
                let Some(cmd) = event
                    .as_key_press_event()
                    .and_then(Command::from_key_event)
                else {
                    return Flow::Continue;
                };
                let snapshot = self.session.engine().snapshot();
                let action = match cmd {
                    Command::Quit | Command::Q => return Flow::Quit,
                    Command::Up => Action::Turn(Direction::North),
                    Command::Down => Action::Turn(Direction::South),
                    Command::Left => Action::Turn(Direction::West),
                    Command::Right => Action::Turn(Direction::East),
                    Command::Space => match phase {
                        Phase::Idle => Action::Start,
                        Phase::Ended(_) => Action::Restart,
                        _ => Action::TogglePause,
                    },
                    Command::P | Command::Esc => Action::TogglePause,
                    Command::Enter => Action::Start,
                    Command::R => Action::Restart,
                    Command::Faster => Action::SetBaseSpeed(snapshot.base_speed.saturating_add(1)),
                    Command::Slower => Action::SetBaseSpeed(snapshot.base_speed.saturating_sub(1)),
                    Command::T => Action::SetWrap(!snapshot.wrap),
                    _ => return Flow::Continue,
                };
                self.apply(action);
            }
        }
        Flow::Continue
    }

    /// Pass `action` to the session.  Any change of phase (or a restart)
    /// discards the pending tick deadline.
    fn apply(&mut self, action: Action) {
        let before = self.session.phase();
        self.session.apply(action);
        let after = self.session.phase();
        if after != before || action == Action::Restart {
            self.next_tick = None;
        }
        if after == Phase::Paused && before != Phase::Paused {
            self.pause_menu = Paused::new();
        }
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn score_bar(&self) -> Line<'static> {
        let snapshot = self.session.engine().snapshot();
        let last = self
            .session
            .last_score()
            .map_or_else(|| String::from("-"), |s| s.to_string());
        Line::styled(
            format!(
                " Score: {}  Foods: {}  Speed: {}  Level: {}  Wrap: {}  Last: {}",
                snapshot.score,
                snapshot.foods_eaten,
                snapshot.effective_speed,
                snapshot.speed_level,
                if snapshot.wrap { "on" } else { "off" },
                last,
            ),
            consts::SCORE_BAR_STYLE,
        )
    }

    /// The line shown beneath the board
    fn status_line(&self) -> Line<'static> {
        match self.session.phase() {
            Phase::Idle => Line::from_iter([
                Span::raw(" Press an arrow key or "),
                Span::styled("Enter", consts::KEY_STYLE),
                Span::raw(" to start, "),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(" to quit"),
            ]),
            Phase::Running | Phase::Paused => Line::from_iter([
                Span::raw(" "),
                Span::styled("Space", consts::KEY_STYLE),
                Span::raw(": pause  "),
                Span::styled("+/-", consts::KEY_STYLE),
                Span::raw(": speed  "),
                Span::styled("t", consts::KEY_STYLE),
                Span::raw(": wrap  "),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(": quit"),
            ]),
            Phase::Ended(ending) => Line::from_iter([
                Span::raw(format!(" GAME OVER: {ending} — Restart (")),
                Span::styled("r", consts::KEY_STYLE),
                Span::raw(") — Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ]),
        }
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let snapshot = self.session.engine().snapshot();
        let board = snapshot.board;
        let columns_per_cell = board.columns_per_cell();
        let board_size = Size {
            width: board.tile_count().saturating_mul(columns_per_cell),
            height: board.tile_count(),
        };
        let block_size = Size {
            width: board_size.width.saturating_add(2),
            height: board_size.height.saturating_add(2),
        };
        let display = center_rect(
            area,
            Size {
                width: block_size.width.max(consts::MIN_DISPLAY_WIDTH),
                height: block_size.height.saturating_add(2),
            },
        );
        let [score_area, block_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);
        self.score_bar().render(score_area, buf);

        let block_area = center_rect(block_area, block_size);
        if snapshot.wrap {
            DottedBorder.render(block_area, buf);
        } else {
            Block::bordered().render(block_area, buf);
        }

        let mut canvas = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            columns_per_cell,
            buf,
        };
        for pos in snapshot.snake.tail() {
            canvas.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        if let Some(food) = snapshot.food {
            let (symbol, style) = match food.kind {
                FoodKind::Normal => (consts::NORMAL_FOOD_SYMBOL, consts::NORMAL_FOOD_STYLE),
                FoodKind::Big => (consts::BIG_FOOD_SYMBOL, consts::BIG_FOOD_STYLE),
                FoodKind::Slow => (consts::SLOW_FOOD_SYMBOL, consts::SLOW_FOOD_STYLE),
            };
            canvas.draw_cell(food.position, symbol, style);
        }
        for &pos in snapshot.obstacles {
            canvas.fill_cell(pos, consts::OBSTACLE_SYMBOL, consts::OBSTACLE_STYLE);
        }
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        let head = snapshot.snake.head();
        if matches!(snapshot.ending, Some(e) if e != Ending::Filled) {
            // A snake that ran into the wall has its head just off the board
            let max = i32::from(board.tile_count()) - 1;
            let pos = Position::new(head.x.clamp(0, max), head.y.clamp(0, max));
            canvas.draw_cell(pos, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
        } else {
            let symbol = match snapshot.heading {
                None => consts::SNAKE_HEAD_IDLE_SYMBOL,
                Some(Direction::North) => consts::SNAKE_HEAD_NORTH_SYMBOL,
                Some(Direction::South) => consts::SNAKE_HEAD_SOUTH_SYMBOL,
                Some(Direction::East) => consts::SNAKE_HEAD_EAST_SYMBOL,
                Some(Direction::West) => consts::SNAKE_HEAD_WEST_SYMBOL,
            };
            canvas.draw_cell(head, symbol, consts::SNAKE_STYLE);
        }

        self.status_line().render(status_area, buf);

        if self.session.phase() == Phase::Paused {
            let pause_area = center_rect(
                display,
                Size {
                    width: Paused::WIDTH,
                    height: Paused::HEIGHT,
                },
            );
            self.pause_menu.render(pause_area, buf);
        }
    }
}

/// Maps board cells onto terminal cells, `columns_per_cell` columns wide
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    columns_per_cell: u16,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    /// Return the terminal columns covered by `pos`, or `None` if it lies
    /// outside the drawable area
    fn columns(&self, pos: Position) -> Option<(Range<u16>, u16)> {
        let col = u16::try_from(pos.x).ok()?;
        let row = u16::try_from(pos.y).ok()?;
        let x = self
            .area
            .x
            .checked_add(col.checked_mul(self.columns_per_cell)?)?;
        let y = self.area.y.checked_add(row)?;
        if x >= self.area.right() || y >= self.area.bottom() {
            return None;
        }
        let end = x.saturating_add(self.columns_per_cell).min(self.area.right());
        Some((x..end, y))
    }

    /// Draw `symbol` in the first column of the cell at `pos`
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some((xs, y)) = self.columns(pos) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((xs.start, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }

    /// Draw `symbol` across every column of the cell at `pos`
    fn fill_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some((xs, y)) = self.columns(pos) else {
            return;
        };
        for x in xs {
            if let Some(cell) = self.buf.cell_mut((x, y)) {
                cell.set_char(symbol);
                cell.set_style(Style::reset().patch(style));
            }
        }
    }
}

/// The border drawn around the board in wrap mode
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct DottedBorder;

impl Widget for DottedBorder {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let left = area.left();
        let top = area.top();
        let right = area.right() - 1;
        let bottom = area.bottom() - 1;
        let mut put = |x: u16, y: u16, symbol: char| {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(symbol);
            }
        };
        for x in (left + 1)..right {
            put(x, top, '⋯');
            put(x, bottom, '⋯');
        }
        for y in (top + 1)..bottom {
            put(left, y, '⋮');
            put(right, y, '⋮');
        }
        for (x, y) in [(left, top), (right, top), (left, bottom), (right, bottom)] {
            put(x, y, '·');
        }
    }
}
