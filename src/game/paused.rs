use crate::command::Command;
use crate::consts;
use crate::util::EnumExt;
use crossterm::event::Event;
use enum_map::Enum;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Widget,
    },
};

/// A widget for displaying a pause menu pop-up
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Paused {
    /// The currently-selected item in the pause menu
    selection: PauseOpt,
}

impl Paused {
    /// The height that should be used for the `Rect` passed to
    /// `Paused::render()`
    pub(super) const HEIGHT: u16 = 5;

    /// The width that should be used for the `Rect` passed to
    /// `Paused::render()`
    pub(super) const WIDTH: u16 = 20;

    pub(super) fn new() -> Paused {
        Paused {
            selection: PauseOpt::min(),
        }
    }

    /// Handle an input event.  Returns `Some` if the user made a choice.
    pub(super) fn handle_event(&mut self, event: Event) -> Option<PauseOpt> {
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Esc | Command::P | Command::Space => return Some(PauseOpt::Resume),
            Command::R => return Some(PauseOpt::Restart),
            Command::Q | Command::Quit => return Some(PauseOpt::Quit),
            Command::Enter => return Some(self.selection),
            Command::Up => {
                if let Some(opt) = self.selection.prev() {
                    self.selection = opt;
                }
            }
            Command::Down => {
                if let Some(opt) = self.selection.next() {
                    self.selection = opt;
                }
            }
            Command::Next => self.selection = self.selection.next().unwrap_or_else(PauseOpt::min),
            Command::Prev => self.selection = self.selection.prev().unwrap_or_else(PauseOpt::max),
            Command::Home => self.selection = PauseOpt::min(),
            Command::End => self.selection = PauseOpt::max(),
            _ => (),
        }
        None
    }
}

/// The choices in the pause menu
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(super) enum PauseOpt {
    Resume,
    /// Abandon the current run and start a new one
    Restart,
    /// Quit the application
    Quit,
}

impl PauseOpt {
    fn label(self) -> (&'static str, &'static str) {
        match self {
            PauseOpt::Resume => ("Resume", "p"),
            PauseOpt::Restart => ("Restart", "r"),
            PauseOpt::Quit => ("Quit", "q"),
        }
    }

    /// Render the option as a `Line` for display in the pause menu
    fn to_line(self, selected: bool) -> Line<'static> {
        let (name, key) = self.label();
        let line = Line::from_iter([
            Span::raw(if selected { "» " } else { "  " }),
            Span::raw(name),
            Span::raw(" ("),
            Span::styled(key, consts::KEY_STYLE),
            Span::raw(")"),
        ]);
        if selected {
            line.style(consts::MENU_SELECTION_STYLE)
        } else {
            line
        }
    }
}

impl Widget for Paused {
    /*
     * ┌───── PAUSED ─────┐
     * │ » Resume (p)     │
     * │   Restart (r)    │
     * │   Quit (q)       │
     * └──────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" PAUSED ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        block.render(area, buf);
        for (opt, row) in PauseOpt::iter().zip(inner.rows()) {
            opt.to_line(self.selection == opt).render(row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rstest::rstest;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[rstest]
    #[case(KeyCode::Esc, Some(PauseOpt::Resume))]
    #[case(KeyCode::Char('p'), Some(PauseOpt::Resume))]
    #[case(KeyCode::Char(' '), Some(PauseOpt::Resume))]
    #[case(KeyCode::Char('r'), Some(PauseOpt::Restart))]
    #[case(KeyCode::Char('q'), Some(PauseOpt::Quit))]
    #[case(KeyCode::Enter, Some(PauseOpt::Resume))]
    #[case(KeyCode::Char('x'), None)]
    fn direct_choices(#[case] code: KeyCode, #[case] choice: Option<PauseOpt>) {
        let mut paused = Paused::new();
        assert_eq!(paused.handle_event(key(code)), choice);
    }

    #[test]
    fn navigate_then_choose() {
        let mut paused = Paused::new();
        assert_eq!(paused.handle_event(key(KeyCode::Up)), None);
        assert_eq!(paused.selection, PauseOpt::Resume);
        assert_eq!(paused.handle_event(key(KeyCode::Down)), None);
        assert_eq!(paused.handle_event(key(KeyCode::Enter)), Some(PauseOpt::Restart));
        assert_eq!(paused.handle_event(key(KeyCode::End)), None);
        assert_eq!(paused.handle_event(key(KeyCode::Down)), None);
        assert_eq!(paused.selection, PauseOpt::Quit);
        assert_eq!(paused.handle_event(key(KeyCode::Tab)), None);
        assert_eq!(paused.selection, PauseOpt::Resume);
        assert_eq!(paused.handle_event(key(KeyCode::BackTab)), None);
        assert_eq!(paused.selection, PauseOpt::Quit);
        assert_eq!(paused.handle_event(key(KeyCode::Home)), None);
        assert_eq!(paused.selection, PauseOpt::Resume);
    }

    #[test]
    fn render() {
        let area = Rect::new(0, 0, Paused::WIDTH, Paused::HEIGHT);
        let mut buffer = Buffer::empty(area);
        Paused::new().render(area, &mut buffer);
        let rows = area
            .rows()
            .map(|row| {
                row.columns()
                    .map(|c| buffer[(c.x, c.y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>();
        pretty_assertions::assert_eq!(
            rows,
            [
                "┌───── PAUSED ─────┐",
                "│ » Resume (p)     │",
                "│   Restart (r)    │",
                "│   Quit (q)       │",
                "└──────────────────┘",
            ]
        );
        assert_eq!(buffer[(12, 1)].fg, consts::KEY_STYLE.fg.unwrap_or_default());
    }
}
