use crate::config::Settings;
use crate::game::Game;
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Whether the application should keep going after handling some input
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

#[derive(Clone, Debug)]
pub(crate) struct App<R> {
    game: Game<R>,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(settings: Settings, rng: R) -> App<R> {
        App {
            game: Game::new(settings, rng),
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|frame| self.game.draw(frame))?;
            if self.game.process_input()? == Flow::Quit {
                return Ok(());
            }
        }
    }
}
