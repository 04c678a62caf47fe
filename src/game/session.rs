use super::direction::Direction;
use super::engine::{Engine, Ending, Tick};
use rand::Rng;

/// The commands a player can give, whatever device they come from
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Action {
    /// Begin a run if none is active
    Start,
    /// Pause a running game or resume a paused one
    TogglePause,
    /// Resume a paused game
    Resume,
    /// Start the run over
    Restart,
    /// Steer the snake
    Turn(Direction),
    /// Change the player-controlled base speed
    SetBaseSpeed(u32),
    /// Choose whether the snake wraps around the edges of the board
    SetWrap(bool),
}

/// Where we are in the life of a run
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Phase {
    /// Nothing has been played yet
    Idle,
    Running,
    Paused,
    Ended(Ending),
}

/// A game engine together with the state machine governing when it runs
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Session<R> {
    engine: Engine<R>,
    phase: Phase,
    /// Score of the most recently finished run
    last_score: Option<u32>,
    /// Does a direction start a run when none is active?
    auto_start: bool,
}

impl<R: Rng> Session<R> {
    pub(crate) fn new(engine: Engine<R>, auto_start: bool) -> Session<R> {
        Session {
            engine,
            phase: Phase::Idle,
            last_score: None,
            auto_start,
        }
    }

    /// Apply a command.  Commands that make no sense in the current phase
    /// are ignored.
    pub(crate) fn apply(&mut self, action: Action) {
        match (self.phase, action) {
            (Phase::Idle | Phase::Ended(_), Action::Start) | (_, Action::Restart) => self.start(),
            (Phase::Running, Action::TogglePause) => {
                log::debug!("Paused");
                self.phase = Phase::Paused;
            }
            (Phase::Paused, Action::TogglePause | Action::Resume) => {
                log::debug!("Resumed");
                self.phase = Phase::Running;
            }
            (Phase::Running, Action::Turn(d)) => self.turn(d),
            (Phase::Idle | Phase::Ended(_), Action::Turn(d)) if self.auto_start => {
                self.start();
                self.turn(d);
            }
            (_, Action::SetBaseSpeed(speed)) => self.engine.set_base_speed(speed),
            (_, Action::SetWrap(wrap)) => self.engine.set_wrap(wrap),
            _ => (),
        }
    }

    /// Advance the game by one tick if it is running, moving to
    /// [`Phase::Ended`] if the run is over.
    pub(crate) fn tick(&mut self) -> Option<Tick> {
        if self.phase != Phase::Running {
            return None;
        }
        let tick = self.engine.advance();
        if let Some(ending) = tick.ending {
            let score = self.engine.snapshot().score;
            log::info!("Run over ({ending}); score {score}");
            self.last_score = Some(score);
            self.phase = Phase::Ended(ending);
        }
        Some(tick)
    }

    fn turn(&mut self, direction: Direction) {
        if !self.engine.turn(direction) {
            log::debug!("Ignoring turn to {direction:?}: snake cannot reverse");
        }
    }

    fn start(&mut self) {
        self.engine.reset();
        self.phase = Phase::Running;
        log::info!("Run started");
    }
}

impl<R> Session<R> {
    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub(crate) fn last_score(&self) -> Option<u32> {
        self.last_score
    }

    pub(crate) fn engine(&self) -> &Engine<R> {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    /// Settings without obstacles, so that the snake can move freely
    fn open_board() -> Settings {
        Settings {
            obstacle_count: Some(0),
            ..Settings::default()
        }
    }

    fn session(settings: Settings) -> Session<ChaCha12Rng> {
        Session::new(
            Engine::new(settings, ChaCha12Rng::seed_from_u64(RNG_SEED)),
            settings.auto_start,
        )
    }

    /// Drive a bounded-mode session into the top wall
    fn crash(session: &mut Session<ChaCha12Rng>) -> Ending {
        session.apply(Action::Turn(Direction::North));
        for _ in 0..=20 {
            if let Some(Tick {
                ending: Some(ending),
                ..
            }) = session.tick()
            {
                return ending;
            }
        }
        panic!("snake never crashed");
    }

    #[test]
    fn starts_idle() {
        let mut session = session(Settings::default());
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.tick(), None);
        assert_eq!(session.last_score(), None);
    }

    #[test]
    fn full_board_ends_on_first_tick() {
        let mut session = session(Settings {
            tile_count: 1,
            ..Settings::default()
        });
        session.apply(Action::Start);
        assert_eq!(
            session.tick(),
            Some(Tick {
                ate: None,
                ending: Some(Ending::Filled)
            })
        );
        assert_eq!(session.phase(), Phase::Ended(Ending::Filled));
        assert_eq!(session.last_score(), Some(0));
    }

    #[test]
    fn start_pause_resume() {
        let mut session = session(Settings::default());
        session.apply(Action::Start);
        assert_eq!(session.phase(), Phase::Running);
        session.apply(Action::TogglePause);
        assert_eq!(session.phase(), Phase::Paused);
        assert_eq!(session.tick(), None);
        session.apply(Action::TogglePause);
        assert_eq!(session.phase(), Phase::Running);
        session.apply(Action::TogglePause);
        session.apply(Action::Resume);
        assert_eq!(session.phase(), Phase::Running);
    }

    #[rstest]
    #[case(Action::TogglePause)]
    #[case(Action::Resume)]
    fn pause_commands_ignored_when_idle(#[case] action: Action) {
        let mut session = session(Settings::default());
        session.apply(action);
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn turn_auto_starts() {
        let mut session = session(open_board());
        session.apply(Action::Turn(Direction::East));
        assert_eq!(session.phase(), Phase::Running);
        session.tick();
        let head = session.engine().snapshot().snake.head();
        assert_eq!((head.x, head.y), (6, 5));
    }

    #[test]
    fn turn_without_auto_start() {
        let mut session = session(Settings {
            auto_start: false,
            ..Settings::default()
        });
        session.apply(Action::Turn(Direction::East));
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn turn_ignored_while_paused() {
        let mut session = session(open_board());
        session.apply(Action::Turn(Direction::East));
        session.tick();
        session.apply(Action::TogglePause);
        session.apply(Action::Turn(Direction::North));
        session.apply(Action::Resume);
        session.tick();
        let head = session.engine().snapshot().snake.head();
        assert_eq!((head.x, head.y), (7, 5));
    }

    #[test]
    fn crash_ends_run() {
        let mut session = session(open_board());
        assert_eq!(crash(&mut session), Ending::Wall);
        assert_eq!(session.phase(), Phase::Ended(Ending::Wall));
        assert_eq!(session.last_score(), Some(session.engine().snapshot().score));
        assert_eq!(session.tick(), None);
        session.apply(Action::TogglePause);
        assert_eq!(session.phase(), Phase::Ended(Ending::Wall));
    }

    #[rstest]
    #[case(Action::Start)]
    #[case(Action::Restart)]
    #[case(Action::Turn(Direction::South))]
    fn play_again(#[case] action: Action) {
        let mut session = session(open_board());
        crash(&mut session);
        session.apply(action);
        assert_eq!(session.phase(), Phase::Running);
        let snapshot = session.engine().snapshot();
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.snake.len(), 1);
        assert_eq!(snapshot.ending, None);
        assert!(session.last_score().is_some());
    }

    #[test]
    fn restart_from_pause() {
        let mut session = session(open_board());
        session.apply(Action::Turn(Direction::East));
        session.tick();
        session.apply(Action::SetBaseSpeed(4));
        session.apply(Action::TogglePause);
        session.apply(Action::Restart);
        assert_eq!(session.phase(), Phase::Running);
        let snapshot = session.engine().snapshot();
        assert_eq!(snapshot.heading, None);
        assert_eq!(snapshot.base_speed, 1);
    }

    #[test]
    fn start_ignored_while_running() {
        let mut session = session(open_board());
        session.apply(Action::Turn(Direction::East));
        session.tick();
        session.apply(Action::Start);
        assert_eq!(session.engine().snapshot().heading, Some(Direction::East));
    }

    #[test]
    fn settings_apply_in_any_phase() {
        let mut session = session(Settings::default());
        session.apply(Action::SetBaseSpeed(3));
        session.apply(Action::SetWrap(true));
        let snapshot = session.engine().snapshot();
        assert_eq!(snapshot.base_speed, 3);
        assert!(snapshot.wrap);
        assert_eq!(session.phase(), Phase::Idle);
    }
}
