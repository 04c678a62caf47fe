mod app;
mod command;
mod config;
mod consts;
mod game;
mod util;
use crate::app::App;
use crate::config::{Config, Settings};
use anyhow::Context;
use crossterm::event::{DisableFocusChange, EnableFocusChange};
use lexopt::{Arg, Parser, ValueExt};
use rand::{rngs::StdRng, Rng, SeedableRng};
use simplelog::{LevelFilter, WriteLogger};
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: gridsnake [<options>]

Play snake on a square grid, with food kinds, obstacles & speed levels

Options:
  -c, --config <PATH>   Read configuration from the given file
      --seed <N>        Seed the random number generator with N
      --log-file <PATH> Write log messages to the given file
      --debug           Log debug messages as well
  -h, --help            Display this help message and exit
  -V, --version         Show the program version and exit

Keys:
  Arrows / wasd / hjkl  Steer (and start a run)
  Enter                 Start a run
  Space / p / Esc       Pause or resume
  r                     Restart
  + / -                 Change the base speed
  t                     Toggle wrapping around the edges
  q / Ctrl-C            Quit
";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Invocation {
    Run(Arguments),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    seed: Option<u64>,
    log_file: Option<PathBuf>,
    debug: bool,
}

impl Invocation {
    fn from_parser(mut parser: Parser) -> Result<Invocation, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("seed") => args.seed = Some(parser.value()?.parse()?),
                Arg::Long("log-file") => args.log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Long("debug") => args.debug = true,
                Arg::Short('h') | Arg::Long("help") => return Ok(Invocation::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Invocation::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Invocation::Run(args))
    }

    fn run(self) -> ExitCode {
        match self {
            Invocation::Run(args) => match args.setup() {
                Ok((settings, seed)) => {
                    let r = run_terminal(settings, seed);
                    log::info!("Exiting");
                    io_exit(r)
                }
                Err(e) => {
                    eprintln!("gridsnake: {e:?}");
                    ExitCode::from(2)
                }
            },
            Invocation::Help => {
                print!("{USAGE}");
                ExitCode::SUCCESS
            }
            Invocation::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                ExitCode::SUCCESS
            }
        }
    }
}

impl Arguments {
    /// Start logging, then work out the game settings and RNG seed.  Nothing
    /// here touches the terminal.
    fn setup(self) -> anyhow::Result<(Settings, u64)> {
        if let Some(path) = self.log_file {
            let level = if self.debug {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            };
            let file = fs_err::File::create(&path).context("failed to create log file")?;
            WriteLogger::init(level, simplelog::Config::default(), file)
                .context("failed to initialize logger")?;
        }
        log::info!("Starting {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        let config = Config::discover(self.config.as_deref());
        let settings = Settings::from(&config);
        log::debug!("Settings: {settings:?}");
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        log::info!("RNG seed: {seed}");
        Ok((settings, seed))
    }
}

fn run_terminal(settings: Settings, seed: u64) -> io::Result<()> {
    let terminal = ratatui::init();
    let r = crossterm::execute!(io::stdout(), EnableFocusChange).and_then(|()| {
        App::new(settings, StdRng::seed_from_u64(seed)).run(terminal)
    });
    let _ = crossterm::execute!(io::stdout(), DisableFocusChange);
    ratatui::restore();
    r
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Terminal I/O failed: {e}");
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}

fn main() -> ExitCode {
    match Invocation::from_parser(Parser::from_env()) {
        Ok(cmd) => cmd.run(),
        Err(e) => {
            eprintln!("gridsnake: {e}");
            ExitCode::from(2)
        }
    }
}
