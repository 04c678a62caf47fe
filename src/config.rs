use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Game parameters as read from a configuration document.
///
/// Every field is optional; anything missing is taken from
/// [`Settings::default()`].  Keys are camelCase, e.g.:
///
/// ```json
/// { "tileCount": 24, "speedLevelMax": 9, "wrapModeDefault": true }
/// ```
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct Config {
    /// On-screen size of a cell in pixels
    pub(crate) grid_size: Option<i64>,

    /// Number of cells along each side of the board
    pub(crate) tile_count: Option<i64>,

    pub(crate) initial_base_speed: Option<i64>,
    pub(crate) initial_speed_level: Option<i64>,
    pub(crate) speed_level_max: Option<i64>,

    /// Accepted for compatibility; leveling always happens every
    /// [`FOODS_PER_LEVEL`][crate::consts::FOODS_PER_LEVEL] foods.
    pub(crate) score_per_speed_level: Option<i64>,

    pub(crate) auto_level_up_enabled: Option<bool>,
    pub(crate) wrap_mode_default: Option<bool>,

    /// Number of obstacles per layout.  When unset, 4% of the board.
    pub(crate) obstacle_count: Option<i64>,

    /// Whether pressing a direction while no run is active starts one
    pub(crate) auto_start_on_turn: Option<bool>,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.json"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  Files with a `.toml`
    /// extension are parsed as TOML; anything else is parsed as JSON.  If the
    /// file does not exist and `allow_missing` is true, a default `Config`
    /// value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content).map_err(Into::into)
        } else {
            serde_json::from_str(&content).map_err(Into::into)
        }
    }

    /// Load the configuration from `path`, or from the default path if
    /// `path` is `None`.  Configuration problems never stop the game: any
    /// error is logged and the built-in defaults are used instead.
    pub(crate) fn discover(path: Option<&Path>) -> Config {
        let r = match path {
            Some(p) => Config::load(p, false),
            None => Config::default_path().and_then(|p| Config::load(&p, true)),
        };
        match r {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default configuration: {e:?}");
                Config::default()
            }
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse JSON configuration")]
    ParseJson(#[from] serde_json::Error),
    #[error("failed to parse TOML configuration")]
    ParseToml(#[from] toml::de::Error),
}

/// Validated game parameters.  The engine takes its own copy of these when
/// it is created.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Settings {
    pub(crate) grid_size: u16,
    pub(crate) tile_count: u16,
    pub(crate) initial_base_speed: u32,
    pub(crate) initial_speed_level: u32,
    pub(crate) speed_level_max: u32,
    pub(crate) auto_level_up: bool,
    pub(crate) wrap: bool,
    pub(crate) obstacle_count: Option<usize>,
    pub(crate) auto_start: bool,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            grid_size: 20,
            tile_count: 20,
            initial_base_speed: 1,
            initial_speed_level: 1,
            speed_level_max: 7,
            auto_level_up: true,
            wrap: false,
            obstacle_count: None,
            auto_start: true,
        }
    }
}

impl From<&Config> for Settings {
    /// Validate each field of `config`, replacing invalid values (with a
    /// warning) by their defaults
    fn from(config: &Config) -> Settings {
        let defaults = Settings::default();
        let grid_size = at_least("gridSize", config.grid_size, 1, defaults.grid_size);
        let tile_count = at_least("tileCount", config.tile_count, 1, defaults.tile_count);
        let initial_speed_level = at_least(
            "initialSpeedLevel",
            config.initial_speed_level,
            1,
            defaults.initial_speed_level,
        );
        let mut speed_level_max = at_least(
            "speedLevelMax",
            config.speed_level_max,
            1,
            defaults.speed_level_max,
        );
        if speed_level_max < initial_speed_level {
            log::warn!(
                "speedLevelMax {speed_level_max} is below initialSpeedLevel {initial_speed_level}; raising it"
            );
            speed_level_max = initial_speed_level;
        }
        let mut initial_base_speed = at_least(
            "initialBaseSpeed",
            config.initial_base_speed,
            1,
            defaults.initial_base_speed,
        );
        if initial_base_speed > speed_level_max {
            log::warn!(
                "initialBaseSpeed {initial_base_speed} is above speedLevelMax {speed_level_max}; lowering it"
            );
            initial_base_speed = speed_level_max;
        }
        let obstacle_count = config
            .obstacle_count
            .and_then(|raw| match usize::try_from(raw) {
                Ok(n) => Some(n),
                Err(_) => {
                    log::warn!("Ignoring invalid obstacleCount value {raw}");
                    None
                }
            });
        if let Some(n) = config.score_per_speed_level {
            log::debug!("scorePerSpeedLevel = {n} is reserved and does not affect leveling");
        }
        Settings {
            grid_size,
            tile_count,
            initial_base_speed,
            initial_speed_level,
            speed_level_max,
            auto_level_up: config.auto_level_up_enabled.unwrap_or(defaults.auto_level_up),
            wrap: config.wrap_mode_default.unwrap_or(defaults.wrap),
            obstacle_count,
            auto_start: config.auto_start_on_turn.unwrap_or(defaults.auto_start),
        }
    }
}

/// Convert `value` to `T`, falling back to `default` if it is missing, does
/// not fit in a `T`, or is below `min`
fn at_least<T>(key: &str, value: Option<i64>, min: T, default: T) -> T
where
    T: TryFrom<i64> + PartialOrd,
{
    let Some(raw) = value else {
        return default;
    };
    match T::try_from(raw) {
        Ok(v) if v >= min => v,
        _ => {
            log::warn!("Ignoring invalid {key} value {raw}");
            default
        }
    }
}
