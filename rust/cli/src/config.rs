use serde::{Deserialize, Serialize};
use std::fs;

use holdem_engine::game::{DEFAULT_BIG_BLIND, DEFAULT_SMALL_BLIND};
use holdem_engine::player::STARTING_STACK;

/// Resolved table configuration. Defaults come from the engine's
/// constants; a TOML file named by `HOLDEM_CONFIG` overrides defaults,
/// and the `HOLDEM_*` environment variables override the file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub players: usize,
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: 2,
            starting_stack: STARTING_STACK,
            small_blind: DEFAULT_SMALL_BLIND,
            big_blind: DEFAULT_BIG_BLIND,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub players: ValueSource,
    pub starting_stack: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            players: ValueSource::Default,
            starting_stack: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "io: {}", e),
            ConfigError::Parse(e) => write!(f, "parse: {}", e),
            ConfigError::Invalid(msg) => write!(f, "invalid: {}", msg),
        }
    }
}

/// Shape of an on-disk config file: every field optional, absent fields
/// keep their defaults.
#[derive(Debug, Deserialize)]
struct FileConfig {
    players: Option<usize>,
    starting_stack: Option<u32>,
    small_blind: Option<u32>,
    big_blind: Option<u32>,
    seed: Option<u64>,
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("HOLDEM_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Ok(players) = std::env::var("HOLDEM_PLAYERS")
        && !players.is_empty()
    {
        let v: usize = players
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("HOLDEM_PLAYERS: {}", players)))?;
        cfg.players = v;
        sources.players = ValueSource::Env;
    }
    if let Ok(stack) = std::env::var("HOLDEM_STACK")
        && !stack.is_empty()
    {
        let v: u32 = stack
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("HOLDEM_STACK: {}", stack)))?;
        cfg.starting_stack = v;
        sources.starting_stack = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var("HOLDEM_SEED")
        && !seed.is_empty()
    {
        let v: u64 = seed
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("HOLDEM_SEED: {}", seed)))?;
        cfg.seed = Some(v);
        sources.seed = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved { config: cfg, sources })
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !(2..=9).contains(&cfg.players) {
        return Err(ConfigError::Invalid(format!(
            "players must be 2-9, got {}",
            cfg.players
        )));
    }
    if cfg.starting_stack == 0 {
        return Err(ConfigError::Invalid("starting_stack must be > 0".into()));
    }
    if cfg.small_blind == 0 || cfg.big_blind != 2 * cfg.small_blind {
        return Err(ConfigError::Invalid(format!(
            "blinds must satisfy big == 2 * small with small > 0, got {}/{}",
            cfg.small_blind, cfg.big_blind
        )));
    }
    if cfg.starting_stack < cfg.big_blind {
        return Err(ConfigError::Invalid(format!(
            "starting_stack {} cannot cover the big blind {}",
            cfg.starting_stack, cfg.big_blind
        )));
    }
    Ok(())
}
