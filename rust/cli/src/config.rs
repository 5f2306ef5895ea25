use std::fs;

use serde::{Deserialize, Serialize};

/// Resolved CLI configuration: defaults a command falls back to when no
/// flag is given.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub default_spread: String,
    pub strategy: Option<String>,
    pub seed: Option<u64>,
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
    pub default_spread: ValueSource,
    pub strategy: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            default_spread: ValueSource::Default,
            strategy: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_spread: "three-card".into(),
            strategy: None,
            seed: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
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
        write!(f, "{:?}", self)
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolve configuration with precedence default < file < env.
///
/// The file is read from the path in `ARCANUM_CONFIG` when that variable
/// is set; individual `ARCANUM_SPREAD`, `ARCANUM_STRATEGY`, and
/// `ARCANUM_SEED` variables override file values.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("ARCANUM_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.default_spread {
            cfg.default_spread = v;
            sources.default_spread = ValueSource::File;
        }
        if let Some(v) = f.strategy {
            cfg.strategy = Some(v);
            sources.strategy = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Ok(v) = std::env::var("ARCANUM_SPREAD") {
        if !v.is_empty() {
            cfg.default_spread = v;
            sources.default_spread = ValueSource::Env;
        }
    }
    if let Ok(v) = std::env::var("ARCANUM_STRATEGY") {
        if !v.is_empty() {
            cfg.strategy = Some(v);
            sources.strategy = ValueSource::Env;
        }
    }
    if let Ok(v) = std::env::var("ARCANUM_SEED") {
        if let Ok(seed) = v.parse() {
            cfg.seed = Some(seed);
            sources.seed = ValueSource::Env;
        }
    }

    Ok(ConfigResolved { config: cfg, sources })
}

/// Wire shape of the toml config file; every field optional.
#[derive(Debug, Deserialize)]
struct FileConfig {
    default_spread: Option<String>,
    strategy: Option<String>,
    seed: Option<u64>,
}

impl ValueSource {
    pub fn label(&self) -> &'static str {
        match self {
            ValueSource::Default => "default",
            ValueSource::File => "file",
            ValueSource::Env => "env",
        }
    }
}
