//! Config file loading

use std::env;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::normalize::{init_doc, init_input, init_output};
use super::schema::Config;
use crate::lang::{BuiltinLanguages, LanguageSupport};

/// Name of the config file, looked up directly in the working directory.
pub const CONFIG_FILENAME: &str = ".apidoc.json";

/// Error type for loading and generating the config file
#[derive(Debug)]
pub enum ConfigError {
    /// The current working directory could not be resolved
    WorkingDir(io::Error),
    /// The config file is missing or unreadable
    Read { path: PathBuf, source: io::Error },
    /// The file is not valid JSON or a field has the wrong type
    Parse(serde_json::Error),
    /// A required parameter is empty
    MissingParam(&'static str),
    /// `input.type` names a language apidoc cannot scan
    UnsupportedLanguage(String),
    /// A resolved directory is not valid UTF-8 and cannot be stored in the config
    NonUtf8Path(PathBuf),
    /// The template file could not be created
    Create { path: PathBuf, source: io::Error },
    /// The template could not be encoded
    Serialize(serde_json::Error),
    /// The template could not be written
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::WorkingDir(e) => write!(f, "failed to get working directory: {e}"),
            ConfigError::Read { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            ConfigError::Parse(e) => write!(f, "failed to parse config file: {e}"),
            ConfigError::MissingParam(name) => write!(f, "missing required parameter: {name}"),
            ConfigError::UnsupportedLanguage(lang) => {
                write!(f, "unsupported language type [{lang}]")
            }
            ConfigError::NonUtf8Path(path) => {
                write!(f, "path is not valid UTF-8: {}", path.display())
            }
            ConfigError::Create { path, source } => {
                write!(f, "failed to create {}: {source}", path.display())
            }
            ConfigError::Serialize(e) => write!(f, "failed to encode config: {e}"),
            ConfigError::Write { path, source } => {
                write!(f, "failed to write {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::WorkingDir(e) => Some(e),
            ConfigError::Read { source, .. }
            | ConfigError::Create { source, .. }
            | ConfigError::Write { source, .. } => Some(source),
            ConfigError::Parse(e) | ConfigError::Serialize(e) => Some(e),
            ConfigError::MissingParam(_)
            | ConfigError::UnsupportedLanguage(_)
            | ConfigError::NonUtf8Path(_) => None,
        }
    }
}

/// Resolve the process working directory.
pub(crate) fn working_dir() -> Result<PathBuf, ConfigError> {
    env::current_dir().map_err(ConfigError::WorkingDir)
}

/// Load and normalize .apidoc.json from the current working directory.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_in(&working_dir()?)
}

/// Load and normalize .apidoc.json from `dir`, checking languages against
/// the built-in registry.
pub fn load_config_in(dir: &Path) -> Result<Config, ConfigError> {
    load_config_with(dir, &BuiltinLanguages)
}

/// Load and normalize .apidoc.json from `dir`.
///
/// Relative paths inside the file resolve against `dir`.
pub fn load_config_with(dir: &Path, langs: &dyn LanguageSupport) -> Result<Config, ConfigError> {
    let path = dir.join(CONFIG_FILENAME);
    debug!(path = %path.display(), "loading config");

    let data = fs::read(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let mut cfg: Config = serde_json::from_slice(&data).map_err(ConfigError::Parse)?;

    init_input(dir, &mut cfg, langs)?;
    init_doc(&mut cfg)?;
    init_output(&mut cfg)?;

    debug!(
        lang = %cfg.input.lang,
        input_dir = %cfg.input.dir,
        output_dir = %cfg.output.dir,
        "config loaded"
    );
    Ok(cfg)
}
