//! Template generation for `--init` command

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

use super::file::{working_dir, ConfigError, CONFIG_FILENAME};
use super::schema::{Config, InputSpec};

/// Seed config written for first-time users.
pub fn template_config() -> Config {
    Config {
        input: InputSpec {
            dir: "./".to_string(),
            recursive: true,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Encode `cfg` as JSON indented with four spaces.
pub fn to_pretty_json(cfg: &Config) -> Result<Vec<u8>, ConfigError> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    cfg.serialize(&mut ser).map_err(ConfigError::Serialize)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Write the template .apidoc.json into `dir`, replacing any existing file.
pub fn generate_config_file_in(dir: &Path) -> Result<PathBuf, ConfigError> {
    let path = dir.join(CONFIG_FILENAME);
    let data = to_pretty_json(&template_config())?;

    let mut file = File::create(&path).map_err(|source| ConfigError::Create {
        path: path.clone(),
        source,
    })?;
    file.write_all(&data)
        .and_then(|()| file.flush())
        .map_err(|source| ConfigError::Write {
            path: path.clone(),
            source,
        })?;

    debug!(path = %path.display(), bytes = data.len(), "wrote config template");
    Ok(path)
}

/// Write the template .apidoc.json into the current working directory.
pub fn generate_config_file() -> Result<PathBuf, ConfigError> {
    generate_config_file_in(&working_dir()?)
}
