//! Default-filling and validation of a freshly decoded config
//!
//! Each section has its own pass. The loader runs them in the order
//! input, doc, output and stops at the first error.

use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

use super::file::ConfigError;
use super::schema::Config;
use crate::lang::LanguageSupport;

/// Title used when `doc.title` is empty.
pub const DEFAULT_TITLE: &str = "APIDOC";

fn is_separator(c: char) -> bool {
    c == '/' || c == MAIN_SEPARATOR
}

/// Make `dir` end with exactly one path separator.
///
/// An empty string becomes `./`.
pub fn with_trailing_separator(dir: &str) -> String {
    let trimmed = dir.trim_end_matches(is_separator);
    let mut out = if trimmed.is_empty() && dir.is_empty() {
        String::from(".")
    } else {
        trimmed.to_string()
    };
    out.push(MAIN_SEPARATOR);
    out
}

/// Resolve `dir` against `wd` and drop `.` components.
fn resolve_dir(wd: &Path, dir: &str) -> PathBuf {
    let joined = if dir.is_empty() {
        wd.to_path_buf()
    } else {
        wd.join(dir)
    };
    joined
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Give `ext` exactly one leading dot; `None` for entries with nothing after the dots.
fn normalize_ext(ext: &str) -> Option<String> {
    let name = ext.trim_start_matches('.');
    if name.is_empty() {
        None
    } else {
        Some(format!(".{name}"))
    }
}

/// Normalize the `input` section.
pub fn init_input(
    wd: &Path,
    cfg: &mut Config,
    langs: &dyn LanguageSupport,
) -> Result<(), ConfigError> {
    let input = &mut cfg.input;

    let dir = resolve_dir(wd, &input.dir);
    let Some(dir_str) = dir.to_str() else {
        return Err(ConfigError::NonUtf8Path(dir));
    };
    input.dir = with_trailing_separator(dir_str);

    input.exts = input
        .exts
        .iter()
        .filter_map(|ext| normalize_ext(ext))
        .collect();

    if input.lang.is_empty() {
        return Err(ConfigError::MissingParam("type"));
    }
    input.lang = input.lang.to_lowercase();

    if !langs.is_supported(&input.lang) {
        return Err(ConfigError::UnsupportedLanguage(input.lang.clone()));
    }

    if input.exts.is_empty() {
        input.exts = langs
            .default_exts(&input.lang)
            .iter()
            .map(|ext| ext.to_string())
            .collect();
    }

    Ok(())
}

/// Normalize the `doc` section.
pub fn init_doc(cfg: &mut Config) -> Result<(), ConfigError> {
    if cfg.doc.title.is_empty() {
        cfg.doc.title = DEFAULT_TITLE.to_string();
    }
    Ok(())
}

/// Normalize the `output` section.
pub fn init_output(cfg: &mut Config) -> Result<(), ConfigError> {
    cfg.output.dir = with_trailing_separator(&cfg.output.dir);
    Ok(())
}
