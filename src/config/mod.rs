//! Configuration file support for apidoc.
//!
//! This module provides:
//! - Loading `.apidoc.json` from the working directory
//! - Default-filling and validation of each section
//! - Template generation with `--init`

mod file;
mod init;
mod normalize;
mod schema;

pub use file::{load_config, load_config_in, load_config_with, ConfigError, CONFIG_FILENAME};
pub use init::{generate_config_file, generate_config_file_in, template_config, to_pretty_json};
pub use normalize::{init_doc, init_input, init_output, with_trailing_separator, DEFAULT_TITLE};
pub use schema::{Config, DocSpec, InputSpec, OutputSpec};
