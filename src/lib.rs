pub mod colors;
pub mod config;
pub mod lang;
mod output;
pub mod walker;

pub use colors::{should_use_colors, Colors};
pub use config::{
    generate_config_file, generate_config_file_in, init_doc, init_input, init_output,
    load_config, load_config_in, load_config_with, Config, ConfigError, DocSpec, InputSpec,
    OutputSpec, CONFIG_FILENAME, DEFAULT_TITLE,
};
pub use lang::{supported_languages, BuiltinLanguages, LanguageSupport};
pub use output::{print_created, print_error, OutputContext, OutputMode, RunResult};
pub use walker::walk_sources;

/// Main entry point: report a loaded config and the source files it selects
pub fn run(config: &Config, ctx: &OutputContext) -> RunResult {
    let mut result = RunResult::default();

    output::print_config(config, ctx);

    for path in walk_sources(&config.input) {
        match path {
            Ok(path) => {
                result.files_found += 1;
                output::print_source(&path, ctx);
            }
            Err(e) => {
                result.walk_errors += 1;
                output::print_walk_error(&e, ctx);
            }
        }
    }

    output::print_summary(&result, ctx);

    result
}
