use crate::colors::Colors;
use crate::config::{Config, ConfigError};
use crate::lang::supported_languages;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Normal,
    /// Only source file paths, one per line
    Quiet,
}

pub struct OutputContext {
    pub mode: OutputMode,
    pub colors: Colors,
    pub verbose: bool,
}

impl OutputContext {
    pub fn new(mode: OutputMode, use_colors: bool, verbose: bool) -> Self {
        Self {
            mode,
            colors: Colors::new(use_colors),
            verbose,
        }
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct RunResult {
    pub files_found: usize,
    pub walk_errors: usize,
}

impl RunResult {
    pub fn has_errors(&self) -> bool {
        self.walk_errors > 0
    }
}

pub fn print_config(cfg: &Config, ctx: &OutputContext) {
    if ctx.mode == OutputMode::Quiet {
        return;
    }

    let c = &ctx.colors;
    println!("{} {}", c.paint(c.info, "Language:"), cfg.input.lang);
    println!(
        "{} {}{}",
        c.paint(c.info, "Source:"),
        cfg.input.dir,
        if cfg.input.recursive {
            " (recursive)"
        } else {
            ""
        }
    );
    println!(
        "{} {}",
        c.paint(c.info, "Extensions:"),
        cfg.input.exts.join(" ")
    );
    println!("{} {}", c.paint(c.info, "Output:"), cfg.output.dir);
    println!("{} {}", c.paint(c.info, "Title:"), cfg.doc.title);
    if !cfg.doc.base_url.is_empty() {
        println!("{} {}", c.paint(c.info, "Base URL:"), cfg.doc.base_url);
    }
}

pub fn print_source(path: &Path, ctx: &OutputContext) {
    match ctx.mode {
        OutputMode::Quiet => println!("{}", path.display()),
        OutputMode::Normal if ctx.verbose => println!("  {}", path.display()),
        OutputMode::Normal => {}
    }
}

pub fn print_walk_error(err: &std::io::Error, ctx: &OutputContext) {
    eprintln!(
        "{} {err}",
        ctx.colors.paint(ctx.colors.warning, "Warning:")
    );
}

pub fn print_created(path: &Path, ctx: &OutputContext) {
    println!(
        "{} {}",
        ctx.colors.paint(ctx.colors.success, "Created"),
        path.display()
    );
}

pub fn print_error(err: &ConfigError, ctx: &OutputContext) {
    eprintln!("{} {err}", ctx.colors.paint(ctx.colors.error, "Error:"));

    if matches!(err, ConfigError::UnsupportedLanguage(_)) {
        let names: Vec<_> = supported_languages().collect();
        eprintln!("  supported types: {}", names.join(", "));
    }
}

pub fn print_summary(result: &RunResult, ctx: &OutputContext) {
    if ctx.mode == OutputMode::Quiet {
        return;
    }

    println!();
    let mut parts = vec![format!(
        "{}{} source files{}",
        ctx.colors.success,
        result.files_found,
        ctx.colors.reset()
    )];
    if result.walk_errors > 0 {
        parts.push(format!(
            "{}{} errors{}",
            ctx.colors.warning,
            result.walk_errors,
            ctx.colors.reset()
        ));
    }
    println!("{}", parts.join(", "));
}
