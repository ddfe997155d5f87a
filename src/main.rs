use std::process::ExitCode;

use apidoc::{
    generate_config_file, load_config, print_created, print_error, run, should_use_colors,
    OutputContext, OutputMode,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "apidoc")]
#[command(version, about = "Generate API documentation from source code comments")]
struct Cli {
    /// Generate a template .apidoc.json in the current directory
    #[arg(long)]
    init: bool,

    /// Output only source file paths
    #[arg(short, long)]
    quiet: bool,

    /// List every source file and enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Force colored output
    #[arg(long)]
    color: bool,

    /// Disable colored output
    #[arg(long, conflicts_with = "color")]
    no_color: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let ctx = OutputContext::new(
        mode,
        should_use_colors(cli.color, cli.no_color),
        cli.verbose,
    );

    // Handle --init command
    if cli.init {
        return handle_init(&ctx);
    }

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            print_error(&e, &ctx);
            return ExitCode::from(1);
        }
    };

    if run(&config, &ctx).has_errors() {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

fn handle_init(ctx: &OutputContext) -> ExitCode {
    match generate_config_file() {
        Ok(path) => {
            print_created(&path, ctx);
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_error(&e, ctx);
            ExitCode::from(1)
        }
    }
}
