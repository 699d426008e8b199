//! CLI entry point for dirtree

use std::io::IsTerminal;
use std::process;

use clap::{Parser, ValueEnum};
use dirtree::{OutputConfig, StreamingFormatter, TreeError, TreeWalker, WalkerConfig};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(about = "Print the current directory as a tree, skipping .git, node_modules and public")]
#[command(version)]
struct Args {
    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_env("DIRTREE_LOG")
        .unwrap_or_else(|_| EnvFilter::new("dirtree=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(args: &Args) -> Result<(), TreeError> {
    let root = std::env::current_dir().map_err(TreeError::CurrentDir)?;
    tracing::debug!(root = %root.display(), ?args, "starting walk");

    let walker = TreeWalker::new(WalkerConfig::default());
    let mut formatter = StreamingFormatter::new(OutputConfig {
        use_color: should_use_color(args.color),
    });
    walker.walk_streaming(&root, &mut formatter)?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging();

    if let Err(e) = run(&args) {
        eprintln!("dirtree: {}", e);
        process::exit(1);
    }
}
