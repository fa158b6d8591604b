mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    apply, export, init, show, tools, ApplyArgs, ExportArgs, InitArgs, ShowArgs, ToolsArgs,
};
use config::Config;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Scribe CLI - edit plain-text documents through AI tool calls
#[derive(Parser, Debug)]
#[command(name = "scribe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a scribe.config.json in the current directory
    Init(InitArgs),

    /// Apply one tool call to a document
    Apply(ApplyArgs),

    /// Print a document as the numbered snapshot the model sees
    Show(ShowArgs),

    /// Print the tool declarations to register with the model
    Tools(ToolsArgs),

    /// Export a document as txt, md, or html
    Export(ExportArgs),
}

fn init_tracing(cwd: &Path) {
    // A broken config file is reported by the command itself
    let level = Config::load(cwd)
        .map(|config| config.log_level)
        .unwrap_or_else(|_| Config::default().log_level);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    init_tracing(&cwd);

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Apply(args) => apply(args, &cwd),
        Command::Show(args) => show(args, &cwd),
        Command::Tools(args) => tools(args),
        Command::Export(args) => export(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
