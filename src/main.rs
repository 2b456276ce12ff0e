mod checks;
mod commands;
mod core;

use std::ffi::OsString;

use crate::core::error::{ShipError, print_error};
use crate::core::tool::{DEFAULT_TOOL, PackagingTool};
use clap::{Parser, Subcommand};

/// Gate releases behind a clean, pushed git state
#[derive(Parser)]
#[command(name = "shipgate")]
#[command(version, about, long_about = None)]
#[command(disable_help_subcommand = true)]
#[command(styles = get_styles())]
struct ShipgateCli {
  /// Override the packaging tool binary (useful for testing)
  #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_TOOL)]
  tool: String,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Print the one-line usage summary
  Help,

  /// Refresh the index, verify the tree matches HEAD, push the branch
  EnsureGit,

  /// Run the git checklist, then the packaging tool's upload step
  Release,

  /// Show the git state relevant to a release
  Status {
    /// Output status in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Run health checks and diagnostics
  Doctor {
    /// Run thorough checks (includes network tests)
    #[arg(long)]
    thorough: bool,
    /// Output results in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Any other target is forwarded verbatim to the packaging tool
  #[command(external_subcommand)]
  Forward(Vec<OsString>),
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = ShipgateCli::parse();

  let workdir = match std::env::current_dir() {
    Ok(dir) => dir,
    Err(e) => {
      eprintln!("Error: Failed to get current directory: {}", e);
      std::process::exit(1);
    }
  };

  let tool = PackagingTool::new(&cli.tool, &workdir);

  let result = match cli.command {
    Commands::Help => commands::run_help(),
    Commands::EnsureGit => commands::run_ensure_git(&workdir),
    Commands::Release => commands::run_release(&workdir, &tool),
    Commands::Status { json } => commands::run_status(&workdir, json),
    Commands::Doctor { thorough, json } => commands::run_doctor(&workdir, &cli.tool, thorough, json),
    Commands::Forward(args) => commands::run_forward(&tool, &args),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: ShipError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code());
}
