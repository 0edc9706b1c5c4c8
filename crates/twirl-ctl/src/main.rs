//! Command-line host for twirl-build template generation.
//!
//! Constructs the task configuration from flags plus an optional
//! `.twirl-ctl.toml`, runs the build-phase task synchronously, and reports
//! the result with styled terminal output.

mod cli_config;
mod commands;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "twirl-ctl",
    version,
    about = "Compile Twirl templates into generated sources",
    styles = output::clap_styles()
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compile all templates and register the generated-source root
    Generate(GenerateArgs),
}

#[derive(Debug, Args)]
pub(crate) struct GenerateArgs {
    /// Directory containing the template files
    #[arg(long, value_name = "DIR")]
    pub source_dir: Option<PathBuf>,

    /// Destination directory for generated sources
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Charset used to read templates and write generated sources
    #[arg(long, value_name = "LABEL")]
    pub charset: Option<String>,

    /// Additional import made available to every template (repeatable)
    #[arg(long = "import", value_name = "IMPORT")]
    pub imports: Vec<String>,

    /// Path to the twirlc executable (defaults to `twirlc` on PATH)
    #[arg(long, value_name = "PATH", env = "TWIRLC")]
    pub compiler: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli_config::load_cli_config();

    let result = match cli.command {
        Commands::Generate(args) => commands::handle_generate_command(args, &config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(e);
            ExitCode::FAILURE
        }
    }
}
