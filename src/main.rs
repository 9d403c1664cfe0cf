//! gocross - cross-compile Go projects inside an ephemeral Docker container.
//!
//! The host needs no Go toolchain for the target platform: the working
//! directory is bind-mounted into a `golang` container, built there, and
//! the output file is handed back to the invoking user.

mod build;
mod config;
mod docker;
mod error;
mod paths;
mod preflight;
mod process;

use clap::Parser;

use config::Config;
use error::ToolError;

/// Help is rendered in a fixed order with the short form ahead of the
/// long form, matching the tool's historical output.
const HELP: &str = "\
-a --goarch
  Choosing architecture to compile to
-s --goos
  Choosing OS to compile to
-o --output
  Name of the outputted file";

#[derive(Parser)]
#[command(name = "gocross")]
#[command(about = "Cross-compile Go projects inside an ephemeral Docker container")]
#[command(override_help = HELP)]
struct Cli {
    /// Name of the outputted file
    #[arg(long, short = 'o', default_value = "main")]
    output: String,

    /// Choosing OS to compile to
    #[arg(long, short = 's', default_value = "linux")]
    goos: String,

    /// Choosing architecture to compile to
    #[arg(long, short = 'a', default_value = "amd64")]
    goarch: String,
}

fn main() {
    if let Err(err) = run() {
        // Reported condition, not a process failure: the message goes to
        // stdout and the exit status stays 0.
        println!("Error: {err}");
    }
}

fn run() -> Result<(), ToolError> {
    preflight::require_executable(docker::ENGINE)?;

    let cli = Cli::parse();

    // .env may provide GOPATH; the real environment wins.
    dotenvy::dotenv().ok();
    let config = Config::resolve(cli.output, cli.goos, cli.goarch);

    build::run(&config)
}
