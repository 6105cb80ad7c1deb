// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Fetch the user's event feed from GitHub (one request)
// 3. Decode the JSON body into events
// 4. Format and print one line per event
// 5. Exit with proper code (0 = success, 1 = any failure)
//
// Every failure is fatal: we print exactly one "Error: ..." line to stderr
// and exit with status 1. A missing username prints the usage line to
// stdout instead.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod activity;      // src/activity/ - formatting and printing
mod cli;           // src/cli.rs - command-line parsing
mod error;         // src/error.rs - the error type
mod github;        // src/github/ - GitHub API access and event types
mod logging;       // src/logging.rs - diagnostic logs

use std::io::Write;

use anyhow::Result;
use clap::Parser;  // Parser trait enables the try_parse() method
use cli::Cli;
use error::ActivityError;
use tracing::{debug, info};

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Bad flags: print clap's message and exit 1 like every other failure
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        // --help and --version
        Err(e) => e.exit(),
    };
    logging::init(cli.verbose);

    let mut stdout = std::io::stdout();
    let exit_code = match run(&cli, &mut stdout).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = activity (or "no activity") printed
//   Ok(1) = no username given, usage printed
//   Err = fetching, decoding, formatting or writing failed
async fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<i32> {
    let Some(username) = cli.username() else {
        writeln!(out, "{}", cli::USAGE)?;
        return Ok(1);
    };

    if !cli.extra.is_empty() {
        debug!(ignored = ?cli.extra, "ignoring extra arguments");
    }

    writeln!(out, "Fetching activity for user: {}...", username)?;
    show_activity(&cli.api_url, username, out).await?;

    Ok(0)
}

// Fetch -> decode -> format -> print, for one user
async fn show_activity<W: Write>(
    api_url: &str,
    username: &str,
    out: &mut W,
) -> Result<(), ActivityError> {
    let body = github::fetch_user_events(api_url, username).await?;
    let events = github::decode_events(&body)?;
    info!(username, count = events.len(), "printing activity");
    activity::print_activity(&events, out)
}
