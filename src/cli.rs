// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
//   github-activity <username> [-v...]
//
// The username is declared as Option<String> on purpose: when it is missing
// we don't want clap's own error (which goes to stderr with exit code 2),
// we want to print our short usage line to stdout and exit with 1.
// main.rs takes care of that. Extra positional arguments after the username
// are accepted and ignored.
// =============================================================================

use clap::{ArgAction, Parser};

use crate::github::DEFAULT_API_URL;

/// The usage line printed when no username is given
pub const USAGE: &str = "Usage: github-activity <username>";

#[derive(Parser, Debug)]
#[command(
    name = "github-activity",
    version = "0.1.0",
    about = "Show the recent public activity of a GitHub user",
    long_about = "github-activity fetches the public event feed of a GitHub user and prints \
                  one human-readable line per event (pushes, issues, pull requests, stars...)."
)]
pub struct Cli {
    /// GitHub username whose activity should be shown
    ///
    /// Example: github-activity octocat
    pub username: Option<String>,

    /// Anything after the username is ignored
    #[arg(hide = true)]
    pub extra: Vec<String>,

    /// Print diagnostic logs to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Base URL of the GitHub API (used to point the tool at a test server)
    #[arg(long, default_value = DEFAULT_API_URL, hide = true)]
    pub api_url: String,
}

impl Cli {
    // Returns the username, treating "" and whitespace-only input as missing
    pub fn username(&self) -> Option<&str> {
        self.username
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
