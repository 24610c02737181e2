// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The interface is a single positional argument:
//   gh-activity <username>
//
// plus one optional override for the API base URL, which can also come from
// the GITHUB_API_URL environment variable. There are no config files.
// =============================================================================

use std::ffi::OsString;

use clap::Parser;
use url::Url;

use crate::error::ActivityError;
use crate::github::DEFAULT_API_URL;

#[derive(Parser, Debug)]
#[command(
    name = "gh-activity",
    version,
    about = "Print a GitHub user's recent public activity",
    long_about = "gh-activity fetches the public event feed of a GitHub user and prints \
                  one line per recognized event, newest first."
)]
pub struct Cli {
    /// GitHub username whose public events are shown
    ///
    /// Used as-is in the request path; an unknown user usually ends in a
    /// "Bad JSON" error because the API answers with an error object.
    pub username: String,

    /// Anything after the username is accepted and ignored
    #[arg(num_args = 0.., hide = true)]
    pub extra: Vec<String>,

    /// Base URL of the GitHub API
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

// Parses the command line
//
// Returns:
//   Ok(Some(cli)) = run with these arguments
//   Ok(None) = --help or --version was printed, nothing else to do
//   Err(Usage) = missing username or bad flag; clap's message is kept
//
// clap's own exit would use status 2 for usage errors, we want 1.
pub fn parse_args<I, T>(args: I) -> Result<Option<Cli>, ActivityError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(e) if !e.use_stderr() => {
            e.print()?;
            Ok(None)
        }
        Err(e) => {
            let usage = e.render().to_string();
            Err(ActivityError::Usage(usage.trim_end().to_string()))
        }
    }
}

impl Cli {
    // Parses --api-url, reporting a bad value as a usage error
    pub fn api_base(&self) -> Result<Url, ActivityError> {
        Url::parse(&self.api_url)
            .map_err(|e| ActivityError::Usage(format!("Invalid API URL '{}': {}", self.api_url, e)))
    }
}
