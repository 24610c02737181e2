// src/main.rs
// =============================================================================
// This is the entry point of gh-activity.
//
// What happens here:
// 1. Parse the username from the command line
// 2. Fetch the user's public events (one HTTP request)
// 3. Decode the JSON array and print one line per recognized event
// 4. Exit with 0 on success, 1 on any error
//
// Everything runs sequentially. The tokio runtime only drives the single
// request; nothing happens concurrently.
// =============================================================================

mod cli;
mod error;
mod events;
mod github;

use error::ActivityError;

use anyhow::Result;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{}", e);
            e.downcast_ref::<ActivityError>()
                .map_or(1, ActivityError::exit_code)
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = match cli::parse_args(std::env::args_os())? {
        Some(cli) => cli,
        None => return Ok(()),
    };
    if !cli.extra.is_empty() {
        log::debug!("ignoring extra arguments: {:?}", cli.extra);
    }

    let api_base = cli.api_base()?;
    let body = github::fetch_user_events(&api_base, &cli.username).await?;
    let events = events::decode_events(&body)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let printed = events::render_events(&events, &mut out).map_err(ActivityError::from)?;
    log::debug!("printed {} line(s) for {} event(s)", printed, events.len());

    Ok(())
}
