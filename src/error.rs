// src/error.rs
// =============================================================================
// The ways a run of gh-activity can fail.
//
// Every failure is fatal: main prints the message to stderr and exits with
// status 1. There is no retry and no partial output.
//
// Rust concepts:
// - thiserror: derive Display and Error for an enum instead of writing the
//   impls by hand
// - #[from]: lets the ? operator convert a library error into our enum
// =============================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActivityError {
    /// Missing or unusable command-line input
    #[error("{0}")]
    Usage(String),

    /// The request could not be completed (DNS, connect, TLS, body read)
    #[error("Error fetching GitHub data: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body is not a JSON array of events
    #[error("Bad JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// Writing to stdout failed (e.g. closed pipe)
    #[error("Error writing output: {0}")]
    Output(#[from] std::io::Error),
}

impl ActivityError {
    // All failures share the same exit status.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
