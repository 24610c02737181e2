// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Currently implements:
// - Building the public events URL for a user
// - Fetching that one page of events with an unauthenticated GET
// =============================================================================

mod fetch;

pub use fetch::{fetch_user_events, DEFAULT_API_URL};
