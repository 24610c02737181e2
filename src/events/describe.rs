// src/events/describe.rs
// =============================================================================
// Turns one event into the sentence we print for it.
//
// Dispatch happens in two levels:
// 1. On the event type. Unknown types get a generic "Skipping" line.
// 2. For some types, on the payload's action or ref_type.
//
// The second level is NOT symmetric across types:
// - Issues, Create, PullRequest and PullRequestReview print nothing for an
//   action they don't list.
// - Watch prints an "Unknown WatchEvent action" line instead.
// - PullRequestReviewComment never prints anything.
//
// Every function here is pure: it reads the event and returns Option<String>.
// None means "this event produces no output line".
// =============================================================================

use super::model::{Event, EventKind};

// Describes a single event
//
// Returns: Some(line) without trailing newline, or None if the event is silent
//
// Example:
//   PushEvent on "octo/repo" -> Some("Pushed to octo/repo")
pub fn describe_event(event: &Event) -> Option<String> {
    let repo = event.repo_name();

    match &event.kind {
        EventKind::Push => Some(format!("Pushed to {}", repo)),
        EventKind::Issues => describe_issues(event.action(), repo),
        EventKind::Create => describe_create(event.ref_type(), repo),
        EventKind::Watch => Some(describe_watch(event.action(), repo)),
        EventKind::PullRequest => describe_pull_request(event.action(), repo),
        EventKind::PullRequestReview => describe_pull_request_review(event.action(), repo),
        EventKind::PullRequestReviewComment => None,
        EventKind::Release => Some(format!("Published a release in {}", repo)),
        EventKind::Other(_) => Some(format!("Skipping unknown event of type {}", event.kind)),
    }
}

fn describe_issues(action: &str, repo: &str) -> Option<String> {
    let line = match action {
        "opened" => format!("Opened a new issue in {}", repo),
        "closed" => format!("Closed an issue in {}", repo),
        "reopened" => format!("Reopened an issue in {}", repo),
        _ => return None,
    };
    Some(line)
}

// "repository" reads differently: the repo *is* the thing created.
fn describe_create(ref_type: &str, repo: &str) -> Option<String> {
    let line = match ref_type {
        "branch" => format!("Created a branch in {}", repo),
        "tag" => format!("Created a tag in {}", repo),
        "repository" => format!("Created a repository {}", repo),
        _ => return None,
    };
    Some(line)
}

fn describe_watch(action: &str, repo: &str) -> String {
    match action {
        "started" => format!("Starred {}", repo),
        other => format!("Unknown WatchEvent action: {}", other),
    }
}

fn describe_pull_request(action: &str, repo: &str) -> Option<String> {
    let what = match action {
        "opened" => "Opened a pull request in",
        "closed" => "Closed a pull request in",
        "merged" => "Merged a pull request in",
        "reopened" => "Reopened a pull request in",
        "assigned" => "Assigned a user to a pull request in",
        "unassigned" => "Unassigned a user from a pull request in",
        "labeled" => "Added a label to a pull request in",
        "unlabeled" => "Removed a label from a pull request in",
        _ => return None,
    };
    Some(format!("{} {}", what, repo))
}

fn describe_pull_request_review(action: &str, repo: &str) -> Option<String> {
    let what = match action {
        "created" => "Created a review to a pull request in",
        "updated" => "Updated a review to a pull request in",
        "dismissed" => "Dismissed a review from a pull request in",
        _ => return None,
    };
    Some(format!("{} {}", what, repo))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why return Option<String> instead of printing?
//    - Printing is a side effect; returning the line keeps this code pure
//    - Tests can check the exact sentence without capturing stdout
//    - The caller decides where the line goes (stdout, a Vec<u8>, ...)
//
// 2. What does `_ => return None` do inside a match?
//    - `_` matches anything not listed above
//    - `return None` leaves the whole function early
//    - The other arms evaluate to a value that becomes `line` / `what`
//
// 3. Why &str parameters?
//    - We only read the action and repo name, never keep them
//    - Borrowing avoids cloning the event's strings
// -----------------------------------------------------------------------------
