// src/events/model.rs
// =============================================================================
// The shape of one record in the GitHub event feed.
//
// Only the fields we print are modeled. serde ignores everything else in the
// JSON (id, actor, created_at, the rest of the payload, ...).
//
// Missing or null fields never fail decoding: they become an empty string or
// None. Only a body that is not a JSON array of objects is rejected.
// =============================================================================

use serde::{Deserialize, Deserializer};
use std::fmt;

// The event types we know how to describe.
//
// Anything else lands in Other with the original string so it can still be
// named in the "Skipping unknown event" line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum EventKind {
    Push,
    Issues,
    Create,
    Watch,
    PullRequest,
    PullRequestReview,
    PullRequestReviewComment,
    Release,
    Other(String),
}

impl EventKind {
    /// The wire name of the event type, e.g. "PushEvent"
    pub fn as_str(&self) -> &str {
        match self {
            EventKind::Push => "PushEvent",
            EventKind::Issues => "IssuesEvent",
            EventKind::Create => "CreateEvent",
            EventKind::Watch => "WatchEvent",
            EventKind::PullRequest => "PullRequestEvent",
            EventKind::PullRequestReview => "PullRequestReviewEvent",
            EventKind::PullRequestReviewComment => "PullRequestReviewCommentEvent",
            EventKind::Release => "ReleaseEvent",
            EventKind::Other(name) => name,
        }
    }
}

impl From<String> for EventKind {
    fn from(name: String) -> Self {
        match name.as_str() {
            "PushEvent" => EventKind::Push,
            "IssuesEvent" => EventKind::Issues,
            "CreateEvent" => EventKind::Create,
            "WatchEvent" => EventKind::Watch,
            "PullRequestEvent" => EventKind::PullRequest,
            "PullRequestReviewEvent" => EventKind::PullRequestReview,
            "PullRequestReviewCommentEvent" => EventKind::PullRequestReviewComment,
            "ReleaseEvent" => EventKind::Release,
            _ => EventKind::Other(name),
        }
    }
}

impl Default for EventKind {
    fn default() -> Self {
        EventKind::Other(String::new())
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Repo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Payload {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub ref_type: Option<String>,
}

/// One activity record from `/users/{username}/events`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Event {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: EventKind,
    #[serde(default, deserialize_with = "null_as_default")]
    pub repo: Repo,
    #[serde(default, deserialize_with = "null_as_default")]
    pub payload: Payload,
}

impl Event {
    pub fn repo_name(&self) -> &str {
        &self.repo.name
    }

    // Absent action reads as "", same as an empty one.
    pub fn action(&self) -> &str {
        self.payload.action.as_deref().unwrap_or("")
    }

    pub fn ref_type(&self) -> &str {
        self.payload.ref_type.as_deref().unwrap_or("")
    }
}

// Treats an explicit JSON null like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
