// src/events/mod.rs
// =============================================================================
// This module turns the raw event feed into printed lines.
//
// Submodules:
// - model: the Event struct serde decodes into
// - describe: the type/action dispatch table (event -> sentence)
// - render: decoding the body and writing the lines out
// =============================================================================

mod describe;
mod model;
mod render;

pub use render::{decode_events, render_events};
