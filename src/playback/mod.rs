//! Playback Module
//!
//! Timed output for the simulated long-running commands. Handlers describe
//! what to print and when as a `PlaybackSequence`; the session hands it to
//! the `PlaybackEngine`, which releases events as its clock advances.

pub mod engine;
pub mod types;

pub use engine::PlaybackEngine;
pub use types::{ms, PlaybackSequence, Step};
