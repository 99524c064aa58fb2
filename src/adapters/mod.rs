//! Adapter implementations of the shell port.
//!
//! `live` spawns real processes; `recording` captures live runs into a
//! cassette; `replaying` serves runs back from one.

pub mod live;
pub mod recording;
pub mod replaying;
