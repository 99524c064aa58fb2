//! Live adapters for real process execution.

pub mod shell;
